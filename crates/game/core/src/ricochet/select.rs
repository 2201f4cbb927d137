//! Ricochet target selection.

use std::cmp::Ordering;

use glam::Vec2;

use crate::env::WorldView;
use crate::state::EntityId;

fn by_distance(origin: Vec2) -> impl Fn(&(EntityId, Vec2), &(EntityId, Vec2)) -> Ordering {
    move |a, b| {
        a.1.distance_squared(origin)
            .total_cmp(&b.1.distance_squared(origin))
            .then(a.0.cmp(&b.0))
    }
}

/// Nearest valid target within `range` that `accept` allows. Ties go to the
/// lower id.
pub fn nearest_target(
    world: &dyn WorldView,
    origin: Vec2,
    range: f32,
    accept: impl Fn(EntityId) -> bool,
) -> Option<(EntityId, Vec2)> {
    world
        .targets_near(origin, range)
        .into_iter()
        .filter(|(id, _)| accept(*id))
        .min_by(by_distance(origin))
}

/// Up to `count` distinct nearest targets, closest first.
pub fn nearest_targets(
    world: &dyn WorldView,
    origin: Vec2,
    range: f32,
    count: usize,
    accept: impl Fn(EntityId) -> bool,
) -> Vec<(EntityId, Vec2)> {
    let mut candidates: Vec<_> = world
        .targets_near(origin, range)
        .into_iter()
        .filter(|(id, _)| accept(*id))
        .collect();
    candidates.sort_by(by_distance(origin));
    candidates.truncate(count);
    candidates
}
