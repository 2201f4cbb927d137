//! Read-only view of the host's world.

use std::collections::BTreeMap;

use glam::Vec2;

use crate::state::{EntityId, ProjectileId};

/// Queries the combat engine makes against the host's entities.
///
/// The engine never holds entity references; it asks by id every time and
/// treats a missing answer as "gone".
pub trait WorldView {
    /// Position of a live entity.
    fn target_position(&self, id: EntityId) -> Option<Vec2>;

    /// Live, hostile and not damage-immune.
    fn is_valid_target(&self, id: EntityId) -> bool;

    /// Valid targets within `radius` of `center`, ordered by id.
    fn targets_near(&self, center: Vec2, radius: f32) -> Vec<(EntityId, Vec2)>;

    /// Position of a projectile that still exists.
    fn projectile_position(&self, id: ProjectileId) -> Option<Vec2>;

    fn is_live(&self, id: EntityId) -> bool {
        self.target_position(id).is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetInfo {
    pub position: Vec2,
    pub friendly: bool,
    pub immune: bool,
}

impl TargetInfo {
    pub fn hostile(position: Vec2) -> Self {
        Self {
            position,
            friendly: false,
            immune: false,
        }
    }

    fn is_valid(&self) -> bool {
        !self.friendly && !self.immune
    }
}

/// In-memory world used by headless hosts and tests.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    targets: BTreeMap<EntityId, TargetInfo>,
    projectiles: BTreeMap<ProjectileId, Vec2>,
}

impl WorldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hostile target (builder pattern).
    #[must_use]
    pub fn with_target(mut self, id: EntityId, position: Vec2) -> Self {
        self.insert_target(id, TargetInfo::hostile(position));
        self
    }

    pub fn insert_target(&mut self, id: EntityId, info: TargetInfo) {
        self.targets.insert(id, info);
    }

    /// Despawns a target.
    pub fn remove_target(&mut self, id: EntityId) -> Option<TargetInfo> {
        self.targets.remove(&id)
    }

    pub fn move_target(&mut self, id: EntityId, position: Vec2) {
        if let Some(info) = self.targets.get_mut(&id) {
            info.position = position;
        }
    }

    pub fn target_mut(&mut self, id: EntityId) -> Option<&mut TargetInfo> {
        self.targets.get_mut(&id)
    }

    pub fn insert_projectile(&mut self, id: ProjectileId, position: Vec2) {
        self.projectiles.insert(id, position);
    }

    pub fn remove_projectile(&mut self, id: ProjectileId) {
        self.projectiles.remove(&id);
    }

    pub fn target_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.targets.keys().copied()
    }
}

impl WorldView for WorldSnapshot {
    fn target_position(&self, id: EntityId) -> Option<Vec2> {
        self.targets.get(&id).map(|info| info.position)
    }

    fn is_valid_target(&self, id: EntityId) -> bool {
        self.targets.get(&id).is_some_and(TargetInfo::is_valid)
    }

    fn targets_near(&self, center: Vec2, radius: f32) -> Vec<(EntityId, Vec2)> {
        let radius_sq = radius * radius;
        self.targets
            .iter()
            .filter(|(_, info)| {
                info.is_valid() && info.position.distance_squared(center) <= radius_sq
            })
            .map(|(id, info)| (*id, info.position))
            .collect()
    }

    fn projectile_position(&self, id: ProjectileId) -> Option<Vec2> {
        self.projectiles.get(&id).copied()
    }
}
