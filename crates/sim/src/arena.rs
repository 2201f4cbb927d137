//! Host-side world: target health, respawns and live projectiles.
//!
//! The engine only reads positions through [`WorldView`]; everything that
//! owns entities lives here.
use std::collections::BTreeMap;

use armory_core::{EntityId, ProjectileId, TargetInfo, Ticks, WorldSnapshot, WorldView};
use glam::Vec2;
use serde::Serialize;

pub const TARGET_HEALTH: f32 = 60.0;
pub const RESPAWN_TICKS: Ticks = 120;
pub const PROJECTILE_LIFETIME: Ticks = 240;

/// Counters summarising one run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub shots: u32,
    /// Rounds from the barrel that connected; ricochets are counted apart.
    pub hits: u32,
    pub precision_hits: u32,
    pub misses: u32,
    pub kills: u32,
    pub reloads: u32,
    pub ricochets: u32,
    pub rounds_refunded: u32,
    pub weapon_damage: f32,
    /// Engine-originated damage keyed by source.
    pub effect_damage: BTreeMap<String, f32>,
}

#[derive(Debug)]
pub struct Arena {
    pub world: WorldSnapshot,
    spawns: BTreeMap<EntityId, Vec2>,
    health: BTreeMap<EntityId, f32>,
    respawns: Vec<(Ticks, EntityId)>,
    projectiles: Vec<(Ticks, ProjectileId)>,
    next_projectile: u32,
    pub report: Report,
}

impl Arena {
    /// A line of hostile targets in front of the shooter at the origin.
    pub fn new(positions: &[Vec2]) -> Self {
        let mut arena = Self {
            world: WorldSnapshot::new(),
            spawns: BTreeMap::new(),
            health: BTreeMap::new(),
            respawns: Vec::new(),
            projectiles: Vec::new(),
            next_projectile: 1,
            report: Report::default(),
        };
        for (index, position) in positions.iter().enumerate() {
            let id = EntityId(index as u32 + 1);
            arena.spawns.insert(id, *position);
            arena.spawn(id);
        }
        arena
    }

    fn spawn(&mut self, id: EntityId) {
        if let Some(position) = self.spawns.get(&id) {
            self.world.insert_target(id, TargetInfo::hostile(*position));
            self.health.insert(id, TARGET_HEALTH);
        }
    }

    /// The living target with the lowest id.
    pub fn focus(&self) -> Option<(EntityId, Vec2)> {
        self.health
            .keys()
            .find_map(|id| self.world.target_position(*id).map(|pos| (*id, pos)))
    }

    /// Position of a target that is still alive.
    pub fn living_position(&self, id: EntityId) -> Option<Vec2> {
        if !self.is_alive(id) {
            return None;
        }
        self.world.target_position(id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.health.contains_key(&id)
    }

    /// Applies damage. Returns true when this damage killed the target.
    pub fn damage(&mut self, id: EntityId, amount: f32) -> bool {
        let Some(health) = self.health.get_mut(&id) else {
            return false;
        };
        *health -= amount;
        if *health > 0.0 {
            return false;
        }
        self.health.remove(&id);
        self.report.kills += 1;
        true
    }

    /// Would `amount` kill the target outright?
    pub fn is_lethal(&self, id: EntityId, amount: f32) -> bool {
        self.health.get(&id).is_some_and(|health| *health <= amount)
    }

    /// Living targets within `radius`, in id order.
    pub fn living_near(&self, center: Vec2, radius: f32) -> Vec<EntityId> {
        self.world
            .targets_near(center, radius)
            .into_iter()
            .map(|(id, _)| id)
            .filter(|id| self.is_alive(*id))
            .collect()
    }

    /// Removes a dead target from the world and schedules its respawn.
    pub fn despawn(&mut self, id: EntityId, now: Ticks) {
        self.world.remove_target(id);
        self.respawns.push((now + RESPAWN_TICKS, id));
    }

    /// Tracks a round embedded at `position` so lodged slugs stay live.
    pub fn launch_projectile(&mut self, position: Vec2, now: Ticks) -> ProjectileId {
        let id = ProjectileId(self.next_projectile);
        self.next_projectile += 1;
        self.world.insert_projectile(id, position);
        self.projectiles.push((now + PROJECTILE_LIFETIME, id));
        id
    }

    /// Respawns due targets and expires old projectiles.
    pub fn advance(&mut self, now: Ticks) {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.respawns.drain(..).partition(|(at, _)| *at <= now);
        self.respawns = waiting;
        for (_, id) in due {
            self.spawn(id);
        }

        let world = &mut self.world;
        self.projectiles.retain(|(expires, id)| {
            let live = *expires > now;
            if !live {
                world.remove_projectile(*id);
            }
            live
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_targets_respawn_with_full_health() {
        let mut arena = Arena::new(&[Vec2::new(100.0, 0.0)]);
        let id = EntityId(1);

        assert!(!arena.damage(id, 30.0));
        assert!(arena.is_lethal(id, 30.0));
        assert!(arena.damage(id, 30.0));
        assert!(!arena.damage(id, 30.0), "already dead");

        arena.despawn(id, 10);
        assert!(arena.focus().is_none());

        arena.advance(10 + RESPAWN_TICKS - 1);
        assert!(!arena.world.is_valid_target(id));
        arena.advance(10 + RESPAWN_TICKS);
        assert_eq!(arena.focus(), Some((id, Vec2::new(100.0, 0.0))));
        assert_eq!(arena.report.kills, 1);
    }

    #[test]
    fn projectiles_expire() {
        let mut arena = Arena::new(&[]);
        let id = arena.launch_projectile(Vec2::ONE, 0);
        assert!(arena.world.projectile_position(id).is_some());
        arena.advance(PROJECTILE_LIFETIME);
        assert!(arena.world.projectile_position(id).is_none());
    }
}
