//! Process-wide status of every target a weapon has touched.
//!
//! Records are keyed by entity id, created lazily on first contact and swept
//! periodically once the target is gone or the record has decayed to
//! nothing.

pub mod nanite;
pub mod payload;
pub mod scorch;
pub mod tremors;

use std::collections::{BTreeMap, VecDeque};

use glam::Vec2;
use tracing::{debug, trace};

pub use nanite::NaniteTracker;
pub use payload::{ChainPhase, LodgedSlug, PayloadTracker};
pub use scorch::{ScorchOutcome, ScorchTracker};
pub use tremors::TremorTracker;

use crate::env::WorldView;
use crate::perk::tuning::{detonator_slugs, kinetic_tremors, scorch as scorch_tuning};
use crate::state::{EntityId, ProjectileId};
use crate::trigger::{CombatEffect, DamageSource};

/// Everything tracked about one target.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetStatus {
    pub scorch: ScorchTracker,
    pub nanites: NaniteTracker,
    pub payload: PayloadTracker,
    pub tremors: TremorTracker,
}

impl TargetStatus {
    pub fn is_idle(&self) -> bool {
        self.scorch.is_idle()
            && self.nanites.is_idle()
            && self.payload.is_idle()
            && self.tremors.is_idle()
    }

    /// Stops every running sequencer without firing it.
    pub fn cancel(&mut self) {
        self.payload.cancel();
        self.tremors.cancel();
    }
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetStatusRegistry {
    records: BTreeMap<EntityId, TargetStatus>,
}

impl TargetStatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: EntityId) -> Option<&TargetStatus> {
        self.records.get(&target)
    }

    /// Record for `target`, created on first use.
    pub fn entry(&mut self, target: EntityId) -> &mut TargetStatus {
        self.records.entry(target).or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn remove(&mut self, target: EntityId) -> Option<TargetStatus> {
        self.records.remove(&target)
    }

    pub fn cancel(&mut self, target: EntityId) {
        if let Some(status) = self.records.get_mut(&target) {
            status.cancel();
        }
    }

    /// Applies scorch and resolves any ignition cascade it causes.
    ///
    /// Each ignition spreads stacks to valid targets in its radius, except the
    /// igniting target itself and whoever spread to it. A target can ignite at
    /// most once per cascade, which bounds the work.
    pub fn apply_scorch(
        &mut self,
        target: EntityId,
        stacks: u32,
        source: Option<EntityId>,
        world: &dyn WorldView,
    ) -> Vec<CombatEffect> {
        let mut effects = Vec::new();
        let mut ignited = Vec::new();
        let mut queue = VecDeque::from([(target, stacks, source)]);

        while let Some((id, amount, from)) = queue.pop_front() {
            if !world.is_valid_target(id) {
                continue;
            }
            let Some(position) = world.target_position(id) else {
                continue;
            };
            if self.entry(id).scorch.apply(amount) != ScorchOutcome::Ignited {
                continue;
            }

            debug!(target = %id, "target ignited");
            ignited.push(id);
            effects.push(CombatEffect::Ignite {
                target: id,
                position,
                damage: scorch_tuning::IGNITE_DAMAGE,
                radius: scorch_tuning::IGNITE_RADIUS,
            });
            for (neighbour, _) in world.targets_near(position, scorch_tuning::IGNITE_RADIUS) {
                if neighbour != id && Some(neighbour) != from {
                    queue.push_back((neighbour, scorch_tuning::IGNITE_SPREAD, Some(id)));
                }
            }
        }

        for id in ignited {
            self.entry(id).scorch.finish_ignite();
        }
        effects
    }

    /// Scorches every valid target within `radius` of `center` except
    /// `exclude`.
    pub fn scorch_area(
        &mut self,
        center: Vec2,
        radius: f32,
        stacks: u32,
        exclude: EntityId,
        world: &dyn WorldView,
    ) -> Vec<CombatEffect> {
        world
            .targets_near(center, radius)
            .into_iter()
            .filter(|(id, _)| *id != exclude)
            .flat_map(|(id, _)| self.apply_scorch(id, stacks, Some(exclude), world))
            .collect()
    }

    pub fn tag_nanites(&mut self, target: EntityId) -> u32 {
        self.entry(target).nanites.add()
    }

    pub fn release_nanites(&mut self, target: EntityId) -> u32 {
        self.records
            .get_mut(&target)
            .map_or(0, |status| status.nanites.release())
    }

    pub fn lodge_slug(
        &mut self,
        target: EntityId,
        projectile: ProjectileId,
        position: Vec2,
    ) -> bool {
        let started = self.entry(target).payload.lodge(projectile, position);
        if started {
            debug!(target = %target, "detonator chain started");
        }
        started
    }

    pub fn tremor_hit(&mut self, target: EntityId, required: u32) -> bool {
        self.entry(target).tremors.hit(required)
    }

    /// Advances every record by one tick.
    pub fn tick(&mut self, world: &dyn WorldView) -> Vec<CombatEffect> {
        let mut effects = Vec::new();

        for (&id, status) in &mut self.records {
            if !world.is_valid_target(id) {
                // Invalid targets take no damage; their stacks still decay.
                status.cancel();
                status.scorch.tick();
                status.nanites.tick();
                status.tremors.tick();
                continue;
            }

            if let Some(amount) = status.scorch.tick() {
                effects.push(CombatEffect::Damage {
                    target: id,
                    amount,
                    source: DamageSource::Scorch,
                });
            }
            status.nanites.tick();

            if let Some(slug) = status.payload.tick(world) {
                effects.push(CombatEffect::Detonation {
                    target: id,
                    slug: slug.projectile,
                    position: slug.position,
                    damage: detonator_slugs::DAMAGE,
                    stun_ticks: detonator_slugs::STUN_TICKS,
                });
            }

            if let Some(pulse) = status.tremors.tick() {
                if let Some(position) = world.target_position(id) {
                    effects.push(CombatEffect::Shockwave {
                        target: id,
                        position,
                        radius: kinetic_tremors::RADIUS,
                        damage: kinetic_tremors::DAMAGE,
                        pulse,
                    });
                }
            }
        }

        effects
    }

    /// Drops records of dead targets and records with nothing left to track.
    pub fn sweep(&mut self, world: &dyn WorldView) {
        let before = self.records.len();
        self.records
            .retain(|id, status| world.is_live(*id) && !status.is_idle());
        trace!(removed = before - self.records.len(), "swept target records");
    }
}
