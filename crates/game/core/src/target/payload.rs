//! Detonator-slug accumulation and the explosion sequencer.

use arrayvec::ArrayVec;
use glam::Vec2;
use tracing::trace;

use crate::config::CombatConfig;
use crate::env::WorldView;
use crate::perk::tuning::detonator_slugs as slugs;
use crate::state::{ProjectileId, Ticks};

/// A slug lodged in a target, waiting for the chain to start.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LodgedSlug {
    pub projectile: ProjectileId,
    /// Last position reported for the slug; used once it is gone.
    pub position: Vec2,
    pub age: Ticks,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainPhase {
    #[default]
    Inactive,
    /// Detonating `next`, one slug every delay interval.
    Active { next: usize, countdown: Ticks },
    Cooldown { remaining: Ticks },
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadTracker {
    pending: ArrayVec<LodgedSlug, { CombatConfig::MAX_PENDING_SLUGS }>,
    phase: ChainPhase,
}

impl PayloadTracker {
    pub fn phase(&self) -> ChainPhase {
        self.phase
    }

    pub fn pending(&self) -> &[LodgedSlug] {
        &self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.phase == ChainPhase::Inactive
    }

    /// Records a slug. Returns true when it starts the explosion chain.
    ///
    /// Slugs arriving while a chain runs or cools down are ignored, as are
    /// repeats of an already lodged projectile.
    pub fn lodge(&mut self, projectile: ProjectileId, position: Vec2) -> bool {
        if self.phase != ChainPhase::Inactive {
            return false;
        }
        if self.pending.iter().any(|slug| slug.projectile == projectile) {
            return false;
        }
        if self
            .pending
            .try_push(LodgedSlug {
                projectile,
                position,
                age: 0,
            })
            .is_err()
        {
            return false;
        }
        if self.pending.len() < slugs::SLUGS_TO_EXPLODE {
            return false;
        }
        self.phase = ChainPhase::Active {
            next: 0,
            countdown: slugs::EXPLOSION_DELAY_TICKS,
        };
        true
    }

    /// Advances one tick. Returns the slug that detonates now, if any.
    pub fn tick(&mut self, world: &dyn WorldView) -> Option<LodgedSlug> {
        for slug in &mut self.pending {
            if let Some(position) = world.projectile_position(slug.projectile) {
                slug.position = position;
            }
        }

        match self.phase {
            ChainPhase::Inactive => {
                for slug in &mut self.pending {
                    slug.age += 1;
                }
                let before = self.pending.len();
                self.pending.retain(|slug| {
                    world.projectile_position(slug.projectile).is_some()
                        && slug.age <= slugs::PENDING_TIMEOUT_TICKS
                });
                if self.pending.len() != before {
                    trace!(dropped = before - self.pending.len(), "pruned lodged slugs");
                }
                None
            }
            ChainPhase::Active { next, countdown } => {
                let countdown = countdown.saturating_sub(1);
                if countdown > 0 {
                    self.phase = ChainPhase::Active { next, countdown };
                    return None;
                }
                let slug = self.pending.get(next).copied();
                if next + 1 >= self.pending.len() {
                    self.pending.clear();
                    self.phase = ChainPhase::Cooldown {
                        remaining: slugs::EXPLOSION_COOLDOWN_TICKS,
                    };
                } else {
                    self.phase = ChainPhase::Active {
                        next: next + 1,
                        countdown: slugs::EXPLOSION_DELAY_TICKS,
                    };
                }
                slug
            }
            ChainPhase::Cooldown { remaining } => {
                let remaining = remaining.saturating_sub(1);
                self.phase = if remaining == 0 {
                    ChainPhase::Inactive
                } else {
                    ChainPhase::Cooldown { remaining }
                };
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending.clear();
        self.phase = ChainPhase::Inactive;
    }
}
