//! Effects the combat engine asks the host to carry out.
//!
//! The engine never spawns projectiles or deals damage itself; it returns
//! these descriptions and the host performs them.

use glam::Vec2;

use crate::state::{ChainId, EntityId, ProjectileId, Ticks};

/// An outgoing round.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    /// Unit direction after recoil and bloom.
    pub direction: Vec2,
    /// Recoil component of the deviation, in degrees.
    pub recoil_degrees: f32,
    /// Bloom component of the deviation, in degrees.
    pub bloom_degrees: f32,
    /// 0 for the trigger pull, 1.. for burst follow-ups.
    pub burst_index: u32,
    /// The host must report this round's hit with
    /// [`HitOrigin::RightChoice`](super::HitOrigin::RightChoice).
    pub ricochet: bool,
}

/// A ricochet projectile to spawn from `origin` toward `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ricochet {
    /// Present for trick-shot chains; report the hit with this link.
    pub chain: Option<ChainId>,
    pub origin: Vec2,
    pub source: EntityId,
    pub target: EntityId,
    pub remaining_bounces: u32,
}

/// What caused engine-originated damage.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageSource {
    Scorch,
    Ignite,
    Detonation,
    Shockwave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEffect {
    Shot(Shot),
    Ricochet(Ricochet),
    /// Single-target damage.
    Damage {
        target: EntityId,
        amount: f32,
        source: DamageSource,
    },
    /// Area damage centred on an ignited target.
    Ignite {
        target: EntityId,
        position: Vec2,
        damage: f32,
        radius: f32,
    },
    Detonation {
        target: EntityId,
        slug: ProjectileId,
        position: Vec2,
        damage: f32,
        stun_ticks: Ticks,
    },
    Shockwave {
        target: EntityId,
        position: Vec2,
        radius: f32,
        damage: f32,
        pulse: u32,
    },
    NaniteSwarm {
        source: EntityId,
        position: Vec2,
        nanites: u32,
    },
    AmmoRefunded {
        rounds: u32,
    },
}
