//! Events the host reports to the combat engine.

use glam::Vec2;

use crate::state::{ChainId, EntityId, ProjectileId};

/// Position of a hit within a trick-shot ricochet chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainLink {
    pub chain: ChainId,
    /// Bounces the chain may still make after this hit.
    pub remaining_bounces: u32,
}

/// Which projectile produced a hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitOrigin {
    /// A round fired by the weapon.
    #[default]
    Primary,
    /// A primary round that was tagged to ricochet when fired.
    RightChoice,
    /// Fragment of a fixed-count ricochet.
    Bounce,
    /// Link of a trick-shot chain.
    Chain(ChainLink),
}

impl HitOrigin {
    /// True for rounds that left the barrel, as opposed to ricochets.
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Primary | Self::RightChoice)
    }
}

/// A projectile striking a target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitEvent {
    pub target: EntityId,
    /// The projectile, when the host tracks it (lodged slugs need this).
    pub projectile: Option<ProjectileId>,
    /// Impact point in world units.
    pub position: Vec2,
    pub is_precision: bool,
    pub is_kill: bool,
    pub origin: HitOrigin,
}

impl HitEvent {
    pub fn new(target: EntityId, position: Vec2) -> Self {
        Self {
            target,
            projectile: None,
            position,
            is_precision: false,
            is_kill: false,
            origin: HitOrigin::Primary,
        }
    }

    #[must_use]
    pub fn precision(mut self) -> Self {
        self.is_precision = true;
        self
    }

    #[must_use]
    pub fn kill(mut self) -> Self {
        self.is_kill = true;
        self
    }

    #[must_use]
    pub fn with_projectile(mut self, projectile: ProjectileId) -> Self {
        self.projectile = Some(projectile);
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: HitOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// Everything a host can report about one weapon.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    ShotFired,
    Hit(HitEvent),
    Miss,
    /// A ricochet chain projectile expired without hitting anything.
    ChainMiss(ChainId),
    PlayerHurt,
    ReloadStart,
    ReloadCancel,
}
