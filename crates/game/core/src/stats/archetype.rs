//! Weapon archetypes and their calibration constants.
//!
//! Every archetype shares the same generic pipeline; only the numbers in its
//! [`ArchetypeProfile`] differ.

use super::curve::{AnchorCurve, lerp, stat_fraction};
use super::weapon::WeaponStats;
use crate::state::Ticks;

/// Closed set of weapon archetypes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    #[default]
    AutoRifle,
    HandCannon,
    PulseRifle,
    ScoutRifle,
    Bow,
}

/// How the recoil offset picks its sign on each shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoilPattern {
    /// Kick always away from the direction the wielder faces.
    FollowFacing,
    /// Kick flips side every shot.
    Alternating,
}

/// Formula constants for one archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchetypeProfile {
    /// Holding the trigger keeps firing; enables bloom.
    pub automatic: bool,
    /// Rounds per trigger pull (1 for non-burst weapons).
    pub burst_count: u32,
    /// Ticks between sub-shots of a burst.
    pub burst_interval_ticks: Ticks,
    /// Reload seconds at reload-speed 0 / 50 / 100.
    pub reload_seconds: AnchorCurve,
    pub recoil_pattern: RecoilPattern,
    /// Recoil ceiling in degrees at stability 0 and 100.
    pub recoil_ceiling: (f32, f32),
    /// Recoil step per shot in degrees at stability 0 and 100.
    pub recoil_step: (f32, f32),
    /// Bloom growth per shot, in degrees.
    pub bloom_step: f32,
    /// Bloom ceiling at stability 0, in degrees.
    pub bloom_ceiling: f32,
    /// Fraction of the bloom ceiling removed at stability 100.
    pub bloom_stability_reduction: f32,
    /// Hits on one target needed to arm a kinetic-tremors shockwave.
    pub tremors_hits_required: u32,
    /// Distance at which damage starts to fall off, at range 0 and 100.
    pub falloff_start: (f32, f32),
    /// Distance over which damage drops from full to the floor.
    pub falloff_span: f32,
    /// Damage multiplier once falloff has fully applied.
    pub falloff_floor: f32,
}

const AUTO_RIFLE: ArchetypeProfile = ArchetypeProfile {
    automatic: true,
    burst_count: 1,
    burst_interval_ticks: 0,
    reload_seconds: AnchorCurve::new(3.2, 2.4, 1.7),
    recoil_pattern: RecoilPattern::FollowFacing,
    recoil_ceiling: (6.0, 1.5),
    recoil_step: (0.6, 0.15),
    bloom_step: 0.35,
    bloom_ceiling: 8.0,
    bloom_stability_reduction: 0.6,
    tremors_hits_required: 12,
    falloff_start: (320.0, 560.0),
    falloff_span: 400.0,
    falloff_floor: 0.5,
};

const HAND_CANNON: ArchetypeProfile = ArchetypeProfile {
    automatic: false,
    burst_count: 1,
    burst_interval_ticks: 0,
    reload_seconds: AnchorCurve::new(3.0, 2.3, 1.8),
    recoil_pattern: RecoilPattern::FollowFacing,
    recoil_ceiling: (10.0, 3.0),
    recoil_step: (3.0, 1.0),
    bloom_step: 0.0,
    bloom_ceiling: 0.0,
    bloom_stability_reduction: 0.0,
    tremors_hits_required: 4,
    falloff_start: (360.0, 640.0),
    falloff_span: 320.0,
    falloff_floor: 0.6,
};

const PULSE_RIFLE: ArchetypeProfile = ArchetypeProfile {
    automatic: false,
    burst_count: 3,
    burst_interval_ticks: 4,
    reload_seconds: AnchorCurve::new(2.9, 2.2, 1.6),
    recoil_pattern: RecoilPattern::FollowFacing,
    recoil_ceiling: (7.0, 2.0),
    recoil_step: (1.5, 0.5),
    bloom_step: 0.0,
    bloom_ceiling: 0.0,
    bloom_stability_reduction: 0.0,
    tremors_hits_required: 9,
    falloff_start: (400.0, 700.0),
    falloff_span: 400.0,
    falloff_floor: 0.5,
};

const SCOUT_RIFLE: ArchetypeProfile = ArchetypeProfile {
    automatic: false,
    burst_count: 1,
    burst_interval_ticks: 0,
    reload_seconds: AnchorCurve::new(2.8, 2.1, 1.5),
    recoil_pattern: RecoilPattern::Alternating,
    recoil_ceiling: (5.0, 1.0),
    recoil_step: (1.2, 0.3),
    bloom_step: 0.0,
    bloom_ceiling: 0.0,
    bloom_stability_reduction: 0.0,
    tremors_hits_required: 5,
    falloff_start: (640.0, 1000.0),
    falloff_span: 480.0,
    falloff_floor: 0.6,
};

const BOW: ArchetypeProfile = ArchetypeProfile {
    automatic: false,
    burst_count: 1,
    burst_interval_ticks: 0,
    reload_seconds: AnchorCurve::new(1.0, 0.8, 0.6),
    recoil_pattern: RecoilPattern::Alternating,
    recoil_ceiling: (3.0, 0.5),
    recoil_step: (1.0, 0.2),
    bloom_step: 0.0,
    bloom_ceiling: 0.0,
    bloom_stability_reduction: 0.0,
    tremors_hits_required: 3,
    falloff_start: (720.0, 1100.0),
    falloff_span: 400.0,
    falloff_floor: 0.7,
};

impl Archetype {
    /// Strategy table lookup.
    pub const fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Self::AutoRifle => &AUTO_RIFLE,
            Self::HandCannon => &HAND_CANNON,
            Self::PulseRifle => &PULSE_RIFLE,
            Self::ScoutRifle => &SCOUT_RIFLE,
            Self::Bow => &BOW,
        }
    }
}

impl ArchetypeProfile {
    /// Highest recoil angle (degrees) reachable at this stability.
    pub fn recoil_ceiling(&self, stability: f32) -> f32 {
        lerp(
            self.recoil_ceiling.0,
            self.recoil_ceiling.1,
            stat_fraction(stability),
        )
    }

    /// Recoil growth per shot (degrees) at this stability.
    pub fn recoil_step(&self, stability: f32) -> f32 {
        lerp(self.recoil_step.0, self.recoil_step.1, stat_fraction(stability))
    }

    /// Highest bloom angle (degrees) reachable at this stability.
    pub fn bloom_ceiling(&self, stability: f32) -> f32 {
        self.bloom_ceiling * (1.0 - self.bloom_stability_reduction * stat_fraction(stability))
    }

    /// Unscaled reload duration in seconds for the given stats.
    pub fn base_reload_seconds(&self, stats: &WeaponStats) -> f32 {
        self.reload_seconds.evaluate(stats.reload_speed)
    }

    /// Damage multiplier at `distance` world units for the given stats.
    pub fn falloff_multiplier(&self, stats: &WeaponStats, distance: f32) -> f32 {
        let start = lerp(
            self.falloff_start.0,
            self.falloff_start.1,
            stat_fraction(stats.range),
        );
        if distance <= start {
            return 1.0;
        }
        if self.falloff_span <= 0.0 {
            return self.falloff_floor;
        }
        let t = (distance - start) / self.falloff_span;
        lerp(1.0, self.falloff_floor, t)
    }
}
