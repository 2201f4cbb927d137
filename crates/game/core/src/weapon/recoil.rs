//! Recoil and bloom accumulation.

use glam::Vec2;

use crate::stats::{ArchetypeProfile, RecoilPattern};
use crate::state::Ticks;

/// Side the wielder faces; decides the sign of follow-facing recoil.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// Facing implied by an aim direction.
    pub fn from_aim(aim: Vec2) -> Self {
        if aim.x < 0.0 { Self::Left } else { Self::Right }
    }
}

/// Angular deviation applied to one shot, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Deviation {
    pub recoil: f32,
    pub bloom: f32,
}

impl Deviation {
    pub fn total(&self) -> f32 {
        self.recoil + self.bloom
    }

    /// Rotates `aim` by the deviation. A zero aim falls back to `+X`.
    pub fn apply(&self, aim: Vec2) -> Vec2 {
        let aim = aim.try_normalize().unwrap_or(Vec2::X);
        Vec2::from_angle(self.total().to_radians()).rotate(aim)
    }
}

/// Accumulated recoil and bloom of one weapon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoilState {
    recoil_angle: f32,
    bloom_angle: f32,
    /// Signed recoil of the last trigger pull, reused by burst follow-ups.
    last_recoil: f32,
    idle_ticks: Ticks,
    flip: bool,
}

impl RecoilState {
    pub fn recoil_angle(&self) -> f32 {
        self.recoil_angle
    }

    pub fn bloom_angle(&self) -> f32 {
        self.bloom_angle
    }

    pub fn idle_ticks(&self) -> Ticks {
        self.idle_ticks
    }

    pub fn tick(&mut self) {
        self.idle_ticks = self.idle_ticks.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.recoil_angle = 0.0;
        self.bloom_angle = 0.0;
        self.last_recoil = 0.0;
    }

    /// Deviation for a trigger pull, then steps recoil and bloom.
    ///
    /// Everything resets first if the weapon sat idle longer than
    /// `idle_limit` ticks. `bloom_roll` is a uniform value in `[-1, 1]`.
    pub fn on_trigger(
        &mut self,
        profile: &ArchetypeProfile,
        stability: f32,
        facing: Facing,
        idle_limit: Ticks,
        bloom_roll: f32,
    ) -> Deviation {
        if self.idle_ticks > idle_limit {
            self.reset();
        }
        self.idle_ticks = 0;

        let sign = match profile.recoil_pattern {
            RecoilPattern::FollowFacing => facing.sign(),
            RecoilPattern::Alternating => {
                self.flip = !self.flip;
                if self.flip { 1.0 } else { -1.0 }
            }
        };
        let recoil = sign * self.recoil_angle;
        self.last_recoil = recoil;

        let ceiling = profile.recoil_ceiling(stability);
        let step = profile.recoil_step(stability);
        self.recoil_angle = if self.recoil_angle < ceiling {
            (self.recoil_angle + step).min(ceiling)
        } else {
            (self.recoil_angle - step).max(ceiling)
        };

        let bloom = if profile.automatic {
            let offset = bloom_roll.clamp(-1.0, 1.0) * self.bloom_angle;
            self.bloom_angle =
                (self.bloom_angle + profile.bloom_step).min(profile.bloom_ceiling(stability));
            offset
        } else {
            0.0
        };

        Deviation { recoil, bloom }
    }

    /// Deviation for a burst follow-up: the pull's recoil, no new accumulation.
    pub fn on_follow_up(&mut self) -> Deviation {
        self.idle_ticks = 0;
        Deviation {
            recoil: self.last_recoil,
            bloom: 0.0,
        }
    }
}
