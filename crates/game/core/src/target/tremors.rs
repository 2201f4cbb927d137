//! Kinetic-tremors shockwave sequencing.

use crate::perk::tuning::kinetic_tremors as tremors;
use crate::state::Ticks;
use crate::trigger::{BuffTimer, WindowCounter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Pending {
    countdown: Ticks,
    fired: u32,
}

/// Hit counter plus the pulse schedule of one target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TremorTracker {
    hits: WindowCounter,
    pending: Option<Pending>,
    cooldown: BuffTimer,
}

impl TremorTracker {
    /// Ticks from arming until another shockwave may arm.
    pub const COOLDOWN_TICKS: Ticks = tremors::INITIAL_DELAY_TICKS
        + tremors::PULSES * tremors::PULSE_INTERVAL_TICKS
        + tremors::POST_PULSE_GRACE_TICKS;

    /// Counts a hit. Returns true when it arms a shockwave.
    pub fn hit(&mut self, required: u32) -> bool {
        if self.cooldown.is_active() {
            return false;
        }
        if self.hits.hit(tremors::HIT_WINDOW_TICKS) < required {
            return false;
        }
        self.hits.reset();
        self.pending = Some(Pending {
            countdown: tremors::INITIAL_DELAY_TICKS,
            fired: 0,
        });
        self.cooldown.arm(Self::COOLDOWN_TICKS);
        true
    }

    /// Advances one tick. Returns the 0-based index of a pulse firing now.
    pub fn tick(&mut self) -> Option<u32> {
        self.hits.tick();
        self.cooldown.tick();

        let pending = self.pending.as_mut()?;
        pending.countdown = pending.countdown.saturating_sub(1);
        if pending.countdown > 0 {
            return None;
        }
        let pulse = pending.fired;
        pending.fired += 1;
        if pending.fired >= tremors::PULSES {
            self.pending = None;
        } else {
            pending.countdown = tremors::PULSE_INTERVAL_TICKS;
        }
        Some(pulse)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.hits.reset();
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none() && !self.cooldown.is_active() && self.hits.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulses_fire_on_schedule_then_cool_down() {
        let mut tracker = TremorTracker::default();
        assert!(!tracker.hit(3));
        assert!(!tracker.hit(3));
        assert!(tracker.hit(3));

        let mut pulses = Vec::new();
        for tick in 1..=TremorTracker::COOLDOWN_TICKS {
            if let Some(pulse) = tracker.tick() {
                pulses.push((tick, pulse));
            }
            if tick == 100 {
                assert!(!tracker.hit(1));
            }
        }
        assert_eq!(pulses, [(30, 0), (60, 1), (90, 2)]);
        assert!(tracker.hit(1));
    }
}
