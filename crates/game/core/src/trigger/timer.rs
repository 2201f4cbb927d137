//! Tick-driven timer primitives shared by every perk.
//!
//! All primitives follow the same discipline: `tick()` is called exactly once
//! per simulation tick, before any event of that tick is applied.

use crate::state::Ticks;

/// Countdown armed to a fixed duration.
///
/// Re-arming restarts the countdown at the full duration rather than
/// extending what is left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffTimer {
    remaining: Ticks,
    duration: Ticks,
}

impl BuffTimer {
    pub fn arm(&mut self, duration: Ticks) {
        self.remaining = duration;
        self.duration = duration;
    }

    /// Advances one tick. Returns true on the tick the timer runs out.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> Ticks {
        self.remaining
    }

    pub fn duration(&self) -> Ticks {
        self.duration
    }
}

/// Stack counter whose stacks all drop when its timer expires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackingBuff {
    stacks: u8,
    timer: BuffTimer,
}

impl StackingBuff {
    /// Adds one stack (capped at `max`) and refreshes the timer.
    pub fn add(&mut self, max: u8, duration: Ticks) -> u8 {
        self.stacks = self.stacks.saturating_add(1).min(max);
        self.timer.arm(duration);
        self.stacks
    }

    /// Spends one stack. Returns false if there was none to spend.
    pub fn consume(&mut self) -> bool {
        if self.stacks == 0 {
            return false;
        }
        self.stacks -= 1;
        if self.stacks == 0 {
            self.timer.clear();
        }
        true
    }

    pub fn tick(&mut self) {
        if self.timer.tick() {
            self.stacks = 0;
        }
    }

    pub fn clear(&mut self) {
        self.stacks = 0;
        self.timer.clear();
    }

    #[inline]
    pub fn stacks(&self) -> u8 {
        if self.timer.is_active() { self.stacks } else { 0 }
    }

    pub fn is_active(&self) -> bool {
        self.stacks() > 0
    }

    pub fn timer(&self) -> &BuffTimer {
        &self.timer
    }
}

/// Counter of qualifying hits that must keep arriving within a window.
///
/// The window is measured from the previous qualifying hit: a hit arriving
/// `window` ticks later still counts, one tick later the counter resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowCounter {
    count: u32,
    elapsed: Ticks,
    window: Ticks,
}

impl WindowCounter {
    /// Records a qualifying hit and returns the new count.
    pub fn hit(&mut self, window: Ticks) -> u32 {
        self.count = self.count.saturating_add(1);
        self.elapsed = 0;
        self.window = window;
        self.count
    }

    pub fn tick(&mut self) {
        if self.count == 0 {
            return;
        }
        self.elapsed += 1;
        if self.elapsed > self.window {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.elapsed = 0;
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Ticks left before the counter lapses.
    pub fn remaining(&self) -> Ticks {
        if self.count == 0 {
            0
        } else {
            self.window + 1 - self.elapsed
        }
    }
}

/// Combat presence tracker driving auto-activated buffs.
///
/// Every hit dealt or taken refreshes the grace timer; while it runs, the
/// combat duration grows by one each tick. When grace lapses the duration
/// resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatGrace {
    grace: BuffTimer,
    combat_ticks: Ticks,
}

impl CombatGrace {
    pub fn engage(&mut self, grace_ticks: Ticks) {
        self.grace.arm(grace_ticks);
    }

    /// Advances one tick and returns the current combat duration.
    pub fn tick(&mut self) -> Ticks {
        if self.grace.is_active() {
            self.combat_ticks = self.combat_ticks.saturating_add(1);
        }
        if self.grace.tick() {
            self.combat_ticks = 0;
        }
        self.combat_ticks
    }

    pub fn in_combat(&self) -> bool {
        self.grace.is_active()
    }

    pub fn combat_ticks(&self) -> Ticks {
        self.combat_ticks
    }
}
