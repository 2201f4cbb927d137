//! Scorch stacks and ignition.

use crate::perk::tuning::scorch;
use crate::state::Ticks;
use crate::stats::lerp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScorchOutcome {
    /// Stacks after the application.
    Accumulated(u32),
    /// Threshold reached; stacks reset and the target is igniting.
    Ignited,
    /// The target is mid-ignition and cannot take stacks.
    Ignored,
}

/// Scorch state of one target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScorchTracker {
    stacks: u32,
    decay_elapsed: Ticks,
    dot_elapsed: Ticks,
    igniting: bool,
}

impl ScorchTracker {
    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    pub fn is_igniting(&self) -> bool {
        self.igniting
    }

    pub fn is_idle(&self) -> bool {
        self.stacks == 0 && !self.igniting
    }

    pub fn apply(&mut self, amount: u32) -> ScorchOutcome {
        if self.igniting {
            return ScorchOutcome::Ignored;
        }
        let total = self.stacks.saturating_add(amount);
        if total >= scorch::IGNITE_THRESHOLD {
            self.igniting = true;
            self.stacks = 0;
            self.decay_elapsed = 0;
            self.dot_elapsed = 0;
            return ScorchOutcome::Ignited;
        }
        self.stacks = total.min(scorch::MAX_STACKS);
        ScorchOutcome::Accumulated(self.stacks)
    }

    /// Ends the ignition started by [`apply`](Self::apply).
    pub fn finish_ignite(&mut self) {
        self.igniting = false;
    }

    /// Advances decay and damage-over-time. Returns the damage dealt this
    /// tick, if the damage interval elapsed.
    pub fn tick(&mut self) -> Option<f32> {
        if self.stacks == 0 {
            self.decay_elapsed = 0;
            self.dot_elapsed = 0;
            return None;
        }

        self.decay_elapsed += 1;
        if self.decay_elapsed >= scorch::DECAY_INTERVAL_TICKS {
            self.decay_elapsed = 0;
            self.stacks = self.stacks.saturating_sub(scorch::DECAY_PER_INTERVAL);
        }

        self.dot_elapsed += 1;
        if self.dot_elapsed < scorch::DOT_INTERVAL_TICKS {
            return None;
        }
        self.dot_elapsed = 0;
        (self.stacks > 0).then(|| {
            let t = self.stacks as f32 / scorch::MAX_STACKS as f32;
            lerp(scorch::MIN_DOT, scorch::MAX_DOT, t)
        })
    }
}
