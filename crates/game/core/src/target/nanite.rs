//! Nanite stacks released as a swarm on kill.

use crate::perk::tuning::nanotech;
use crate::trigger::BuffTimer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaniteTracker {
    stacks: u32,
    expiry: BuffTimer,
}

impl NaniteTracker {
    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    pub fn add(&mut self) -> u32 {
        self.stacks = (self.stacks + 1).min(nanotech::MAX_STACKS);
        self.expiry.arm(nanotech::EXPIRY_TICKS);
        self.stacks
    }

    /// Takes every stack for a swarm.
    pub fn release(&mut self) -> u32 {
        self.expiry.clear();
        std::mem::take(&mut self.stacks)
    }

    pub fn tick(&mut self) {
        if self.expiry.tick() {
            self.stacks = 0;
        }
    }

    pub fn is_idle(&self) -> bool {
        self.stacks == 0
    }
}
