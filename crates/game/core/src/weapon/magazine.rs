//! Ammunition and reload progress.

use crate::state::Ticks;

/// Reload progress in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReloadProgress {
    pub remaining: Ticks,
    pub total: Ticks,
}

impl ReloadProgress {
    /// Completed fraction in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        1.0 - self.remaining as f32 / self.total as f32
    }
}

/// Outcome of a reload request that was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReloadStart {
    /// The reload runs for this many ticks.
    Timed(Ticks),
    /// Zero-length reload; the magazine is already full.
    Instant,
}

/// Rounds loaded plus an in-flight reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Magazine {
    ammo: u32,
    reload: Option<ReloadProgress>,
}

impl Magazine {
    pub fn full(magazine_size: u32) -> Self {
        Self {
            ammo: magazine_size,
            reload: None,
        }
    }

    /// Rebuilds a magazine from persisted values. A zero `reload_total` means
    /// no reload was in flight.
    pub fn restore(ammo: u32, reload_remaining: Ticks, reload_total: Ticks) -> Self {
        let reload = (reload_total > 0 && reload_remaining > 0).then_some(ReloadProgress {
            remaining: reload_remaining.min(reload_total),
            total: reload_total,
        });
        Self { ammo, reload }
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn reload(&self) -> Option<ReloadProgress> {
        self.reload
    }

    pub fn is_reloading(&self) -> bool {
        self.reload.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.ammo == 0
    }

    pub fn can_fire(&self) -> bool {
        !self.is_reloading() && self.ammo > 0
    }

    pub fn can_reload(&self, magazine_size: u32) -> bool {
        !self.is_reloading() && self.ammo < magazine_size
    }

    /// Removes one round. Returns false if nothing could be fired.
    pub fn consume(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn begin_reload(&mut self, ticks: Ticks, magazine_size: u32) -> ReloadStart {
        if ticks == 0 {
            self.ammo = magazine_size;
            self.reload = None;
            return ReloadStart::Instant;
        }
        self.reload = Some(ReloadProgress {
            remaining: ticks,
            total: ticks,
        });
        ReloadStart::Timed(ticks)
    }

    /// Advances the reload by one tick. Returns true on the completing tick,
    /// after the magazine has been refilled to `magazine_size`.
    pub fn tick(&mut self, magazine_size: u32) -> bool {
        let Some(progress) = self.reload.as_mut() else {
            return false;
        };
        progress.remaining = progress.remaining.saturating_sub(1);
        if progress.remaining > 0 {
            return false;
        }
        self.reload = None;
        self.ammo = magazine_size;
        true
    }

    /// Drops the in-flight reload. Returns true if one was running.
    pub fn cancel_reload(&mut self) -> bool {
        self.reload.take().is_some()
    }

    /// Adds rounds without exceeding the magazine size.
    pub fn refund(&mut self, rounds: u32, magazine_size: u32) -> u32 {
        let before = self.ammo;
        self.ammo = self.ammo.saturating_add(rounds).min(magazine_size.max(before));
        self.ammo - before
    }

    /// Keeps ammo within a magazine that may have shrunk.
    pub fn clamp(&mut self, magazine_size: u32) {
        self.ammo = self.ammo.min(magazine_size);
    }
}
