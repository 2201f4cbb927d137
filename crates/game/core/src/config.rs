use crate::state::Ticks;

/// Combat engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Fixed simulation rate of the host loop.
    pub ticks_per_second: u32,

    /// Extra ticks past one fire cycle before recoil and bloom reset to zero.
    pub idle_reset_margin_ticks: Ticks,

    /// How often dead targets and decayed records are swept from the
    /// process-wide tables.
    pub sweep_interval_ticks: Ticks,

    /// Ricochet chains with no reported bounce for this long are discarded.
    pub chain_timeout_ticks: Ticks,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Barrel, magazine and two major slots.
    pub const MAX_PERK_SLOTS: usize = 4;
    pub const MAX_BURST: usize = 4;
    pub const MAX_PENDING_SLUGS: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;
    pub const DEFAULT_IDLE_RESET_MARGIN: Ticks = 6;
    pub const DEFAULT_SWEEP_INTERVAL: Ticks = 120;
    pub const DEFAULT_CHAIN_TIMEOUT: Ticks = 180;

    pub fn new() -> Self {
        Self {
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
            idle_reset_margin_ticks: Self::DEFAULT_IDLE_RESET_MARGIN,
            sweep_interval_ticks: Self::DEFAULT_SWEEP_INTERVAL,
            chain_timeout_ticks: Self::DEFAULT_CHAIN_TIMEOUT,
        }
    }

    /// Converts a duration in seconds to whole ticks, rounding to nearest.
    ///
    /// Any positive duration lasts at least one tick.
    pub fn seconds_to_ticks(&self, seconds: f32) -> Ticks {
        if seconds <= 0.0 {
            return 0;
        }
        ((seconds * self.ticks_per_second as f32).round() as Ticks).max(1)
    }

    /// Ticks between rounds at the given rate of fire.
    ///
    /// Returns `None` when the weapon cannot fire (`rpm <= 0`).
    pub fn fire_cycle_ticks(&self, rounds_per_minute: f32) -> Option<Ticks> {
        if rounds_per_minute <= 0.0 {
            return None;
        }
        let per_minute = (self.ticks_per_second * 60) as f32;
        Some((per_minute / rounds_per_minute).ceil().max(1.0) as Ticks)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_cycle_rounds_up() {
        let config = CombatConfig::default();
        assert_eq!(config.fire_cycle_ticks(720.0), Some(5));
        assert_eq!(config.fire_cycle_ticks(140.0), Some(26));
        assert_eq!(config.fire_cycle_ticks(0.0), None);
    }

    #[test]
    fn seconds_round_to_nearest_tick() {
        let config = CombatConfig::default();
        assert_eq!(config.seconds_to_ticks(3.0), 180);
        assert_eq!(config.seconds_to_ticks(-1.0), 0);
    }

    #[test]
    fn positive_durations_never_round_to_zero() {
        let config = CombatConfig::default();
        assert_eq!(config.seconds_to_ticks(0.001), 1);
        assert_eq!(config.seconds_to_ticks(0.0), 0);
    }
}
