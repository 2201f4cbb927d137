//! The five-field weapon stat tuple.

/// Upper bound shared by the percentage-style stats (range, stability,
/// reload speed).
pub const STAT_CEILING: f32 = 100.0;

/// Effective or base statistics of a weapon.
///
/// Range, stability and reload speed are 0-100 ratings; rounds-per-minute is
/// an absolute rate; magazine size is a whole number of rounds. Values are
/// recomputed every tick by [`resolve`](super::resolve) and never cached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStats {
    pub range: f32,
    pub stability: f32,
    pub reload_speed: f32,
    pub rounds_per_minute: f32,
    pub magazine_size: u32,
}

impl WeaponStats {
    pub const fn new(
        range: f32,
        stability: f32,
        reload_speed: f32,
        rounds_per_minute: f32,
        magazine_size: u32,
    ) -> Self {
        Self {
            range,
            stability,
            reload_speed,
            rounds_per_minute,
            magazine_size,
        }
    }

    /// Adds flat points to range.
    #[must_use]
    pub fn add_range(mut self, points: f32) -> Self {
        self.range += points;
        self
    }

    /// Adds flat points to stability.
    #[must_use]
    pub fn add_stability(mut self, points: f32) -> Self {
        self.stability += points;
        self
    }

    /// Adds flat points to reload speed.
    #[must_use]
    pub fn add_reload_speed(mut self, points: f32) -> Self {
        self.reload_speed += points;
        self
    }

    /// Multiplies rounds-per-minute.
    #[must_use]
    pub fn scale_rpm(mut self, factor: f32) -> Self {
        self.rounds_per_minute *= factor;
        self
    }

    /// Multiplies magazine size, rounding to the nearest whole round.
    #[must_use]
    pub fn scale_magazine(mut self, factor: f32) -> Self {
        self.magazine_size = (self.magazine_size as f32 * factor).round().max(0.0) as u32;
        self
    }

    /// Adds whole rounds to the magazine (negative values remove rounds).
    #[must_use]
    pub fn add_magazine(mut self, rounds: i32) -> Self {
        self.magazine_size = self.magazine_size.saturating_add_signed(rounds);
        self
    }

    /// Clamps every field into its legal range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            range: self.range.clamp(0.0, STAT_CEILING),
            stability: self.stability.clamp(0.0, STAT_CEILING),
            reload_speed: self.reload_speed.clamp(0.0, STAT_CEILING),
            rounds_per_minute: self.rounds_per_minute.max(0.0),
            magazine_size: self.magazine_size,
        }
    }

    /// True when these stats permit firing at all.
    pub fn can_fire(&self) -> bool {
        self.magazine_size > 0 && self.rounds_per_minute > 0.0
    }
}
