//! Buff accumulation following a fixed stack order.
//!
//! Timed buffs never touch [`WeaponStats`] directly. The resolve pipeline
//! collects them into a [`StatBonuses`] accumulator and folds the whole
//! accumulator once, so the result does not depend on how many buffs were
//! pushed or in which order:
//!
//! `Flat → More`

use super::weapon::WeaponStats;

/// A single adjustment that can be applied to a stat value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bonus {
    /// Flat additive points (applied first).
    Flat(f32),

    /// Independent multiplier applied after every flat bonus (0.7 = ×0.7).
    More(f32),
}

/// Accumulated bonuses for one stat field.
///
/// Stored pre-folded as the flat sum and the product of all multipliers.
/// Folding is O(1) regardless of buff count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BonusStack {
    flat: f32,
    more: f32,
}

impl Default for BonusStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BonusStack {
    pub const fn new() -> Self {
        Self {
            flat: 0.0,
            more: 1.0,
        }
    }

    pub fn add(&mut self, bonus: Bonus) {
        match bonus {
            Bonus::Flat(v) => self.flat += v,
            Bonus::More(m) => self.more *= m,
        }
    }

    /// Formula: `(base + flat) × more`
    pub fn apply(&self, base: f32) -> f32 {
        (base + self.flat) * self.more
    }

    pub fn is_empty(&self) -> bool {
        self.flat == 0.0 && self.more == 1.0
    }
}

/// Per-field accumulator used by the buff phase of the resolve pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatBonuses {
    pub range: BonusStack,
    pub stability: BonusStack,
    pub reload_speed: BonusStack,
    pub rounds_per_minute: BonusStack,
}

impl StatBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&mut self, bonus: Bonus) -> &mut Self {
        self.range.add(bonus);
        self
    }

    pub fn stability(&mut self, bonus: Bonus) -> &mut Self {
        self.stability.add(bonus);
        self
    }

    pub fn reload_speed(&mut self, bonus: Bonus) -> &mut Self {
        self.reload_speed.add(bonus);
        self
    }

    pub fn rounds_per_minute(&mut self, bonus: Bonus) -> &mut Self {
        self.rounds_per_minute.add(bonus);
        self
    }

    /// Folds every accumulated bonus into `stats`. Magazine size only changes
    /// through static perk modifiers, never through timed buffs.
    pub fn apply(&self, stats: WeaponStats) -> WeaponStats {
        WeaponStats {
            range: self.range.apply(stats.range),
            stability: self.stability.apply(stats.stability),
            reload_speed: self.reload_speed.apply(stats.reload_speed),
            rounds_per_minute: self.rounds_per_minute.apply(stats.rounds_per_minute),
            magazine_size: stats.magazine_size,
        }
    }
}
