//! Immutable perk metadata registered into the catalog.

use super::kind::{PerkKind, SlotCategory};
use crate::stats::WeaponStats;

/// Static stat adjustment contributed by a perk.
///
/// Modifiers only add to or scale individual fields; they never reorder or
/// swap fields.
pub type StatModifier = fn(WeaponStats) -> WeaponStats;

fn unchanged(stats: WeaponStats) -> WeaponStats {
    stats
}

/// Registered description of one perk.
///
/// Triggered behavior is selected by [`kind`](Self::kind); the trigger
/// engine reaches it through the loadout's capability table, so the
/// descriptor itself holds no per-weapon state.
#[derive(Clone, Debug)]
pub struct PerkDescriptor {
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub slot: SlotCategory,
    pub kind: PerkKind,
    pub stat_modifier: StatModifier,
    /// Frames may override the archetype burst count.
    pub burst_count: Option<u32>,
}

impl PerkDescriptor {
    /// Creates a descriptor keyed by the kind's snake_case name.
    pub fn new(
        kind: PerkKind,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: kind.as_ref().to_owned(),
            display_name: display_name.into(),
            description: description.into(),
            slot: kind.slot(),
            kind,
            stat_modifier: unchanged,
            burst_count: None,
        }
    }

    /// Replaces the catalog key (builder pattern).
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Attaches a static stat modifier (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, modifier: StatModifier) -> Self {
        self.stat_modifier = modifier;
        self
    }

    /// Sets the frame burst override (builder pattern).
    #[must_use]
    pub fn with_burst_count(mut self, burst_count: u32) -> Self {
        self.burst_count = Some(burst_count);
        self
    }

    pub fn is_frame(&self) -> bool {
        self.slot == SlotCategory::Frame
    }

    /// Runs the static modifier.
    pub fn modify(&self, stats: WeaponStats) -> WeaponStats {
        (self.stat_modifier)(stats)
    }
}
