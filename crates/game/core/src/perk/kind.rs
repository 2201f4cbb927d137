//! Perk identities and slot categories.

/// Slot a perk can occupy on a weapon.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotCategory {
    Barrel,
    Magazine,
    Major,
    Frame,
    Catalyst,
}

impl SlotCategory {
    /// Position of this category when static modifiers are applied:
    /// frame, barrel, magazine, major, catalyst.
    pub const fn application_rank(self) -> u8 {
        match self {
            SlotCategory::Frame => 0,
            SlotCategory::Barrel => 1,
            SlotCategory::Magazine => 2,
            SlotCategory::Major => 3,
            SlotCategory::Catalyst => 4,
        }
    }
}

/// Behavior attached to a perk descriptor.
///
/// The trigger engine dispatches on this enum (through the capability table
/// built at equip time) rather than on perk keys. Built-in descriptors use
/// the snake_case variant name as their key.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PerkKind {
    // ========================================================================
    // Frames
    // ========================================================================
    AdaptiveFrame,
    RapidFireFrame,
    PrecisionFrame,
    AggressiveFrame,
    LightweightFrame,
    HighImpactFrame,

    // ========================================================================
    // Barrels
    // ========================================================================
    Smallbore,
    CorkscrewRifling,
    ArrowheadBrake,
    HammerForgedRifling,
    FullBore,

    // ========================================================================
    // Magazines
    // ========================================================================
    ExtendedMag,
    TacticalMag,
    FlaredMagwell,
    AppendedMag,
    AlloyMagazine,

    // ========================================================================
    // Majors (triggered)
    // ========================================================================
    Outlaw,
    RapidHit,
    KillClip,
    Frenzy,
    Rampage,
    Onslaught,
    FeedingFrenzy,
    Adagio,
    TargetLock,
    DynamicSwayReduction,
    FourthTimesTheCharm,
    TheRightChoice,
    KineticTremors,
    Incandescent,
    Desperado,
    PrecisionInstrument,
    FocusedFury,
    OneForAll,
    NanotechTracerRounds,
    DetonatorSlugs,
    TrickShot,

    // ========================================================================
    // Catalysts
    // ========================================================================
    SolarCatalyst,
    StabilityCatalyst,
}

impl PerkKind {
    /// Slot category the built-in descriptor for this kind occupies.
    pub const fn slot(self) -> SlotCategory {
        use PerkKind::*;
        match self {
            AdaptiveFrame | RapidFireFrame | PrecisionFrame | AggressiveFrame
            | LightweightFrame | HighImpactFrame => SlotCategory::Frame,
            Smallbore | CorkscrewRifling | ArrowheadBrake | HammerForgedRifling | FullBore => {
                SlotCategory::Barrel
            }
            ExtendedMag | TacticalMag | FlaredMagwell | AppendedMag | AlloyMagazine => {
                SlotCategory::Magazine
            }
            SolarCatalyst | StabilityCatalyst => SlotCategory::Catalyst,
            _ => SlotCategory::Major,
        }
    }
}
