use bitflags::bitflags;

use super::kind::PerkKind;

bitflags! {
    /// Capability table of the triggered perks a weapon carries.
    ///
    /// Computed once when perks are equipped so the per-tick engine can test
    /// a bit instead of inspecting descriptors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PerkFlags: u32 {
        const OUTLAW               = 1 << 0;
        const RAPID_HIT            = 1 << 1;
        const KILL_CLIP            = 1 << 2;
        const FRENZY               = 1 << 3;
        const RAMPAGE              = 1 << 4;
        const ONSLAUGHT            = 1 << 5;
        const FEEDING_FRENZY       = 1 << 6;
        const ADAGIO               = 1 << 7;
        const TARGET_LOCK          = 1 << 8;
        const DYNAMIC_SWAY         = 1 << 9;
        const FOURTH_TIMES         = 1 << 10;
        const RIGHT_CHOICE         = 1 << 11;
        const KINETIC_TREMORS      = 1 << 12;
        const INCANDESCENT         = 1 << 13;
        const DESPERADO            = 1 << 14;
        const PRECISION_INSTRUMENT = 1 << 15;
        const FOCUSED_FURY         = 1 << 16;
        const ONE_FOR_ALL          = 1 << 17;
        const NANOTECH             = 1 << 18;
        const DETONATOR_SLUGS      = 1 << 19;
        const TRICK_SHOT           = 1 << 20;
        const SOLAR_CATALYST       = 1 << 21;
        const ALLOY_MAGAZINE       = 1 << 22;
    }
}

impl PerkFlags {
    /// Capability bit for a perk kind; empty for purely static perks.
    pub const fn of(kind: PerkKind) -> Self {
        use PerkKind::*;
        match kind {
            Outlaw => Self::OUTLAW,
            RapidHit => Self::RAPID_HIT,
            KillClip => Self::KILL_CLIP,
            Frenzy => Self::FRENZY,
            Rampage => Self::RAMPAGE,
            Onslaught => Self::ONSLAUGHT,
            FeedingFrenzy => Self::FEEDING_FRENZY,
            Adagio => Self::ADAGIO,
            TargetLock => Self::TARGET_LOCK,
            DynamicSwayReduction => Self::DYNAMIC_SWAY,
            FourthTimesTheCharm => Self::FOURTH_TIMES,
            TheRightChoice => Self::RIGHT_CHOICE,
            KineticTremors => Self::KINETIC_TREMORS,
            Incandescent => Self::INCANDESCENT,
            Desperado => Self::DESPERADO,
            PrecisionInstrument => Self::PRECISION_INSTRUMENT,
            FocusedFury => Self::FOCUSED_FURY,
            OneForAll => Self::ONE_FOR_ALL,
            NanotechTracerRounds => Self::NANOTECH,
            DetonatorSlugs => Self::DETONATOR_SLUGS,
            TrickShot => Self::TRICK_SHOT,
            SolarCatalyst => Self::SOLAR_CATALYST,
            AlloyMagazine => Self::ALLOY_MAGAZINE,
            _ => Self::empty(),
        }
    }
}
