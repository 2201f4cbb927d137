//! Weapon stats: the stat tuple, archetype tables, curves and resolution.
//!
//! Every weapon goes through the same pipeline:
//!
//! ```text
//! base / override → static perk modifiers → timed buffs → clamp
//! ```

pub mod archetype;
pub mod bonus;
pub mod curve;
pub mod resolve;
pub mod weapon;

pub use archetype::{Archetype, ArchetypeProfile, RecoilPattern};
pub use bonus::{Bonus, BonusStack, StatBonuses};
pub use curve::{AnchorCurve, lerp, stat_fraction};
pub use resolve::{
    DamageModifiers, damage_modifiers, falloff_multiplier, reload_seconds, reload_time_scale,
    resolve,
};
pub use weapon::{STAT_CEILING, WeaponStats};
