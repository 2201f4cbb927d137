//! Perk catalog, descriptors and equipped loadouts.
//!
//! A perk is pure data plus a static stat modifier; everything stateful about
//! it (timers, stacks, counters) lives in the weapon's
//! [`PerkTimers`](crate::trigger::PerkTimers).

pub mod builtin;
pub mod catalog;
pub mod descriptor;
pub mod flags;
pub mod kind;
pub mod loadout;
pub mod tuning;

pub use catalog::PerkCatalog;
pub use descriptor::{PerkDescriptor, StatModifier};
pub use flags::PerkFlags;
pub use kind::{PerkKind, SlotCategory};
pub use loadout::PerkLoadout;
