//! Deterministic combat-modifier engine for ranged weapons.
//!
//! `armory-core` turns a weapon's base stats and equipped perks into
//! effective stats every tick, runs the perk timers and triggers, and tracks
//! per-target status (scorch, nanites, lodged slugs, tremors) and ricochet
//! chains. The host owns entities, projectiles and damage; it reports events
//! to [`engine::CombatEngine`] and carries out the [`CombatEffect`]s it gets
//! back.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod perk;
pub mod ricochet;
pub mod state;
pub mod stats;
pub mod target;
pub mod trigger;
pub mod weapon;

pub use config::CombatConfig;
pub use engine::CombatEngine;
pub use env::{CombatEnv, PcgRng, RngOracle, TargetInfo, WorldSnapshot, WorldView, compute_seed};
pub use error::{ArmoryError, CatalogError, ErrorSeverity};
pub use perk::{PerkCatalog, PerkDescriptor, PerkFlags, PerkKind, PerkLoadout, SlotCategory};
pub use ricochet::ChainLedger;
pub use state::{ChainId, CombatState, EntityId, ProjectileId, Ticks};
pub use stats::{
    Archetype, ArchetypeProfile, DamageModifiers, WeaponStats, damage_modifiers,
    falloff_multiplier, resolve,
};
pub use target::{TargetStatus, TargetStatusRegistry};
pub use trigger::{
    BuffDisplayEntry, ChainLink, CombatEffect, CombatEvent, DamageSource, HitEvent, HitOrigin,
    PerkTimers, Ricochet, Shot,
};
pub use weapon::{
    ArchetypeDescriptor, Facing, WeaponInstance, WeaponItem, WeaponSave, roll_perks,
};
