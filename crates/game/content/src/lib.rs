//! Data-driven weapon content and loaders.
//!
//! This crate reads the static data a host needs before it can build a
//! [`armory_core::CombatEngine`]:
//! - Weapon definitions (RON, one [`armory_core::ArchetypeDescriptor`] each)
//! - Engine configuration (TOML, [`armory_core::CombatConfig`])
//!
//! Content is consumed at startup and never appears in per-weapon state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, WeaponCatalog, WeaponLoader};
