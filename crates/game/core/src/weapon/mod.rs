//! Weapon instances: magazine, recoil, persistence and perk rolling.

pub mod instance;
pub mod magazine;
pub mod recoil;
pub mod roll;

pub use instance::{BurstState, WeaponInstance, WeaponSave};
pub use magazine::{Magazine, ReloadProgress, ReloadStart};
pub use recoil::{Deviation, Facing, RecoilState};
pub use roll::{ArchetypeDescriptor, WeaponItem, roll_perks};
