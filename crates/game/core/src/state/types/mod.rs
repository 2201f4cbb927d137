pub mod common;

pub use common::{ChainId, EntityId, ProjectileId, Ticks};
