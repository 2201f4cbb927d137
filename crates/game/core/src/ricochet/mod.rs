//! Ricochet chains and bounce targeting.

pub mod ledger;
pub mod select;

pub use ledger::ChainLedger;
pub use select::{nearest_target, nearest_targets};
