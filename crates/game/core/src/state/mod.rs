//! Identifiers and the process-wide combat tables.
//!
//! Entities and projectiles belong to the host simulation; the engine only
//! refers to them by id and asks the [`WorldView`](crate::env::WorldView)
//! whether they are still alive.
pub mod types;

pub use types::{ChainId, EntityId, ProjectileId, Ticks};

use crate::env::WorldView;

use crate::ricochet::ChainLedger;
use crate::target::TargetStatusRegistry;

/// State shared by every weapon in the process: per-target status records
/// and open ricochet chains.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub targets: TargetStatusRegistry,
    pub ledger: ChainLedger,
    since_sweep: Ticks,
}

impl CombatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one tick; sweeps both tables once `interval` ticks have passed.
    /// Returns true on the sweeping tick.
    pub fn maybe_sweep(&mut self, world: &dyn WorldView, interval: Ticks) -> bool {
        self.since_sweep += 1;
        if self.since_sweep < interval {
            return false;
        }
        self.since_sweep = 0;
        self.targets.sweep(world);
        self.ledger.prune(world);
        true
    }
}
