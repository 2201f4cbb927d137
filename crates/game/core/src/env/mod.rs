//! Read-only collaborators the engine consults but never owns.
//!
//! [`CombatEnv`] bundles the perk catalog, configuration, world view and
//! random source so engine entry points take one argument for all of them.
mod rng;
mod world;

pub use rng::{PcgRng, RngOracle, compute_seed, context as rng_context};
pub use world::{TargetInfo, WorldSnapshot, WorldView};

use crate::config::CombatConfig;
use crate::perk::PerkCatalog;

#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    pub catalog: &'a PerkCatalog,
    pub config: &'a CombatConfig,
    pub world: &'a dyn WorldView,
    pub rng: &'a dyn RngOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        catalog: &'a PerkCatalog,
        config: &'a CombatConfig,
        world: &'a dyn WorldView,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            catalog,
            config,
            world,
            rng,
        }
    }
}

impl std::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("perks", &self.catalog.len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
