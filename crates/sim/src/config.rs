//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Content shipped with `armory-content`.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data");

/// What to simulate and for how long.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Directory holding `config.toml` and `weapons.ron`.
    pub data_dir: PathBuf,
    /// Weapon key in `weapons.ron`.
    pub weapon: String,
    /// Roll seed; also seeds bloom.
    pub seed: u64,
    /// Host ticks to run.
    pub ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(BUNDLED_DATA_DIR),
            weapon: "hard_light".to_owned(),
            seed: 1,
            ticks: 600,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARMORY_DATA_DIR` - Content directory (default: the bundled data)
    /// - `SIM_WEAPON` - Weapon key (default: `hard_light`)
    /// - `SIM_SEED` - Roll seed (default: 1)
    /// - `SIM_TICKS` - Ticks to run (default: 600)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("ARMORY_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(weapon) = lookup("SIM_WEAPON") {
            config.weapon = weapon;
        }
        if let Some(seed) = parse(&lookup, "SIM_SEED") {
            config.seed = seed;
        }
        if let Some(ticks) = parse(&lookup, "SIM_TICKS") {
            config.ticks = ticks;
        }

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
