//! Engine configuration loader.

use std::path::Path;

use armory_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatConfig`] from TOML files.
///
/// Every field is optional in the file; missing ones keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.ticks_per_second == 0 {
            anyhow::bail!("ticks_per_second must be positive");
        }

        Ok(config)
    }
}
