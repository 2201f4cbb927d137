//! Content factory for loading everything a host needs from a data directory.

use std::path::{Path, PathBuf};

use armory_core::{CombatConfig, PerkCatalog};

use crate::loaders::{ConfigLoader, LoadResult, WeaponCatalog, WeaponLoader};

/// Content factory that loads weapon content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── weapons.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file falls back to [`CombatConfig::default`]; a malformed
    /// one is an error.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config.toml, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load and validate weapon definitions from `weapons.ron`.
    pub fn load_weapons(&self, perks: &PerkCatalog) -> LoadResult<WeaponCatalog> {
        let path = self.data_dir.join("weapons.ron");
        WeaponLoader::load(&path, perks)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
