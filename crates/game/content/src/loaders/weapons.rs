//! Weapon definition loader.

use std::collections::BTreeMap;
use std::path::Path;

use armory_core::{ArchetypeDescriptor, PerkCatalog};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Weapon definition file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponFile {
    pub weapons: Vec<ArchetypeDescriptor>,
}

/// Validated weapon definitions indexed by key.
#[derive(Clone, Debug, Default)]
pub struct WeaponCatalog {
    weapons: BTreeMap<String, ArchetypeDescriptor>,
}

impl WeaponCatalog {
    /// Builds the catalog, rejecting duplicate keys and definitions that
    /// reference perks the catalog lacks or places them in the wrong slot.
    pub fn from_descriptors(
        descriptors: Vec<ArchetypeDescriptor>,
        perks: &PerkCatalog,
    ) -> LoadResult<Self> {
        let mut weapons = BTreeMap::new();
        for descriptor in descriptors {
            descriptor
                .validate(perks)
                .map_err(|e| anyhow::anyhow!("Invalid weapon '{}': {}", descriptor.key, e))?;
            if weapons.contains_key(&descriptor.key) {
                anyhow::bail!("Duplicate weapon key '{}'", descriptor.key);
            }
            weapons.insert(descriptor.key.clone(), descriptor);
        }
        Ok(Self { weapons })
    }

    pub fn get(&self, key: &str) -> Option<&ArchetypeDescriptor> {
        self.weapons.get(key)
    }

    /// Like [`get`](Self::get), but a missing key is an error naming the
    /// available keys.
    pub fn require(&self, key: &str) -> LoadResult<&ArchetypeDescriptor> {
        self.get(key).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown weapon '{}' (available: {})",
                key,
                self.keys().collect::<Vec<_>>().join(", ")
            )
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.weapons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeDescriptor> {
        self.weapons.values()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

/// Loader for weapon definitions from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load and validate weapon definitions from a RON file.
    pub fn load(path: &Path, perks: &PerkCatalog) -> LoadResult<WeaponCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, perks)
    }

    /// Parse and validate weapon definitions from RON text.
    pub fn parse(content: &str, perks: &PerkCatalog) -> LoadResult<WeaponCatalog> {
        let file: WeaponFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon RON: {}", e))?;

        let catalog = WeaponCatalog::from_descriptors(file.weapons, perks)?;
        debug!(count = catalog.len(), "loaded weapon definitions");
        Ok(catalog)
    }
}
