//! Process-wide perk registry.
//!
//! The catalog is an explicit object: the host builds it once at startup,
//! passes it by reference into the engine, and drops it at shutdown. Nothing
//! in this crate keeps a global copy.

use std::collections::HashMap;

use tracing::debug;

use super::builtin::builtin_descriptors;
use super::descriptor::PerkDescriptor;
use crate::error::CatalogError;

/// Key → descriptor map with unique keys.
#[derive(Clone, Debug, Default)]
pub struct PerkCatalog {
    perks: HashMap<String, PerkDescriptor>,
}

impl PerkCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding every built-in perk.
    pub fn with_builtin() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for descriptor in builtin_descriptors() {
            catalog.register(descriptor)?;
        }
        debug!(perks = catalog.len(), "registered built-in perks");
        Ok(catalog)
    }

    /// Registers a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicatePerk`] if the key is already taken;
    /// the catalog is left unchanged.
    pub fn register(&mut self, descriptor: PerkDescriptor) -> Result<(), CatalogError> {
        if self.perks.contains_key(&descriptor.key) {
            return Err(CatalogError::DuplicatePerk(descriptor.key));
        }
        self.perks.insert(descriptor.key.clone(), descriptor);
        Ok(())
    }

    /// Looks up a descriptor, treating a missing key as absent.
    pub fn get(&self, key: &str) -> Option<&PerkDescriptor> {
        self.perks.get(key)
    }

    /// Looks up a descriptor that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPerk`] for unregistered keys.
    pub fn require(&self, key: &str) -> Result<&PerkDescriptor, CatalogError> {
        self.get(key)
            .ok_or_else(|| CatalogError::UnknownPerk(key.to_owned()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.perks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.perks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perks.is_empty()
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.perks.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Drops every registration.
    pub fn clear(&mut self) {
        self.perks.clear();
    }
}
