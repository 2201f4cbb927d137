//! Weapon definitions and perk rolling.

use tracing::debug;

use super::instance::WeaponInstance;
use crate::config::CombatConfig;
use crate::env::{RngOracle, compute_seed, rng_context};
use crate::error::CatalogError;
use crate::perk::{PerkCatalog, PerkLoadout, SlotCategory};
use crate::stats::{Archetype, WeaponStats};

/// Data definition of a weapon: archetype, base stats and perk pools.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeDescriptor {
    pub key: String,
    pub name: String,
    pub archetype: Archetype,
    pub base: WeaponStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub frame: Option<String>,
    /// One pool of candidate perk keys per slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub perk_pools: Vec<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub catalyst: Option<String>,
}

impl ArchetypeDescriptor {
    /// Checks every referenced key against the catalog and its slot rules.
    pub fn validate(&self, catalog: &PerkCatalog) -> Result<(), CatalogError> {
        if let Some(frame) = &self.frame {
            expect_slot(catalog, frame, SlotCategory::Frame)?;
        }
        if let Some(catalyst) = &self.catalyst {
            expect_slot(catalog, catalyst, SlotCategory::Catalyst)?;
        }

        if self.perk_pools.len() > CombatConfig::MAX_PERK_SLOTS {
            return Err(CatalogError::TooManySlots {
                weapon: self.key.clone(),
                pools: self.perk_pools.len(),
                max: CombatConfig::MAX_PERK_SLOTS,
            });
        }

        for (slot, pool) in self.perk_pools.iter().enumerate() {
            let Some(first) = pool.first() else {
                return Err(CatalogError::EmptyPool {
                    weapon: self.key.clone(),
                    slot,
                });
            };
            let category = catalog.require(first)?.slot;
            if matches!(category, SlotCategory::Frame | SlotCategory::Catalyst) {
                return Err(CatalogError::SlotMismatch {
                    key: first.clone(),
                    expected: SlotCategory::Major,
                    found: category,
                });
            }
            for key in pool {
                expect_slot(catalog, key, category)?;
            }
        }
        Ok(())
    }

    /// Rolls one perk per pool and builds a fresh instance.
    pub fn roll(
        &self,
        catalog: &PerkCatalog,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Result<WeaponInstance, CatalogError> {
        roll_perks(self, catalog, rng, seed)
    }
}

fn expect_slot(
    catalog: &PerkCatalog,
    key: &str,
    expected: SlotCategory,
) -> Result<(), CatalogError> {
    let found = catalog.require(key)?.slot;
    if found != expected {
        return Err(CatalogError::SlotMismatch {
            key: key.to_owned(),
            expected,
            found,
        });
    }
    Ok(())
}

/// Picks one perk from each pool, never the same key twice, and equips the
/// frame, rolled perks and catalyst on a full magazine.
pub fn roll_perks(
    descriptor: &ArchetypeDescriptor,
    catalog: &PerkCatalog,
    rng: &dyn RngOracle,
    seed: u64,
) -> Result<WeaponInstance, CatalogError> {
    descriptor.validate(catalog)?;

    let mut chosen: Vec<String> = Vec::with_capacity(descriptor.perk_pools.len());
    for (slot, pool) in descriptor.perk_pools.iter().enumerate() {
        let candidates: Vec<&String> = pool.iter().filter(|key| !chosen.contains(key)).collect();
        if candidates.is_empty() {
            debug!(
                weapon = %descriptor.key,
                slot,
                "every candidate already rolled, slot left empty"
            );
            continue;
        }
        let roll_seed = compute_seed(seed, slot as u64, rng_context::PERK_ROLL);
        let pick = candidates[rng.index(roll_seed, candidates.len())];
        chosen.push(pick.clone());
    }

    debug!(weapon = %descriptor.key, perks = ?chosen, "rolled weapon");
    let loadout = PerkLoadout::equip(
        descriptor.frame.clone(),
        chosen,
        descriptor.catalyst.clone(),
        catalog,
    );
    Ok(WeaponInstance::new(
        descriptor.archetype,
        descriptor.base,
        loadout,
        seed,
        catalog,
    ))
}

/// Inventory item whose perks are rolled the first time the weapon is needed.
#[derive(Clone, Debug)]
pub struct WeaponItem {
    descriptor: ArchetypeDescriptor,
    seed: u64,
    instance: Option<WeaponInstance>,
}

impl WeaponItem {
    pub fn new(descriptor: ArchetypeDescriptor, seed: u64) -> Self {
        Self {
            descriptor,
            seed,
            instance: None,
        }
    }

    pub fn descriptor(&self) -> &ArchetypeDescriptor {
        &self.descriptor
    }

    pub fn is_rolled(&self) -> bool {
        self.instance.is_some()
    }

    /// The instance if it has been rolled already.
    pub fn instance(&self) -> Option<&WeaponInstance> {
        self.instance.as_ref()
    }

    /// The instance, rolling it on first access.
    pub fn instance_mut(
        &mut self,
        catalog: &PerkCatalog,
        rng: &dyn RngOracle,
    ) -> Result<&mut WeaponInstance, CatalogError> {
        let instance = match self.instance.take() {
            Some(instance) => instance,
            None => roll_perks(&self.descriptor, catalog, rng, self.seed)?,
        };
        Ok(self.instance.insert(instance))
    }
}
