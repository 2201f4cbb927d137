//! Live weapon instances and their persisted form.

use glam::Vec2;

use super::magazine::Magazine;
use super::recoil::{Facing, RecoilState};
use super::roll::ArchetypeDescriptor;
use crate::perk::{PerkCatalog, PerkLoadout};
use crate::state::Ticks;
use crate::stats::{Archetype, WeaponStats, resolve};
use crate::trigger::PerkTimers;

/// Remaining rounds of a burst that was started by one trigger pull.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurstState {
    pub remaining: u32,
    pub countdown: Ticks,
    pub next_index: u32,
    pub aim: Vec2,
    pub facing: Facing,
}

/// One wielded weapon: archetype, stats, perks and all per-weapon state.
///
/// The whole instance serializes for replication; [`WeaponSave`] is the
/// smaller persisted subset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponInstance {
    pub(crate) archetype: Archetype,
    pub(crate) base: WeaponStats,
    pub(crate) stat_override: Option<WeaponStats>,
    pub(crate) loadout: PerkLoadout,
    pub(crate) magazine: Magazine,
    pub(crate) recoil: RecoilState,
    pub(crate) timers: PerkTimers,
    pub(crate) fire_cooldown: Ticks,
    pub(crate) burst: Option<BurstState>,
    pub(crate) seed: u64,
    pub(crate) shots_fired: u64,
}

impl WeaponInstance {
    /// Creates an instance with a full magazine.
    pub fn new(
        archetype: Archetype,
        base: WeaponStats,
        loadout: PerkLoadout,
        seed: u64,
        catalog: &PerkCatalog,
    ) -> Self {
        let mut weapon = Self {
            archetype,
            base,
            stat_override: None,
            loadout,
            magazine: Magazine::default(),
            recoil: RecoilState::default(),
            timers: PerkTimers::default(),
            fire_cooldown: 0,
            burst: None,
            seed,
            shots_fired: 0,
        };
        weapon.magazine = Magazine::full(resolve(&weapon, catalog).magazine_size);
        weapon
    }

    /// Rebuilds an instance from a save. Timers and stacks start fresh.
    pub fn restore(
        descriptor: &ArchetypeDescriptor,
        save: &WeaponSave,
        catalog: &PerkCatalog,
    ) -> Self {
        let loadout = PerkLoadout::equip(
            save.frame.clone(),
            save.perks.iter().cloned(),
            save.catalyst.clone(),
            catalog,
        );
        let mut weapon = Self::new(
            descriptor.archetype,
            descriptor.base,
            loadout,
            save.seed,
            catalog,
        );
        weapon.stat_override = save.stat_override;
        weapon.magazine = Magazine::restore(save.ammo, save.reload_remaining, save.reload_total);
        weapon
    }

    pub fn to_save(&self) -> WeaponSave {
        let reload = self.magazine.reload();
        WeaponSave {
            frame: self.loadout.frame().map(str::to_owned),
            perks: self.loadout.slots().to_vec(),
            catalyst: self.loadout.catalyst().map(str::to_owned),
            ammo: self.magazine.ammo(),
            reload_remaining: reload.map_or(0, |r| r.remaining),
            reload_total: reload.map_or(0, |r| r.total),
            stat_override: self.stat_override,
            seed: self.seed,
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn base(&self) -> WeaponStats {
        self.base
    }

    pub fn stat_override(&self) -> Option<WeaponStats> {
        self.stat_override
    }

    /// Replaces the base stats for resolution (e.g. debug tuning).
    pub fn set_stat_override(&mut self, stats: Option<WeaponStats>) {
        self.stat_override = stats;
    }

    pub fn loadout(&self) -> &PerkLoadout {
        &self.loadout
    }

    /// Swaps perks. Perk state restarts; ammo and reload carry over.
    pub fn set_loadout(&mut self, loadout: PerkLoadout) {
        self.loadout = loadout;
        self.timers = PerkTimers::default();
    }

    pub fn magazine(&self) -> &Magazine {
        &self.magazine
    }

    pub fn ammo(&self) -> u32 {
        self.magazine.ammo()
    }

    pub fn is_reloading(&self) -> bool {
        self.magazine.is_reloading()
    }

    pub fn recoil(&self) -> &RecoilState {
        &self.recoil
    }

    pub fn timers(&self) -> &PerkTimers {
        &self.timers
    }

    pub fn fire_cooldown(&self) -> Ticks {
        self.fire_cooldown
    }

    pub fn is_bursting(&self) -> bool {
        self.burst.is_some()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shots_fired(&self) -> u64 {
        self.shots_fired
    }
}

/// Persisted weapon: equipped perk keys, ammo, reload progress, override.
///
/// Perk timers and stacks are not saved.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSave {
    pub frame: Option<String>,
    pub perks: Vec<String>,
    pub catalyst: Option<String>,
    pub ammo: u32,
    pub reload_remaining: Ticks,
    pub reload_total: Ticks,
    pub stat_override: Option<WeaponStats>,
    pub seed: u64,
}

#[cfg(feature = "serde")]
impl WeaponSave {
    /// SHA-256 over the bincode encoding; stable for equal saves.
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}
