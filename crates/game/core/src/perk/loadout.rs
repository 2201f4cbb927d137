//! Equipped perk keys of one weapon.

use arrayvec::ArrayVec;
use tracing::warn;

use super::catalog::PerkCatalog;
use super::descriptor::PerkDescriptor;
use super::flags::PerkFlags;
use crate::config::CombatConfig;
use crate::stats::ArchetypeProfile;

/// Perk keys equipped on a weapon plus the capability table derived from them.
///
/// Keys are stored verbatim, including keys the catalog does not know; those
/// are skipped wherever descriptors are looked up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkLoadout {
    frame: Option<String>,
    slots: ArrayVec<String, { CombatConfig::MAX_PERK_SLOTS }>,
    catalyst: Option<String>,
    flags: PerkFlags,
    burst_override: Option<u32>,
}

impl PerkLoadout {
    /// Equips perks and builds the capability table from the catalog.
    ///
    /// Slot keys beyond [`CombatConfig::MAX_PERK_SLOTS`] are dropped. The rest
    /// are stably sorted into barrel, magazine, major order so the resolved
    /// stats never depend on how the caller listed them. Keys the catalog
    /// does not know sort last.
    pub fn equip(
        frame: Option<String>,
        slots: impl IntoIterator<Item = String>,
        catalyst: Option<String>,
        catalog: &PerkCatalog,
    ) -> Self {
        let mut loadout = Self {
            frame,
            slots: ArrayVec::new(),
            catalyst,
            flags: PerkFlags::empty(),
            burst_override: None,
        };
        for key in slots {
            if let Err(overflow) = loadout.slots.try_push(key) {
                warn!(key = %overflow.element(), "perk slot list full, dropping perk");
            }
        }
        loadout.slots.sort_by_key(|key| {
            catalog
                .get(key)
                .map_or(u8::MAX, |descriptor| descriptor.slot.application_rank())
        });
        loadout.refresh(catalog);
        loadout
    }

    /// Rebuilds the capability table, e.g. after the catalog changed.
    pub fn refresh(&mut self, catalog: &PerkCatalog) {
        let mut flags = PerkFlags::empty();
        let mut burst_override = None;
        for key in self.keys() {
            match catalog.get(key) {
                Some(descriptor) => {
                    flags |= PerkFlags::of(descriptor.kind);
                    if descriptor.is_frame() {
                        burst_override = descriptor.burst_count;
                    }
                }
                None => warn!(key, "equipped perk is not in the catalog"),
            }
        }
        self.flags = flags;
        self.burst_override = burst_override;
    }

    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn catalyst(&self) -> Option<&str> {
        self.catalyst.as_deref()
    }

    pub fn flags(&self) -> PerkFlags {
        self.flags
    }

    #[inline]
    pub fn has(&self, flag: PerkFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Keys in application order: frame, slots (barrel, magazine, major),
    /// catalyst.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.frame
            .as_deref()
            .into_iter()
            .chain(self.slots.iter().map(String::as_str))
            .chain(self.catalyst.as_deref())
    }

    /// Known descriptors in application order.
    pub fn descriptors<'c>(
        &'c self,
        catalog: &'c PerkCatalog,
    ) -> impl Iterator<Item = &'c PerkDescriptor> + 'c {
        self.keys().filter_map(move |key| catalog.get(key))
    }

    /// Rounds per trigger pull for this archetype.
    ///
    /// Frame overrides only apply to archetypes that already fire bursts.
    pub fn burst_count(&self, profile: &ArchetypeProfile) -> u32 {
        if profile.burst_count <= 1 {
            return 1;
        }
        self.burst_override
            .unwrap_or(profile.burst_count)
            .clamp(1, CombatConfig::MAX_BURST as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perk::PerkKind;
    use crate::stats::WeaponStats;

    fn magazine_after(catalog: &PerkCatalog, keys: &[&str]) -> u32 {
        let loadout =
            PerkLoadout::equip(None, keys.iter().map(|k| k.to_string()), None, catalog);
        loadout
            .descriptors(catalog)
            .fold(WeaponStats::new(40.0, 40.0, 40.0, 360.0, 13), |stats, d| {
                d.modify(stats)
            })
            .magazine_size
    }

    #[test]
    fn slot_modifiers_apply_in_category_order() {
        let mut catalog = PerkCatalog::with_builtin().unwrap();
        catalog
            .register(
                PerkDescriptor::new(PerkKind::Rampage, "Double Drum", "Doubles the magazine.")
                    .with_key("double_drum")
                    .with_modifier(|s| s.scale_magazine(2.0)),
            )
            .unwrap();

        // 13 × 1.2 = 15.6 → 16, then × 2 = 32
        assert_eq!(magazine_after(&catalog, &["appended_mag", "double_drum"]), 32);
        assert_eq!(magazine_after(&catalog, &["double_drum", "appended_mag"]), 32);
    }

    #[test]
    fn slots_sort_by_category_with_unknown_keys_last() {
        let catalog = PerkCatalog::with_builtin().unwrap();
        let loadout = PerkLoadout::equip(
            Some("adaptive_frame".into()),
            ["mystery", "outlaw", "extended_mag", "smallbore"].map(String::from),
            None,
            &catalog,
        );
        assert_eq!(
            loadout.slots(),
            ["smallbore", "extended_mag", "outlaw", "mystery"].map(String::from)
        );
        assert_eq!(
            loadout.keys().collect::<Vec<_>>(),
            ["adaptive_frame", "smallbore", "extended_mag", "outlaw", "mystery"]
        );
    }
}
