//! Effective-stat resolution and damage multipliers.
//!
//! Pipeline: base (or override) → static perk modifiers in loadout order →
//! timed buffs folded through [`StatBonuses`] → clamp. Nothing is cached;
//! callers resolve again whenever they need stats.

use super::bonus::{Bonus, StatBonuses};
use super::weapon::WeaponStats;
use crate::perk::tuning;
use crate::perk::{PerkCatalog, PerkFlags, PerkKind};
use crate::trigger::PerkTimers;
use crate::weapon::WeaponInstance;

/// Effective stats of `weapon` right now.
pub fn resolve(weapon: &WeaponInstance, catalog: &PerkCatalog) -> WeaponStats {
    let mut stats = weapon.stat_override().unwrap_or(weapon.base());
    let mut bonuses = StatBonuses::new();

    for descriptor in weapon.loadout().descriptors(catalog) {
        stats = descriptor.modify(stats);
        buff_bonuses(descriptor.kind, weapon.timers(), &mut bonuses);
    }

    bonuses.apply(stats).clamped()
}

/// Adds the timed-buff contribution of one perk kind.
fn buff_bonuses(kind: PerkKind, timers: &PerkTimers, bonuses: &mut StatBonuses) {
    use tuning::*;

    match kind {
        PerkKind::Outlaw if timers.outlaw.is_active() => {
            bonuses.reload_speed(Bonus::Flat(outlaw::RELOAD_SPEED));
        }
        PerkKind::RapidHit if timers.rapid_hit.is_active() => {
            let stacks = u32::from(timers.rapid_hit.stacks());
            bonuses
                .stability(Bonus::Flat(by_stacks(&rapid_hit::STABILITY, stacks)))
                .reload_speed(Bonus::Flat(by_stacks(&rapid_hit::RELOAD_SPEED, stacks)));
        }
        PerkKind::Frenzy if timers.frenzy.is_active() => {
            bonuses.reload_speed(Bonus::Flat(frenzy::RELOAD_SPEED));
        }
        PerkKind::Onslaught if timers.onslaught.is_active() => {
            let stacks = u32::from(timers.onslaught.stacks());
            bonuses
                .rounds_per_minute(Bonus::More(by_stacks(&onslaught::RPM_SCALE, stacks)))
                .reload_speed(Bonus::Flat(by_stacks(&onslaught::RELOAD_SPEED, stacks)));
        }
        PerkKind::FeedingFrenzy if timers.feeding_frenzy.is_active() => {
            let stacks = u32::from(timers.feeding_frenzy.stacks());
            bonuses.reload_speed(Bonus::Flat(by_stacks(&feeding_frenzy::RELOAD_SPEED, stacks)));
        }
        PerkKind::Adagio if timers.adagio.is_active() => {
            bonuses
                .rounds_per_minute(Bonus::More(adagio::RPM_SCALE))
                .range(Bonus::Flat(adagio::RANGE));
        }
        PerkKind::DynamicSwayReduction if timers.dynamic_sway.is_active() => {
            let stacks = u32::from(timers.dynamic_sway.stacks());
            bonuses.stability(Bonus::Flat(by_stacks(&dynamic_sway::STABILITY, stacks)));
        }
        PerkKind::Desperado if timers.desperado.is_active() => {
            bonuses.rounds_per_minute(Bonus::More(desperado::RPM_SCALE));
        }
        _ => {}
    }
}

/// Product of every active reload-time multiplier (1.0 = unchanged).
pub fn reload_time_scale(weapon: &WeaponInstance, empty: bool) -> f32 {
    use tuning::*;

    let loadout = weapon.loadout();
    let timers = weapon.timers();
    let mut scale = 1.0;

    if loadout.has(PerkFlags::OUTLAW) && timers.outlaw.is_active() {
        scale *= outlaw::RELOAD_TIME_SCALE;
    }
    if loadout.has(PerkFlags::RAPID_HIT) {
        scale *= by_stacks(
            &rapid_hit::RELOAD_TIME_SCALE,
            u32::from(timers.rapid_hit.stacks()),
        );
    }
    if loadout.has(PerkFlags::FEEDING_FRENZY) {
        scale *= by_stacks(
            &feeding_frenzy::RELOAD_TIME_SCALE,
            u32::from(timers.feeding_frenzy.stacks()),
        );
    }
    if empty && loadout.has(PerkFlags::ALLOY_MAGAZINE) {
        scale *= alloy_magazine::EMPTY_RELOAD_TIME_SCALE;
    }
    scale
}

/// Seconds a reload started now would take.
pub fn reload_seconds(weapon: &WeaponInstance, stats: &WeaponStats) -> f32 {
    let base = weapon.archetype().profile().base_reload_seconds(stats);
    base * reload_time_scale(weapon, weapon.magazine().is_empty())
}

/// Outgoing damage multipliers from active buffs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageModifiers {
    pub body: f32,
    pub precision: f32,
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self {
            body: 1.0,
            precision: 1.0,
        }
    }
}

impl DamageModifiers {
    pub fn for_hit(&self, is_precision: bool) -> f32 {
        if is_precision { self.precision } else { self.body }
    }
}

/// Damage multipliers for the next hit.
pub fn damage_modifiers(weapon: &WeaponInstance) -> DamageModifiers {
    use tuning::*;

    let loadout = weapon.loadout();
    let timers = weapon.timers();
    let mut body = 1.0;

    if loadout.has(PerkFlags::RAMPAGE) {
        body *= by_stacks(&rampage::DAMAGE, u32::from(timers.rampage.stacks()));
    }
    if timers.kill_clip.is_active() {
        body *= kill_clip::DAMAGE;
    }
    if timers.frenzy.is_active() {
        body *= frenzy::DAMAGE;
    }
    if timers.adagio.is_active() {
        body *= adagio::DAMAGE;
    }
    if loadout.has(PerkFlags::TARGET_LOCK) {
        body *= by_stacks(&target_lock::DAMAGE, timers.target_lock.count());
    }
    if timers.focused_fury.is_active() {
        body *= focused_fury::DAMAGE;
    }
    if timers.one_for_all.is_active() {
        body *= one_for_all::DAMAGE;
    }

    let mut precision = body;
    if loadout.has(PerkFlags::PRECISION_INSTRUMENT) {
        precision *= by_stacks(
            &precision_instrument::PRECISION_DAMAGE,
            u32::from(timers.precision_instrument.stacks()),
        );
    }

    DamageModifiers { body, precision }
}

/// Range falloff multiplier at `distance` for the given stats.
pub fn falloff_multiplier(weapon: &WeaponInstance, stats: &WeaponStats, distance: f32) -> f32 {
    weapon
        .archetype()
        .profile()
        .falloff_multiplier(stats, distance)
}
