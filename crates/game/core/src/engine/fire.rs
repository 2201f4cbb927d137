//! Trigger pulls and burst follow-ups.

use glam::Vec2;
use tracing::trace;

use super::CombatEngine;
use crate::env::{compute_seed, rng_context};
use crate::trigger::{Shot, dispatch};
use crate::weapon::{BurstState, Deviation, Facing, WeaponInstance};

impl CombatEngine<'_> {
    /// Fires if the weapon can. Returns the outgoing round, or `None` when
    /// firing is not possible this tick (cooldown, empty, reloading,
    /// mid-burst, or stats that forbid firing).
    pub fn try_fire(
        &mut self,
        weapon: &mut WeaponInstance,
        aim: Vec2,
        facing: Facing,
    ) -> Option<Shot> {
        if weapon.burst.is_some() || weapon.fire_cooldown > 0 {
            return None;
        }
        let stats = self.resolve(weapon);
        if !stats.can_fire() || !weapon.magazine.can_fire() {
            trace!(ammo = weapon.magazine.ammo(), "cannot fire");
            return None;
        }
        let cycle = self.env.config.fire_cycle_ticks(stats.rounds_per_minute)?;

        let profile = weapon.archetype.profile();
        let burst = weapon.loadout.burst_count(profile);
        let cooldown = cycle * burst;

        weapon.magazine.consume();
        weapon.fire_cooldown = cooldown;

        let roll = self.env.rng.signed_unit(compute_seed(
            weapon.seed,
            weapon.shots_fired,
            rng_context::BLOOM,
        ));
        let idle_limit = cooldown + self.env.config.idle_reset_margin_ticks;
        let deviation = weapon
            .recoil
            .on_trigger(profile, stats.stability, facing, idle_limit, roll);

        if burst > 1 {
            weapon.burst = Some(BurstState {
                remaining: burst - 1,
                countdown: profile.burst_interval_ticks.max(1),
                next_index: 1,
                aim,
                facing,
            });
        }

        Some(self.emit(weapon, aim, deviation, 0))
    }

    /// Fires the next burst sub-shot when its interval elapses.
    pub(super) fn advance_burst(&mut self, weapon: &mut WeaponInstance) -> Option<Shot> {
        let interval = weapon.archetype.profile().burst_interval_ticks.max(1);
        let burst = weapon.burst.as_mut()?;
        burst.countdown = burst.countdown.saturating_sub(1);
        if burst.countdown > 0 {
            return None;
        }

        let aim = burst.aim;
        let index = burst.next_index;
        burst.remaining = burst.remaining.saturating_sub(1);
        burst.next_index += 1;
        burst.countdown = interval;
        if burst.remaining == 0 {
            weapon.burst = None;
        }

        if !weapon.magazine.consume() {
            weapon.burst = None;
            return None;
        }
        let deviation = weapon.recoil.on_follow_up();
        Some(self.emit(weapon, aim, deviation, index))
    }

    fn emit(
        &mut self,
        weapon: &mut WeaponInstance,
        aim: Vec2,
        deviation: Deviation,
        burst_index: u32,
    ) -> Shot {
        weapon.shots_fired += 1;
        let ricochet = dispatch::on_shot_fired(&weapon.loadout, &mut weapon.timers);
        Shot {
            direction: deviation.apply(aim),
            recoil_degrees: deviation.recoil,
            bloom_degrees: deviation.bloom,
            burst_index,
            ricochet,
        }
    }
}
