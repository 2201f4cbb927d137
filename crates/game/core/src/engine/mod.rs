//! The combat engine: entry points the host calls every tick and on every
//! combat event.
//!
//! [`CombatEngine`] borrows the process-wide [`CombatState`] plus a
//! [`CombatEnv`] for the duration of a call. Weapons are passed in
//! explicitly; the engine never stores them. Everything it wants the world
//! to do comes back as [`CombatEffect`]s.

mod fire;
mod hit;

use tracing::{debug, trace};

use crate::env::CombatEnv;
use crate::state::{ChainId, CombatState, EntityId};
use crate::stats::{self, DamageModifiers, WeaponStats};
use crate::trigger::{self, BuffDisplayEntry, CombatEffect, CombatEvent, dispatch};
use crate::weapon::{ReloadStart, WeaponInstance};

pub struct CombatEngine<'a> {
    state: &'a mut CombatState,
    env: CombatEnv<'a>,
}

impl<'a> CombatEngine<'a> {
    pub fn new(state: &'a mut CombatState, env: CombatEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &CombatState {
        self.state
    }

    // ===== queries =====

    pub fn resolve(&self, weapon: &WeaponInstance) -> WeaponStats {
        stats::resolve(weapon, self.env.catalog)
    }

    pub fn reload_seconds(&self, weapon: &WeaponInstance) -> f32 {
        stats::reload_seconds(weapon, &self.resolve(weapon))
    }

    pub fn damage_modifiers(&self, weapon: &WeaponInstance) -> DamageModifiers {
        stats::damage_modifiers(weapon)
    }

    pub fn can_fire(&self, weapon: &WeaponInstance) -> bool {
        let stats = self.resolve(weapon);
        stats.can_fire()
            && weapon.magazine.can_fire()
            && weapon.fire_cooldown == 0
            && weapon.burst.is_none()
    }

    pub fn can_reload(&self, weapon: &WeaponInstance) -> bool {
        weapon
            .magazine
            .can_reload(self.resolve(weapon).magazine_size)
    }

    pub fn buff_display(&self, weapon: &WeaponInstance) -> Vec<BuffDisplayEntry> {
        trigger::buff_display(&weapon.loadout, &weapon.timers, self.env.catalog)
    }

    // ===== per-tick =====

    /// Advances one weapon by a tick.
    ///
    /// Order: perk timers, cooldowns, ammo clamp, reload progress (with its
    /// completion hooks), burst follow-ups.
    pub fn on_tick(&mut self, weapon: &mut WeaponInstance) -> Vec<CombatEffect> {
        dispatch::on_tick(&weapon.loadout, &mut weapon.timers);
        weapon.recoil.tick();
        weapon.fire_cooldown = weapon.fire_cooldown.saturating_sub(1);

        let stats = self.resolve(weapon);
        weapon.magazine.clamp(stats.magazine_size);
        if weapon.magazine.tick(stats.magazine_size) {
            debug!(ammo = weapon.magazine.ammo(), "reload complete");
            dispatch::on_reload_complete(&weapon.loadout, &mut weapon.timers);
        }

        self.advance_burst(weapon)
            .map(CombatEffect::Shot)
            .into_iter()
            .collect()
    }

    /// Advances the process-wide tables by a tick. Call once per tick,
    /// regardless of how many weapons exist.
    pub fn tick_world(&mut self) -> Vec<CombatEffect> {
        let world = self.env.world;
        let effects = self.state.targets.tick(world);

        let expired = self.state.ledger.tick(self.env.config.chain_timeout_ticks);
        if expired > 0 {
            trace!(expired, "ricochet chains timed out");
        }
        self.state
            .maybe_sweep(world, self.env.config.sweep_interval_ticks);
        effects
    }

    // ===== events =====

    /// Routes a reported event to its entry point.
    pub fn handle(
        &mut self,
        weapon: &mut WeaponInstance,
        event: &CombatEvent,
    ) -> Vec<CombatEffect> {
        match event {
            CombatEvent::ShotFired => {
                self.on_shot_fired(weapon);
                Vec::new()
            }
            CombatEvent::Hit(hit) => self.on_hit(weapon, hit),
            CombatEvent::Miss => {
                self.on_miss(weapon);
                Vec::new()
            }
            CombatEvent::ChainMiss(chain) => {
                self.on_chain_miss(*chain);
                Vec::new()
            }
            CombatEvent::PlayerHurt => {
                self.on_player_hurt(weapon);
                Vec::new()
            }
            CombatEvent::ReloadStart => {
                self.request_reload(weapon);
                Vec::new()
            }
            CombatEvent::ReloadCancel => {
                self.cancel_reload(weapon);
                Vec::new()
            }
        }
    }

    /// Shot hooks for a round the host fired itself. Rounds produced by
    /// [`try_fire`](Self::try_fire) have already run them. Returns true when
    /// the round is tagged to ricochet.
    pub fn on_shot_fired(&mut self, weapon: &mut WeaponInstance) -> bool {
        dispatch::on_shot_fired(&weapon.loadout, &mut weapon.timers)
    }

    pub fn on_miss(&mut self, weapon: &mut WeaponInstance) {
        dispatch::on_miss(&weapon.loadout, &mut weapon.timers);
    }

    /// A chain projectile expired without hitting anything.
    pub fn on_chain_miss(&mut self, chain: ChainId) {
        if self.state.ledger.end(chain) {
            trace!(%chain, "ricochet chain ended on miss");
        }
    }

    pub fn on_player_hurt(&mut self, weapon: &mut WeaponInstance) {
        dispatch::on_player_hurt(&weapon.loadout, &mut weapon.timers);
    }

    /// Starts a reload. Returns false if the magazine is full or a reload
    /// is already running.
    pub fn request_reload(&mut self, weapon: &mut WeaponInstance) -> bool {
        let stats = self.resolve(weapon);
        if !weapon.magazine.can_reload(stats.magazine_size) {
            return false;
        }

        let seconds = stats::reload_seconds(weapon, &stats);
        let ticks = self.env.config.seconds_to_ticks(seconds);
        dispatch::on_reload_start(&weapon.loadout, &mut weapon.timers);
        weapon.burst = None;

        match weapon.magazine.begin_reload(ticks, stats.magazine_size) {
            ReloadStart::Timed(ticks) => debug!(seconds, ticks, "reload started"),
            ReloadStart::Instant => {
                debug!("instant reload");
                dispatch::on_reload_complete(&weapon.loadout, &mut weapon.timers);
            }
        }
        true
    }

    pub fn cancel_reload(&mut self, weapon: &mut WeaponInstance) -> bool {
        if !weapon.magazine.cancel_reload() {
            return false;
        }
        dispatch::on_reload_cancelled(&mut weapon.timers);
        true
    }

    /// Stops every pending sequencer on `target` (e.g. it became immune).
    pub fn cancel_target(&mut self, target: EntityId) {
        self.state.targets.cancel(target);
    }
}
