//! Weapon-local perk rules.
//!
//! Each handler updates the weapon's [`PerkTimers`] for one event and returns
//! the [`Followup`]s that reach beyond the weapon (other targets, the
//! magazine, ricochet chains). The combat engine carries those out.

use tracing::trace;

use super::event::{HitEvent, HitOrigin};
use super::state::PerkTimers;
use crate::perk::tuning::*;
use crate::perk::{PerkFlags, PerkLoadout};
use crate::state::ProjectileId;

/// Cross-entity work requested by a perk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Followup {
    RefundAmmo(u32),
    /// Split the ricochet-tagged round into fixed bounces.
    RightChoiceBounce,
    /// Spend a trick-shot charge on a new ricochet chain.
    StartChain,
    Scorch(u32),
    /// Scorch everything around the hit except the hit target.
    ScorchArea { radius: f32, stacks: u32 },
    TagNanites,
    ReleaseNanites,
    LodgeSlug(ProjectileId),
    TremorHit,
}

/// Decrement phase plus auto-activations that depend on elapsed time.
pub fn on_tick(loadout: &PerkLoadout, timers: &mut PerkTimers) {
    timers.tick();

    let combat_ticks = timers.combat.tick();
    if loadout.has(PerkFlags::FRENZY) && combat_ticks >= frenzy::ACTIVATION_TICKS {
        timers.frenzy.arm(frenzy::DURATION_TICKS);
    }
}

/// Returns true when this round should be tagged to ricochet.
pub fn on_shot_fired(loadout: &PerkLoadout, timers: &mut PerkTimers) -> bool {
    if loadout.has(PerkFlags::DYNAMIC_SWAY) {
        timers
            .dynamic_sway
            .add(dynamic_sway::MAX_STACKS, dynamic_sway::DURATION_TICKS);
    }

    if !loadout.has(PerkFlags::RIGHT_CHOICE) {
        return false;
    }
    timers.right_choice_shots += 1;
    if timers.right_choice_shots >= right_choice::EVERY_NTH_SHOT {
        timers.right_choice_shots = 0;
        return true;
    }
    false
}

pub fn on_hit(
    loadout: &PerkLoadout,
    timers: &mut PerkTimers,
    hit: &HitEvent,
    magazine_size: u32,
) -> Vec<Followup> {
    let mut followups = Vec::new();
    let flags = loadout.flags();

    if flags.contains(PerkFlags::FRENZY) {
        timers.combat.engage(frenzy::GRACE_TICKS);
    }

    if hit.origin.is_primary() {
        on_primary_hit(flags, timers, hit, magazine_size, &mut followups);
    }

    if hit.origin == HitOrigin::RightChoice && flags.contains(PerkFlags::RIGHT_CHOICE) {
        followups.push(Followup::RightChoiceBounce);
    }

    if hit.is_kill {
        on_kill(flags, timers, hit, &mut followups);
    }

    followups
}

fn on_primary_hit(
    flags: PerkFlags,
    timers: &mut PerkTimers,
    hit: &HitEvent,
    magazine_size: u32,
    followups: &mut Vec<Followup>,
) {
    if hit.is_precision {
        if flags.contains(PerkFlags::RAPID_HIT) {
            timers
                .rapid_hit
                .add(rapid_hit::MAX_STACKS, rapid_hit::DURATION_TICKS);
        }
        if flags.contains(PerkFlags::PRECISION_INSTRUMENT) {
            timers.precision_instrument.add(
                precision_instrument::MAX_STACKS,
                precision_instrument::DURATION_TICKS,
            );
        }
        if flags.contains(PerkFlags::FOURTH_TIMES)
            && timers.fourth_times.hit(fourth_times::WINDOW_TICKS) >= fourth_times::REQUIRED_HITS
        {
            timers.fourth_times.reset();
            followups.push(Followup::RefundAmmo(fourth_times::AMMO_REFUND));
        }
    } else {
        timers.precision_instrument.clear();
    }

    if flags.contains(PerkFlags::TARGET_LOCK) {
        if timers.target_lock_target != Some(hit.target) {
            timers.target_lock.reset();
            timers.target_lock_target = Some(hit.target);
        }
        timers.target_lock.hit(target_lock::WINDOW_TICKS);
    }

    if hit.is_precision
        && flags.contains(PerkFlags::FOCUSED_FURY)
        && !timers.focused_fury.is_active()
    {
        let required = magazine_size.div_ceil(2).max(1);
        if timers.focused_fury_hits.hit(focused_fury::WINDOW_TICKS) >= required {
            timers.focused_fury_hits.reset();
            timers.focused_fury.arm(focused_fury::DURATION_TICKS);
            trace!(required, "focused fury armed");
        }
    }

    if flags.contains(PerkFlags::ONE_FOR_ALL) && !timers.one_for_all_targets.contains(&hit.target)
    {
        timers.one_for_all_hits.hit(one_for_all::WINDOW_TICKS);
        let distinct = match timers.one_for_all_targets.try_push(hit.target) {
            Ok(()) => timers.one_for_all_targets.len(),
            Err(_) => one_for_all::REQUIRED_TARGETS,
        };
        if distinct >= one_for_all::REQUIRED_TARGETS {
            timers.one_for_all_targets.clear();
            timers.one_for_all_hits.reset();
            timers.one_for_all.arm(one_for_all::DURATION_TICKS);
            trace!("one for all armed");
        }
    }

    if flags.contains(PerkFlags::SOLAR_CATALYST) {
        let stacks = if hit.is_precision {
            solar_catalyst::SCORCH_PER_PRECISION_HIT
        } else {
            solar_catalyst::SCORCH_PER_HIT
        };
        followups.push(Followup::Scorch(stacks));
    }
    if flags.contains(PerkFlags::NANOTECH) {
        followups.push(Followup::TagNanites);
    }
    if flags.contains(PerkFlags::DETONATOR_SLUGS) {
        if let Some(projectile) = hit.projectile {
            followups.push(Followup::LodgeSlug(projectile));
        }
    }
    if flags.contains(PerkFlags::KINETIC_TREMORS) {
        followups.push(Followup::TremorHit);
    }
    if flags.contains(PerkFlags::TRICK_SHOT) && timers.trick_shot.consume() {
        followups.push(Followup::StartChain);
    }
}

fn on_kill(
    flags: PerkFlags,
    timers: &mut PerkTimers,
    hit: &HitEvent,
    followups: &mut Vec<Followup>,
) {
    if flags.contains(PerkFlags::RAMPAGE) {
        timers
            .rampage
            .add(rampage::MAX_STACKS, rampage::DURATION_TICKS);
    }
    if flags.contains(PerkFlags::ONSLAUGHT) {
        timers
            .onslaught
            .add(onslaught::MAX_STACKS, onslaught::DURATION_TICKS);
    }
    if flags.contains(PerkFlags::FEEDING_FRENZY) {
        timers
            .feeding_frenzy
            .add(feeding_frenzy::MAX_STACKS, feeding_frenzy::DURATION_TICKS);
    }
    if flags.contains(PerkFlags::ADAGIO) {
        timers.adagio.arm(adagio::DURATION_TICKS);
    }
    if flags.contains(PerkFlags::KILL_CLIP) {
        timers.kill_clip_window.arm(kill_clip::KILL_WINDOW_TICKS);
    }
    if timers.target_lock_target == Some(hit.target) {
        timers.target_lock.reset();
        timers.target_lock_target = None;
    }

    if hit.is_precision {
        if flags.contains(PerkFlags::OUTLAW) {
            timers.outlaw.arm(outlaw::DURATION_TICKS);
        }
        if flags.contains(PerkFlags::DESPERADO) {
            timers.desperado_window.arm(desperado::WINDOW_TICKS);
        }
        if flags.contains(PerkFlags::TRICK_SHOT) {
            timers
                .trick_shot
                .add(trick_shot::MAX_CHARGES, trick_shot::DURATION_TICKS);
        }
    }

    if flags.contains(PerkFlags::INCANDESCENT) {
        followups.push(Followup::ScorchArea {
            radius: incandescent::RADIUS,
            stacks: incandescent::SCORCH,
        });
    }
    if flags.contains(PerkFlags::NANOTECH) {
        followups.push(Followup::ReleaseNanites);
    }
}

/// A miss breaks precision streaks.
pub fn on_miss(loadout: &PerkLoadout, timers: &mut PerkTimers) {
    if loadout.has(PerkFlags::PRECISION_INSTRUMENT) {
        timers.precision_instrument.clear();
    }
}

pub fn on_player_hurt(loadout: &PerkLoadout, timers: &mut PerkTimers) {
    if loadout.has(PerkFlags::FRENZY) {
        timers.combat.engage(frenzy::GRACE_TICKS);
    }
}

pub fn on_reload_start(loadout: &PerkLoadout, timers: &mut PerkTimers) {
    if loadout.has(PerkFlags::KILL_CLIP) && timers.kill_clip_window.is_active() {
        timers.kill_clip_pending = true;
        timers.kill_clip_window.clear();
    }
}

pub fn on_reload_complete(loadout: &PerkLoadout, timers: &mut PerkTimers) {
    if timers.kill_clip_pending {
        timers.kill_clip_pending = false;
        timers.kill_clip.arm(kill_clip::DURATION_TICKS);
    }
    if loadout.has(PerkFlags::DESPERADO) && timers.desperado_window.is_active() {
        timers.desperado_window.clear();
        timers.desperado.arm(desperado::DURATION_TICKS);
    }
}

/// A reload that was interrupted never completes.
pub fn on_reload_cancelled(timers: &mut PerkTimers) {
    timers.kill_clip_pending = false;
}
