//! Per-weapon perk timers, stacks and counters.

use arrayvec::ArrayVec;

use super::timer::{BuffTimer, CombatGrace, StackingBuff, WindowCounter};
use crate::perk::tuning::one_for_all;
use crate::state::EntityId;

/// Every stateful perk field of one weapon instance.
///
/// Owned exclusively by its [`WeaponInstance`](crate::weapon::WeaponInstance)
/// and mutated only through the trigger engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkTimers {
    pub outlaw: BuffTimer,
    pub rapid_hit: StackingBuff,

    /// Armed by a kill; a reload started while it runs arms `kill_clip_pending`.
    pub kill_clip_window: BuffTimer,
    pub kill_clip_pending: bool,
    pub kill_clip: BuffTimer,

    pub combat: CombatGrace,
    pub frenzy: BuffTimer,

    pub rampage: StackingBuff,
    pub onslaught: StackingBuff,
    pub feeding_frenzy: StackingBuff,
    pub adagio: BuffTimer,

    pub target_lock: WindowCounter,
    pub target_lock_target: Option<EntityId>,

    pub dynamic_sway: StackingBuff,
    pub fourth_times: WindowCounter,
    /// Shots fired since the last ricochet-tagged shot.
    pub right_choice_shots: u32,

    /// Armed by a precision kill; a reload completing while it runs arms
    /// `desperado`.
    pub desperado_window: BuffTimer,
    pub desperado: BuffTimer,

    pub precision_instrument: StackingBuff,

    pub focused_fury_hits: WindowCounter,
    pub focused_fury: BuffTimer,

    pub one_for_all_hits: WindowCounter,
    pub one_for_all_targets: ArrayVec<EntityId, { one_for_all::REQUIRED_TARGETS }>,
    pub one_for_all: BuffTimer,

    pub trick_shot: StackingBuff,
}

impl PerkTimers {
    /// Decrement phase: advances every timer by exactly one tick.
    ///
    /// Combat grace is advanced separately by the trigger engine because its
    /// result drives an auto-activation.
    pub fn tick(&mut self) {
        self.outlaw.tick();
        self.rapid_hit.tick();
        self.kill_clip_window.tick();
        self.kill_clip.tick();
        self.frenzy.tick();
        self.rampage.tick();
        self.onslaught.tick();
        self.feeding_frenzy.tick();
        self.adagio.tick();

        self.target_lock.tick();
        if self.target_lock.count() == 0 {
            self.target_lock_target = None;
        }

        self.dynamic_sway.tick();
        self.fourth_times.tick();
        self.desperado_window.tick();
        self.desperado.tick();
        self.precision_instrument.tick();
        self.focused_fury_hits.tick();
        self.focused_fury.tick();

        self.one_for_all_hits.tick();
        if self.one_for_all_hits.count() == 0 {
            self.one_for_all_targets.clear();
        }
        self.one_for_all.tick();

        self.trick_shot.tick();
    }
}
