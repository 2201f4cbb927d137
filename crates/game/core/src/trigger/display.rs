//! Read-only buff projection for the HUD.

use super::state::PerkTimers;
use super::timer::{BuffTimer, StackingBuff};
use crate::perk::tuning::target_lock;
use crate::perk::{PerkCatalog, PerkKind, PerkLoadout};
use crate::state::Ticks;

/// One active buff as the HUD should draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffDisplayEntry {
    pub name: String,
    /// Icon identifier; the perk key.
    pub icon: String,
    pub timer: Ticks,
    pub max_timer: Ticks,
    pub stacks: u32,
}

enum Gauge<'a> {
    Timer(&'a BuffTimer),
    Stacks(&'a StackingBuff),
    Counter { count: u32, remaining: Ticks, window: Ticks },
}

fn gauge(kind: PerkKind, timers: &PerkTimers) -> Option<Gauge<'_>> {
    use PerkKind::*;
    Some(match kind {
        Outlaw => Gauge::Timer(&timers.outlaw),
        RapidHit => Gauge::Stacks(&timers.rapid_hit),
        KillClip => Gauge::Timer(&timers.kill_clip),
        Frenzy => Gauge::Timer(&timers.frenzy),
        Rampage => Gauge::Stacks(&timers.rampage),
        Onslaught => Gauge::Stacks(&timers.onslaught),
        FeedingFrenzy => Gauge::Stacks(&timers.feeding_frenzy),
        Adagio => Gauge::Timer(&timers.adagio),
        TargetLock => Gauge::Counter {
            count: timers.target_lock.count(),
            remaining: timers.target_lock.remaining(),
            window: target_lock::WINDOW_TICKS + 1,
        },
        DynamicSwayReduction => Gauge::Stacks(&timers.dynamic_sway),
        Desperado => Gauge::Timer(&timers.desperado),
        PrecisionInstrument => Gauge::Stacks(&timers.precision_instrument),
        FocusedFury => Gauge::Timer(&timers.focused_fury),
        OneForAll => Gauge::Timer(&timers.one_for_all),
        TrickShot => Gauge::Stacks(&timers.trick_shot),
        _ => return None,
    })
}

/// Active buffs in loadout order. Pure; never mutates state.
pub fn buff_display(
    loadout: &PerkLoadout,
    timers: &PerkTimers,
    catalog: &PerkCatalog,
) -> Vec<BuffDisplayEntry> {
    loadout
        .descriptors(catalog)
        .filter_map(|descriptor| {
            let (timer, max_timer, stacks) = match gauge(descriptor.kind, timers)? {
                Gauge::Timer(t) if t.is_active() => (t.remaining(), t.duration(), 0),
                Gauge::Stacks(s) if s.is_active() => (
                    s.timer().remaining(),
                    s.timer().duration(),
                    u32::from(s.stacks()),
                ),
                Gauge::Counter {
                    count,
                    remaining,
                    window,
                } if count > 0 => (remaining, window, count),
                _ => return None,
            };
            Some(BuffDisplayEntry {
                name: descriptor.display_name.clone(),
                icon: descriptor.key.clone(),
                timer,
                max_timer,
                stacks,
            })
        })
        .collect()
}
