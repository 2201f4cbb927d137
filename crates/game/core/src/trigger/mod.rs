//! Trigger engine: per-weapon timers, event rules and HUD projection.

pub mod display;
pub mod dispatch;
pub mod effect;
pub mod event;
pub mod state;
pub mod timer;

pub use display::{BuffDisplayEntry, buff_display};
pub use dispatch::Followup;
pub use effect::{CombatEffect, DamageSource, Ricochet, Shot};
pub use event::{ChainLink, CombatEvent, HitEvent, HitOrigin};
pub use state::PerkTimers;
pub use timer::{BuffTimer, CombatGrace, StackingBuff, WindowCounter};
