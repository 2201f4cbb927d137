//! Perk tuning constants.
//!
//! Durations and windows are in ticks at the default 60 ticks per second.
//! Per-stack tables are indexed by the clamped stack count, so index 0 is
//! always the "no stacks" value.

use crate::state::Ticks;

pub mod outlaw {
    use super::Ticks;
    pub const DURATION_TICKS: Ticks = 360;
    pub const RELOAD_SPEED: f32 = 70.0;
    pub const RELOAD_TIME_SCALE: f32 = 0.9;
}

pub mod rapid_hit {
    use super::Ticks;
    pub const MAX_STACKS: u8 = 5;
    pub const DURATION_TICKS: Ticks = 120;
    pub const STABILITY: [f32; 6] = [0.0, 2.0, 12.0, 14.0, 18.0, 25.0];
    pub const RELOAD_SPEED: [f32; 6] = [0.0, 5.0, 30.0, 35.0, 45.0, 60.0];
    pub const RELOAD_TIME_SCALE: [f32; 6] = [1.0, 0.995, 0.98, 0.97, 0.96, 0.94];
}

pub mod kill_clip {
    use super::Ticks;
    /// Reload must start this soon after a kill to arm the buff.
    pub const KILL_WINDOW_TICKS: Ticks = 180;
    pub const DURATION_TICKS: Ticks = 300;
    pub const DAMAGE: f32 = 1.25;
}

pub mod frenzy {
    use super::Ticks;
    /// Combat lapses this long after the last hit dealt or taken.
    pub const GRACE_TICKS: Ticks = 300;
    /// Continuous combat needed before the buff switches on.
    pub const ACTIVATION_TICKS: Ticks = 720;
    pub const DURATION_TICKS: Ticks = 360;
    pub const DAMAGE: f32 = 1.15;
    pub const RELOAD_SPEED: f32 = 50.0;
}

pub mod rampage {
    use super::Ticks;
    pub const MAX_STACKS: u8 = 3;
    pub const DURATION_TICKS: Ticks = 210;
    pub const DAMAGE: [f32; 4] = [1.0, 1.1, 1.2, 1.33];
}

pub mod onslaught {
    use super::Ticks;
    pub const MAX_STACKS: u8 = 3;
    pub const DURATION_TICKS: Ticks = 270;
    pub const RPM_SCALE: [f32; 4] = [1.0, 1.15, 1.25, 1.35];
    pub const RELOAD_SPEED: [f32; 4] = [0.0, 15.0, 25.0, 35.0];
}

pub mod feeding_frenzy {
    use super::Ticks;
    pub const MAX_STACKS: u8 = 5;
    pub const DURATION_TICKS: Ticks = 210;
    pub const RELOAD_SPEED: [f32; 6] = [0.0, 10.0, 45.0, 55.0, 70.0, 100.0];
    pub const RELOAD_TIME_SCALE: [f32; 6] = [1.0, 0.975, 0.9, 0.868, 0.837, 0.8];
}

pub mod adagio {
    use super::Ticks;
    pub const DURATION_TICKS: Ticks = 420;
    pub const RPM_SCALE: f32 = 0.7;
    pub const RANGE: f32 = 10.0;
    pub const DAMAGE: f32 = 1.3;
}

pub mod target_lock {
    use super::Ticks;
    pub const WINDOW_TICKS: Ticks = 12;
    /// Body damage by consecutive-hit count on the same target.
    pub const DAMAGE: [f32; 10] = [1.0, 1.0, 1.0, 1.0, 1.165, 1.2, 1.25, 1.3, 1.35, 1.4];
}

pub mod dynamic_sway {
    use super::Ticks;
    pub const MAX_STACKS: u8 = 10;
    /// Stacks fall off almost immediately once firing stops.
    pub const DURATION_TICKS: Ticks = 30;
    pub const STABILITY: [f32; 11] = [
        0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0,
    ];
}

pub mod fourth_times {
    use super::Ticks;
    pub const WINDOW_TICKS: Ticks = 120;
    pub const REQUIRED_HITS: u32 = 4;
    pub const AMMO_REFUND: u32 = 2;
}

pub mod right_choice {
    pub const EVERY_NTH_SHOT: u32 = 7;
    pub const BOUNCES: u32 = 2;
    pub const RANGE: f32 = 320.0;
}

pub mod trick_shot {
    use super::Ticks;
    pub const MAX_CHARGES: u8 = 3;
    pub const DURATION_TICKS: Ticks = 600;
    pub const CHAIN_BOUNCES: u32 = 4;
    pub const MAX_HITS_PER_TARGET: u32 = 2;
    pub const RANGE: f32 = 400.0;
}

pub mod kinetic_tremors {
    use super::Ticks;
    pub const HIT_WINDOW_TICKS: Ticks = 90;
    pub const INITIAL_DELAY_TICKS: Ticks = 30;
    pub const PULSES: u32 = 3;
    pub const PULSE_INTERVAL_TICKS: Ticks = 30;
    pub const POST_PULSE_GRACE_TICKS: Ticks = 60;
    pub const RADIUS: f32 = 160.0;
    pub const DAMAGE: f32 = 30.0;
}

pub mod incandescent {
    pub const RADIUS: f32 = 200.0;
    pub const SCORCH: u32 = 30;
}

pub mod desperado {
    use super::Ticks;
    /// Reload must complete this soon after a precision kill.
    pub const WINDOW_TICKS: Ticks = 360;
    pub const DURATION_TICKS: Ticks = 360;
    pub const RPM_SCALE: f32 = 1.3;
}

pub mod precision_instrument {
    use super::Ticks;
    pub const MAX_STACKS: u8 = 6;
    pub const DURATION_TICKS: Ticks = 120;
    pub const PRECISION_DAMAGE: [f32; 7] = [1.0, 1.04, 1.08, 1.12, 1.16, 1.2, 1.25];
}

pub mod focused_fury {
    use super::Ticks;
    pub const WINDOW_TICKS: Ticks = 180;
    pub const DURATION_TICKS: Ticks = 600;
    pub const DAMAGE: f32 = 1.2;
}

pub mod one_for_all {
    use super::Ticks;
    pub const WINDOW_TICKS: Ticks = 180;
    pub const REQUIRED_TARGETS: usize = 3;
    pub const DURATION_TICKS: Ticks = 600;
    pub const DAMAGE: f32 = 1.35;
}

pub mod nanotech {
    use super::Ticks;
    pub const MAX_STACKS: u32 = 10;
    pub const EXPIRY_TICKS: Ticks = 300;
}

pub mod detonator_slugs {
    use super::Ticks;
    pub const SLUGS_TO_EXPLODE: usize = 5;
    pub const EXPLOSION_DELAY_TICKS: Ticks = 10;
    pub const EXPLOSION_COOLDOWN_TICKS: Ticks = 180;
    pub const PENDING_TIMEOUT_TICKS: Ticks = 300;
    pub const DAMAGE: f32 = 40.0;
    pub const STUN_TICKS: Ticks = 30;
}

pub mod scorch {
    use super::Ticks;
    pub const MAX_STACKS: u32 = 100;
    pub const IGNITE_THRESHOLD: u32 = 100;
    pub const DECAY_INTERVAL_TICKS: Ticks = 30;
    pub const DECAY_PER_INTERVAL: u32 = 5;
    pub const DOT_INTERVAL_TICKS: Ticks = 60;
    pub const MIN_DOT: f32 = 2.0;
    pub const MAX_DOT: f32 = 12.0;
    pub const IGNITE_DAMAGE: f32 = 150.0;
    pub const IGNITE_RADIUS: f32 = 180.0;
    pub const IGNITE_SPREAD: u32 = 40;
}

pub mod solar_catalyst {
    pub const SCORCH_PER_HIT: u32 = 12;
    pub const SCORCH_PER_PRECISION_HIT: u32 = 18;
}

pub mod alloy_magazine {
    pub const EMPTY_RELOAD_TIME_SCALE: f32 = 0.85;
}

/// Looks up a per-stack table, clamping the index to the last entry.
pub fn by_stacks<const N: usize>(table: &[f32; N], stacks: u32) -> f32 {
    let index = (stacks as usize).min(N - 1);
    table[index]
}
