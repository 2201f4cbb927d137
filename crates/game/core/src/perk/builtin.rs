//! Built-in perk roster.

use super::descriptor::PerkDescriptor;
use super::kind::PerkKind as K;

/// Every built-in descriptor, frames first.
pub fn builtin_descriptors() -> Vec<PerkDescriptor> {
    vec![
        // Frames
        PerkDescriptor::new(K::AdaptiveFrame, "Adaptive Frame", "A well-rounded, reliable frame."),
        PerkDescriptor::new(
            K::RapidFireFrame,
            "Rapid-Fire Frame",
            "Deep magazine and faster reloads.",
        )
        .with_modifier(|s| s.add_reload_speed(15.0).scale_magazine(1.2)),
        PerkDescriptor::new(K::PrecisionFrame, "Precision Frame", "Recoil is more predictable.")
            .with_modifier(|s| s.add_stability(10.0)),
        PerkDescriptor::new(
            K::AggressiveFrame,
            "Aggressive Frame",
            "Fires longer bursts with heavier recoil.",
        )
        .with_modifier(|s| s.add_range(5.0).add_stability(-5.0))
        .with_burst_count(4),
        PerkDescriptor::new(K::LightweightFrame, "Lightweight Frame", "Easy to handle.")
            .with_modifier(|s| s.add_stability(5.0).add_reload_speed(5.0)),
        PerkDescriptor::new(
            K::HighImpactFrame,
            "High-Impact Frame",
            "Slower, harder-hitting rounds.",
        )
        .with_modifier(|s| s.add_range(10.0).scale_rpm(0.9)),
        // Barrels
        PerkDescriptor::new(K::Smallbore, "Smallbore", "Increases range and stability.")
            .with_modifier(|s| s.add_range(7.0).add_stability(7.0)),
        PerkDescriptor::new(
            K::CorkscrewRifling,
            "Corkscrew Rifling",
            "Balanced barrel: slightly increases range, stability and reload.",
        )
        .with_modifier(|s| s.add_range(5.0).add_stability(5.0).add_reload_speed(5.0)),
        PerkDescriptor::new(K::ArrowheadBrake, "Arrowhead Brake", "Greatly increases stability.")
            .with_modifier(|s| s.add_stability(10.0)),
        PerkDescriptor::new(
            K::HammerForgedRifling,
            "Hammer-Forged Rifling",
            "Greatly increases range.",
        )
        .with_modifier(|s| s.add_range(10.0)),
        PerkDescriptor::new(K::FullBore, "Full Bore", "Large range gain at a cost in stability.")
            .with_modifier(|s| s.add_range(15.0).add_stability(-10.0)),
        // Magazines
        PerkDescriptor::new(K::ExtendedMag, "Extended Mag", "Larger magazine, slower reload.")
            .with_modifier(|s| s.scale_magazine(1.3).add_reload_speed(-10.0)),
        PerkDescriptor::new(K::TacticalMag, "Tactical Mag", "Slightly larger, faster magazine.")
            .with_modifier(|s| s.scale_magazine(1.1).add_stability(3.0).add_reload_speed(10.0)),
        PerkDescriptor::new(K::FlaredMagwell, "Flared Magwell", "Faster reload, more stability.")
            .with_modifier(|s| s.add_stability(5.0).add_reload_speed(15.0)),
        PerkDescriptor::new(K::AppendedMag, "Appended Mag", "Increases magazine size.")
            .with_modifier(|s| s.scale_magazine(1.2)),
        PerkDescriptor::new(
            K::AlloyMagazine,
            "Alloy Magazine",
            "Reloads started on an empty magazine are faster.",
        ),
        // Majors
        PerkDescriptor::new(K::Outlaw, "Outlaw", "Precision kills greatly increase reload speed."),
        PerkDescriptor::new(
            K::RapidHit,
            "Rapid Hit",
            "Precision hits stack reload speed and stability.",
        ),
        PerkDescriptor::new(
            K::KillClip,
            "Kill Clip",
            "Reloading after a kill grants increased damage.",
        ),
        PerkDescriptor::new(
            K::Frenzy,
            "Frenzy",
            "Being in combat for an extended time boosts damage and reload.",
        ),
        PerkDescriptor::new(K::Rampage, "Rampage", "Kills stack increased damage."),
        PerkDescriptor::new(K::Onslaught, "Onslaught", "Kills stack rate of fire and reload."),
        PerkDescriptor::new(
            K::FeedingFrenzy,
            "Feeding Frenzy",
            "Kills stack increasing reload speed.",
        ),
        PerkDescriptor::new(
            K::Adagio,
            "Adagio",
            "Kills slow the rate of fire while boosting damage and range.",
        ),
        PerkDescriptor::new(
            K::TargetLock,
            "Target Lock",
            "Sustained fire on one target ramps up damage.",
        ),
        PerkDescriptor::new(
            K::DynamicSwayReduction,
            "Dynamic Sway Reduction",
            "Sustained fire increases stability.",
        ),
        PerkDescriptor::new(
            K::FourthTimesTheCharm,
            "Fourth Time's the Charm",
            "Rapid precision hits return rounds to the magazine.",
        ),
        PerkDescriptor::new(
            K::TheRightChoice,
            "The Right Choice",
            "Every seventh shot ricochets toward nearby targets.",
        ),
        PerkDescriptor::new(
            K::KineticTremors,
            "Kinetic Tremors",
            "Sustained hits on a target trigger damaging shockwaves.",
        ),
        PerkDescriptor::new(
            K::Incandescent,
            "Incandescent",
            "Kills scorch nearby targets.",
        ),
        PerkDescriptor::new(
            K::Desperado,
            "Desperado",
            "Reloading soon after a precision kill increases rate of fire.",
        ),
        PerkDescriptor::new(
            K::PrecisionInstrument,
            "Precision Instrument",
            "Consecutive precision hits stack precision damage.",
        ),
        PerkDescriptor::new(
            K::FocusedFury,
            "Focused Fury",
            "Landing half a magazine of precision hits boosts damage.",
        ),
        PerkDescriptor::new(
            K::OneForAll,
            "One for All",
            "Hitting three separate targets boosts damage.",
        ),
        PerkDescriptor::new(
            K::NanotechTracerRounds,
            "Nanotech Tracer Rounds",
            "Hits tag targets with nanites that swarm when the target dies.",
        ),
        PerkDescriptor::new(
            K::DetonatorSlugs,
            "Detonator Slugs",
            "Slugs lodge in targets and detonate in sequence once enough build up.",
        ),
        PerkDescriptor::new(
            K::TrickShot,
            "Trick Shot",
            "Precision kills grant charges that turn hits into ricochet chains.",
        ),
        // Catalysts
        PerkDescriptor::new(K::SolarCatalyst, "Solar Catalyst", "Hits apply scorch."),
        PerkDescriptor::new(
            K::StabilityCatalyst,
            "Stability Catalyst",
            "Increases stability.",
        )
        .with_modifier(|s| s.add_stability(10.0)),
    ]
}
