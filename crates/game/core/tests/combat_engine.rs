use armory_core::{
    Archetype, ArchetypeDescriptor, ChainLink, CombatConfig, CombatEffect, CombatEngine,
    CombatEnv, CombatState, EntityId, Facing, HitEvent, HitOrigin, PcgRng, PerkCatalog,
    PerkLoadout, ProjectileId, WeaponInstance, WeaponSave, WeaponStats, WorldSnapshot, WorldView,
};
use armory_core::perk::tuning::{
    adagio, alloy_magazine, desperado, detonator_slugs, feeding_frenzy, focused_fury,
    incandescent, outlaw,
};
use armory_core::target::ChainPhase;
use glam::Vec2;

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    catalog: PerkCatalog,
    config: CombatConfig,
    world: WorldSnapshot,
    state: CombatState,
    rng: PcgRng,
}

impl Harness {
    fn new(world: WorldSnapshot) -> Self {
        Self {
            catalog: PerkCatalog::with_builtin().expect("builtin catalog should build"),
            config: CombatConfig::default(),
            world,
            state: CombatState::new(),
            rng: PcgRng,
        }
    }

    fn engine(&mut self) -> CombatEngine<'_> {
        let env = CombatEnv::new(&self.catalog, &self.config, &self.world, &self.rng);
        CombatEngine::new(&mut self.state, env)
    }

    fn weapon(&self, archetype: Archetype, base: WeaponStats, perks: &[&str]) -> WeaponInstance {
        let loadout = PerkLoadout::equip(
            None,
            perks.iter().map(|key| key.to_string()),
            None,
            &self.catalog,
        );
        WeaponInstance::new(archetype, base, loadout, 7, &self.catalog)
    }

    /// One full host tick for a single weapon.
    fn tick(&mut self, weapon: &mut WeaponInstance) -> Vec<CombatEffect> {
        let mut engine = self.engine();
        let mut effects = engine.on_tick(weapon);
        effects.extend(engine.tick_world());
        effects
    }
}

const AUTO: WeaponStats = WeaponStats::new(40.0, 40.0, 40.0, 600.0, 30);
const HAND_CANNON: WeaponStats = WeaponStats::new(50.0, 50.0, 0.0, 140.0, 20);
const PULSE: WeaponStats = WeaponStats::new(40.0, 40.0, 40.0, 540.0, 36);

fn hit(target: u32) -> HitEvent {
    HitEvent::new(EntityId(target), Vec2::ZERO)
}

fn ricochets(effects: &[CombatEffect]) -> Vec<armory_core::Ricochet> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            CombatEffect::Ricochet(ricochet) => Some(*ricochet),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Determinism
// ============================================================================

fn scripted_session() -> (Vec<CombatEffect>, WeaponStats) {
    let world = WorldSnapshot::new()
        .with_target(EntityId(1), Vec2::new(200.0, 0.0))
        .with_target(EntityId(2), Vec2::new(220.0, 40.0));
    let mut h = Harness::new(world);
    let mut weapon = h.weapon(
        Archetype::AutoRifle,
        AUTO,
        &["rampage", "dynamic_sway_reduction", "target_lock"],
    );

    let mut log = Vec::new();
    for tick in 0..240u32 {
        log.extend(h.tick(&mut weapon));
        let mut engine = h.engine();
        if let Some(shot) = engine.try_fire(&mut weapon, Vec2::new(1.0, 0.1), Facing::Right) {
            log.push(CombatEffect::Shot(shot));
            let target = 1 + tick % 2;
            let event = if tick % 5 == 0 {
                hit(target).precision().kill()
            } else {
                hit(target)
            };
            log.extend(engine.on_hit(&mut weapon, &event));
        }
        if weapon.ammo() == 0 {
            engine.request_reload(&mut weapon);
        }
    }
    let stats = h.engine().resolve(&weapon);
    (log, stats)
}

#[test]
fn identical_sessions_produce_identical_results() {
    let (first_log, first_stats) = scripted_session();
    let (second_log, second_stats) = scripted_session();
    assert!(!first_log.is_empty());
    assert_eq!(first_log, second_log);
    assert_eq!(first_stats, second_stats);
}

// ============================================================================
// Reload
// ============================================================================

#[test]
fn three_second_reload_takes_exactly_180_ticks() {
    let mut h = Harness::new(WorldSnapshot::new());
    let descriptor = ArchetypeDescriptor {
        key: "hc".into(),
        name: "Hand Cannon".into(),
        archetype: Archetype::HandCannon,
        base: HAND_CANNON,
        frame: None,
        perk_pools: Vec::new(),
        catalyst: None,
    };
    let save = WeaponSave {
        ammo: 0,
        ..WeaponSave::default()
    };
    let mut weapon = WeaponInstance::restore(&descriptor, &save, &h.catalog);

    assert!((h.engine().reload_seconds(&weapon) - 3.0).abs() < 1e-5);
    assert!(h.engine().request_reload(&mut weapon));

    for _ in 0..179 {
        h.tick(&mut weapon);
    }
    assert!(weapon.is_reloading());
    assert_eq!(weapon.ammo(), 0);

    h.tick(&mut weapon);
    assert!(!weapon.is_reloading());
    assert_eq!(weapon.ammo(), 20);
}

#[test]
fn reload_is_refused_when_full_or_running() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &[]);
    assert!(!h.engine().request_reload(&mut weapon));

    h.engine()
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("loaded weapon fires");
    assert!(h.engine().request_reload(&mut weapon));
    assert!(!h.engine().request_reload(&mut weapon));
    assert!(h.engine().try_fire(&mut weapon, Vec2::X, Facing::Right).is_none());
}

#[test]
fn outlaw_shortens_reload_after_precision_kill() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["outlaw"]);
    let before = h.engine().reload_seconds(&weapon);
    h.engine().on_hit(&mut weapon, &hit(1).precision().kill());
    let after = h.engine().reload_seconds(&weapon);
    assert!(after < before);
}

#[test]
fn kill_clip_arms_after_reload_following_a_kill() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["kill_clip"]);
    h.engine()
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    h.engine().on_hit(&mut weapon, &hit(1).kill());
    assert!(h.engine().request_reload(&mut weapon));
    while weapon.is_reloading() {
        h.tick(&mut weapon);
    }
    let modifiers = h.engine().damage_modifiers(&weapon);
    assert!((modifiers.body - 1.25).abs() < 1e-5);
}

#[test]
fn desperado_waits_for_the_reload_to_finish() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["desperado"]);
    h.engine()
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    h.engine().on_hit(&mut weapon, &hit(1).precision().kill());
    assert!(weapon.timers().desperado_window.is_active());
    assert_eq!(h.engine().resolve(&weapon).rounds_per_minute, 140.0);

    assert!(h.engine().request_reload(&mut weapon));
    for _ in 0..179 {
        h.tick(&mut weapon);
    }
    assert!(weapon.is_reloading());
    assert_eq!(h.engine().resolve(&weapon).rounds_per_minute, 140.0);

    h.tick(&mut weapon);
    assert!(!weapon.is_reloading());
    assert!(weapon.timers().desperado.is_active());
    let rpm = h.engine().resolve(&weapon).rounds_per_minute;
    assert!((rpm - 140.0 * desperado::RPM_SCALE).abs() < 1e-3);
    assert!((rpm - 182.0).abs() < 1e-3);
}

#[test]
fn alloy_magazine_speeds_up_empty_reloads_only() {
    let mut h = Harness::new(WorldSnapshot::new());
    let descriptor = ArchetypeDescriptor {
        key: "hc".into(),
        name: "Hand Cannon".into(),
        archetype: Archetype::HandCannon,
        base: HAND_CANNON,
        frame: None,
        perk_pools: Vec::new(),
        catalyst: None,
    };
    let save = |ammo| WeaponSave {
        perks: vec!["alloy_magazine".into()],
        ammo,
        ..WeaponSave::default()
    };
    let partial = WeaponInstance::restore(&descriptor, &save(10), &h.catalog);
    let mut empty = WeaponInstance::restore(&descriptor, &save(0), &h.catalog);

    assert!((h.engine().reload_seconds(&partial) - 3.0).abs() < 1e-5);
    let scaled = 3.0 * alloy_magazine::EMPTY_RELOAD_TIME_SCALE;
    assert!((h.engine().reload_seconds(&empty) - scaled).abs() < 1e-5);

    // 2.55 s at 60 ticks per second.
    assert!(h.engine().request_reload(&mut empty));
    for _ in 0..152 {
        h.tick(&mut empty);
    }
    assert!(empty.is_reloading());
    h.tick(&mut empty);
    assert!(!empty.is_reloading());
    assert_eq!(empty.ammo(), 20);
}

#[test]
fn feeding_frenzy_kills_stack_reload_speed() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["feeding_frenzy"]);
    h.engine()
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    for target in 1..=2 {
        h.engine().on_hit(&mut weapon, &hit(target).kill());
    }
    assert_eq!(weapon.timers().feeding_frenzy.stacks(), 2);

    let stats = h.engine().resolve(&weapon);
    assert_eq!(stats.reload_speed, feeding_frenzy::RELOAD_SPEED[2]);
    let expected = Archetype::HandCannon.profile().base_reload_seconds(&stats)
        * feeding_frenzy::RELOAD_TIME_SCALE[2];
    assert!((h.engine().reload_seconds(&weapon) - expected).abs() < 1e-5);

    for _ in 0..feeding_frenzy::DURATION_TICKS {
        h.tick(&mut weapon);
    }
    assert_eq!(weapon.timers().feeding_frenzy.stacks(), 0);
    assert_eq!(h.engine().resolve(&weapon).reload_speed, 0.0);
}

#[test]
fn shrinking_magazine_clamps_ammo() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &[]);
    assert_eq!(weapon.ammo(), 30);
    weapon.set_stat_override(Some(WeaponStats { magazine_size: 12, ..AUTO }));
    h.tick(&mut weapon);
    assert_eq!(weapon.ammo(), 12);
}

// ============================================================================
// Firing
// ============================================================================

#[test]
fn zero_rpm_blocks_firing() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &[]);
    weapon.set_stat_override(Some(WeaponStats {
        rounds_per_minute: 0.0,
        ..AUTO
    }));
    assert!(!h.engine().can_fire(&weapon));
    assert!(h.engine().try_fire(&mut weapon, Vec2::X, Facing::Right).is_none());
    assert_eq!(weapon.ammo(), 30);
}

#[test]
fn fire_rate_follows_rounds_per_minute() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &[]);
    let mut shots = 0;
    for _ in 0..60 {
        h.tick(&mut weapon);
        if h.engine().try_fire(&mut weapon, Vec2::X, Facing::Right).is_some() {
            shots += 1;
        }
    }
    // 600 rpm at 60 ticks per second is one round every 6 ticks.
    assert_eq!(shots, 10);
}

#[test]
fn pulse_burst_spaces_follow_ups_and_spends_ammo() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::PulseRifle, PULSE, &[]);
    let first = h
        .engine()
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    assert_eq!(first.burst_index, 0);
    assert!(weapon.is_bursting());

    let mut follow_ups = Vec::new();
    for tick in 1..=8 {
        for effect in h.tick(&mut weapon) {
            if let CombatEffect::Shot(shot) = effect {
                follow_ups.push((tick, shot.burst_index));
            }
        }
    }
    assert_eq!(follow_ups, [(4, 1), (8, 2)]);
    assert_eq!(weapon.ammo(), 33);
    assert!(!weapon.is_bursting());
    assert!(h.engine().try_fire(&mut weapon, Vec2::X, Facing::Right).is_none());
}

#[test]
fn aggressive_frame_lengthens_bursts_only_on_burst_archetypes() {
    let h = Harness::new(WorldSnapshot::new());
    let loadout = PerkLoadout::equip(Some("aggressive_frame".into()), [], None, &h.catalog);
    assert_eq!(loadout.burst_count(Archetype::PulseRifle.profile()), 4);
    assert_eq!(loadout.burst_count(Archetype::HandCannon.profile()), 1);
}

#[test]
fn first_shot_after_idle_is_on_target() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &[]);
    for _ in 0..5 {
        for _ in 0..6 {
            h.tick(&mut weapon);
        }
        h.engine().try_fire(&mut weapon, Vec2::X, Facing::Right);
    }
    for _ in 0..60 {
        h.tick(&mut weapon);
    }
    let shot = h
        .engine()
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    assert_eq!(shot.direction, Vec2::X);
}

// ============================================================================
// Stacks and windows
// ============================================================================

#[test]
fn rampage_caps_at_three_stacks() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["rampage"]);
    for target in 1..=5 {
        h.engine().on_hit(&mut weapon, &hit(target).kill());
    }
    assert_eq!(weapon.timers().rampage.stacks(), 3);
    let modifiers = h.engine().damage_modifiers(&weapon);
    assert!((modifiers.body - 1.33).abs() < 1e-5);
}

#[test]
fn target_lock_resets_on_thirteenth_idle_tick() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["target_lock"]);
    for _ in 0..4 {
        h.engine().on_hit(&mut weapon, &hit(1));
    }
    let ramped = h.engine().damage_modifiers(&weapon).body;
    assert!(ramped > 1.0);

    for _ in 0..12 {
        h.tick(&mut weapon);
    }
    assert_eq!(h.engine().damage_modifiers(&weapon).body, ramped);

    h.tick(&mut weapon);
    assert_eq!(h.engine().damage_modifiers(&weapon).body, 1.0);
}

#[test]
fn onslaught_raises_rate_of_fire() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["onslaught"]);
    let before = h.engine().resolve(&weapon).rounds_per_minute;
    h.engine().on_hit(&mut weapon, &hit(1).kill());
    let after = h.engine().resolve(&weapon).rounds_per_minute;
    assert!((after - before * 1.15).abs() < 1e-3);
}

#[test]
fn fourth_precision_hit_refunds_rounds() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["fourth_times_the_charm"]);
    for _ in 0..4 {
        h.engine().try_fire(&mut weapon, Vec2::X, Facing::Right);
        for _ in 0..26 {
            h.tick(&mut weapon);
        }
    }
    assert_eq!(weapon.ammo(), 16);

    let mut refunded = 0;
    for _ in 0..4 {
        for effect in h.engine().on_hit(&mut weapon, &hit(1).precision()) {
            if let CombatEffect::AmmoRefunded { rounds } = effect {
                refunded += rounds;
            }
        }
    }
    assert_eq!(refunded, 2);
    assert_eq!(weapon.ammo(), 18);
}

#[test]
fn adagio_trades_fire_rate_for_range_and_damage() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["adagio"]);
    h.engine().on_hit(&mut weapon, &hit(1).kill());

    let stats = h.engine().resolve(&weapon);
    assert!((stats.rounds_per_minute - 140.0 * adagio::RPM_SCALE).abs() < 1e-3);
    assert_eq!(stats.range, 50.0 + adagio::RANGE);
    let modifiers = h.engine().damage_modifiers(&weapon);
    assert!((modifiers.body - adagio::DAMAGE).abs() < 1e-5);
    assert!((modifiers.precision - adagio::DAMAGE).abs() < 1e-5);

    for _ in 0..adagio::DURATION_TICKS {
        h.tick(&mut weapon);
    }
    assert_eq!(h.engine().resolve(&weapon), HAND_CANNON);
    assert_eq!(h.engine().damage_modifiers(&weapon).body, 1.0);
}

#[test]
fn focused_fury_needs_half_a_magazine_of_precision_hits() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["focused_fury"]);
    for _ in 0..9 {
        h.engine().on_hit(&mut weapon, &hit(1).precision());
    }
    h.engine().on_hit(&mut weapon, &hit(1));
    assert_eq!(h.engine().damage_modifiers(&weapon).body, 1.0);

    h.engine().on_hit(&mut weapon, &hit(1).precision());
    assert!(weapon.timers().focused_fury.is_active());
    let modifiers = h.engine().damage_modifiers(&weapon);
    assert!((modifiers.body - focused_fury::DAMAGE).abs() < 1e-5);
}

#[test]
fn buff_expiring_this_tick_is_gone_until_an_event_rearms_it() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["outlaw"]);
    h.engine().on_hit(&mut weapon, &hit(1).precision().kill());
    for _ in 0..outlaw::DURATION_TICKS - 1 {
        h.tick(&mut weapon);
    }
    assert_eq!(weapon.timers().outlaw.remaining(), 1);
    assert_eq!(h.engine().resolve(&weapon).reload_speed, outlaw::RELOAD_SPEED);

    // Decrement runs before any event of the tick.
    h.tick(&mut weapon);
    assert!(!weapon.timers().outlaw.is_active());
    assert_eq!(h.engine().resolve(&weapon).reload_speed, 0.0);

    h.engine().on_hit(&mut weapon, &hit(2).precision().kill());
    assert_eq!(weapon.timers().outlaw.remaining(), outlaw::DURATION_TICKS);
    assert_eq!(h.engine().resolve(&weapon).reload_speed, outlaw::RELOAD_SPEED);
}

#[test]
fn rearming_a_running_buff_restores_full_duration() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["outlaw"]);
    h.engine().on_hit(&mut weapon, &hit(1).precision().kill());
    for _ in 0..outlaw::DURATION_TICKS - 1 {
        h.tick(&mut weapon);
    }
    h.engine().on_hit(&mut weapon, &hit(2).precision().kill());
    h.tick(&mut weapon);
    assert_eq!(weapon.timers().outlaw.remaining(), outlaw::DURATION_TICKS - 1);
}

#[test]
fn hud_lists_active_buffs() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["outlaw", "rampage"]);
    assert!(h.engine().buff_display(&weapon).is_empty());
    h.engine().on_hit(&mut weapon, &hit(1).precision().kill());
    let entries = h.engine().buff_display(&weapon);
    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Outlaw", "Rampage"]);
}

// ============================================================================
// Target status
// ============================================================================

#[test]
fn solar_catalyst_ignites_and_spreads() {
    let world = WorldSnapshot::new()
        .with_target(EntityId(1), Vec2::ZERO)
        .with_target(EntityId(2), Vec2::new(60.0, 0.0));
    let mut h = Harness::new(world);
    let loadout = PerkLoadout::equip(None, [], Some("solar_catalyst".into()), &h.catalog);
    let mut weapon = WeaponInstance::new(Archetype::AutoRifle, AUTO, loadout, 1, &h.catalog);

    let mut ignitions = Vec::new();
    for _ in 0..6 {
        for effect in h.engine().on_hit(&mut weapon, &hit(1).precision()) {
            if let CombatEffect::Ignite { target, .. } = effect {
                ignitions.push(target);
            }
        }
    }
    assert_eq!(ignitions, [EntityId(1)]);

    let status = |id| h.state.targets.get(EntityId(id)).map(|s| s.scorch.stacks());
    assert_eq!(status(1), Some(0));
    assert_eq!(status(2), Some(40));
}

#[test]
fn nanites_swarm_when_the_target_dies() {
    let mut h = Harness::new(WorldSnapshot::new().with_target(EntityId(1), Vec2::ZERO));
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["nanotech_tracer_rounds"]);
    for _ in 0..3 {
        h.engine().on_hit(&mut weapon, &hit(1));
    }
    let effects = h.engine().on_hit(&mut weapon, &hit(1).kill());
    assert!(effects.contains(&CombatEffect::NaniteSwarm {
        source: EntityId(1),
        position: Vec2::ZERO,
        nanites: 4,
    }));
}

#[test]
fn detonator_slugs_explode_in_sequence() {
    let mut world = WorldSnapshot::new().with_target(EntityId(1), Vec2::ZERO);
    for id in 0..5 {
        world.insert_projectile(ProjectileId(id), Vec2::new(id as f32, 0.0));
    }
    let mut h = Harness::new(world);
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["detonator_slugs"]);
    for id in 0..5 {
        h.engine()
            .on_hit(&mut weapon, &hit(1).with_projectile(ProjectileId(id)));
    }

    let mut detonations = Vec::new();
    for tick in 1..=60u32 {
        for effect in h.engine().tick_world() {
            if let CombatEffect::Detonation { slug, .. } = effect {
                detonations.push((tick, slug));
            }
        }
    }
    let expected: Vec<(u32, ProjectileId)> =
        (0..5).map(|i| (10 * (i + 1), ProjectileId(i))).collect();
    assert_eq!(detonations, expected);
}

#[test]
fn incandescent_kill_scorches_neighbours_in_radius() {
    let world = WorldSnapshot::new()
        .with_target(EntityId(1), Vec2::ZERO)
        .with_target(EntityId(2), Vec2::new(150.0, 0.0))
        .with_target(EntityId(3), Vec2::new(incandescent::RADIUS + 50.0, 0.0));
    let mut h = Harness::new(world);
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["incandescent"]);

    h.engine().on_hit(&mut weapon, &hit(1));
    assert!(h.state.targets.is_empty());

    h.engine().on_hit(&mut weapon, &hit(1).kill());
    let stacks = |id| h.state.targets.get(EntityId(id)).map(|s| s.scorch.stacks());
    assert_eq!(stacks(1), None);
    assert_eq!(stacks(2), Some(incandescent::SCORCH));
    assert_eq!(stacks(3), None);
}

#[test]
fn detonator_chain_cools_down_before_accepting_new_slugs() {
    let mut world = WorldSnapshot::new().with_target(EntityId(1), Vec2::ZERO);
    for id in 0..10 {
        world.insert_projectile(ProjectileId(id), Vec2::ZERO);
    }
    let mut h = Harness::new(world);
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["detonator_slugs"]);
    let lodge = |h: &mut Harness, weapon: &mut WeaponInstance, ids: std::ops::Range<u32>| {
        for id in ids {
            h.engine()
                .on_hit(weapon, &hit(1).with_projectile(ProjectileId(id)));
        }
    };
    let phase = |h: &Harness| {
        h.state
            .targets
            .get(EntityId(1))
            .map_or(ChainPhase::Inactive, |s| s.payload.phase())
    };

    lodge(&mut h, &mut weapon, 0..5);
    let chain_ticks =
        detonator_slugs::EXPLOSION_DELAY_TICKS * detonator_slugs::SLUGS_TO_EXPLODE as u32;
    for _ in 0..chain_ticks {
        h.engine().tick_world();
    }
    assert_eq!(
        phase(&h),
        ChainPhase::Cooldown {
            remaining: detonator_slugs::EXPLOSION_COOLDOWN_TICKS
        }
    );

    // Slugs landing during cooldown are ignored.
    lodge(&mut h, &mut weapon, 5..6);
    assert!(h.state.targets.get(EntityId(1)).is_some_and(|s| s.payload.pending().is_empty()));

    for _ in 0..detonator_slugs::EXPLOSION_COOLDOWN_TICKS - 1 {
        assert!(h.engine().tick_world().is_empty());
    }
    assert_eq!(phase(&h), ChainPhase::Cooldown { remaining: 1 });
    h.engine().tick_world();
    assert_eq!(phase(&h), ChainPhase::Inactive);

    lodge(&mut h, &mut weapon, 5..10);
    assert!(matches!(phase(&h), ChainPhase::Active { next: 0, .. }));
    let mut detonated = Vec::new();
    for _ in 0..chain_ticks {
        for effect in h.engine().tick_world() {
            if let CombatEffect::Detonation { slug, .. } = effect {
                detonated.push(slug);
            }
        }
    }
    assert_eq!(detonated, (5..10).map(ProjectileId).collect::<Vec<_>>());
}

#[test]
fn cancelling_a_target_stops_its_detonations() {
    let mut world = WorldSnapshot::new().with_target(EntityId(1), Vec2::ZERO);
    for id in 0..5 {
        world.insert_projectile(ProjectileId(id), Vec2::ZERO);
    }
    let mut h = Harness::new(world);
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["detonator_slugs"]);
    for id in 0..5 {
        h.engine()
            .on_hit(&mut weapon, &hit(1).with_projectile(ProjectileId(id)));
    }
    h.engine().cancel_target(EntityId(1));
    for _ in 0..60 {
        assert!(h.engine().tick_world().is_empty());
    }
}

#[test]
fn kinetic_tremors_pulse_after_enough_hits() {
    let mut h = Harness::new(WorldSnapshot::new().with_target(EntityId(1), Vec2::ZERO));
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["kinetic_tremors"]);
    for _ in 0..4 {
        h.engine().on_hit(&mut weapon, &hit(1));
    }
    let mut pulses = 0;
    for _ in 0..120 {
        pulses += h
            .engine()
            .tick_world()
            .iter()
            .filter(|effect| matches!(effect, CombatEffect::Shockwave { .. }))
            .count();
    }
    assert_eq!(pulses, 3);
}

#[test]
fn sweep_forgets_despawned_targets() {
    let mut h = Harness::new(WorldSnapshot::new().with_target(EntityId(1), Vec2::ZERO));
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["nanotech_tracer_rounds"]);
    h.engine().on_hit(&mut weapon, &hit(1));
    assert_eq!(h.state.targets.len(), 1);

    h.world.remove_target(EntityId(1));
    for _ in 0..h.config.sweep_interval_ticks {
        h.engine().tick_world();
    }
    assert!(h.state.targets.is_empty());
}

// ============================================================================
// Ricochets
// ============================================================================

#[test]
fn right_choice_round_splits_toward_two_targets() {
    let world = WorldSnapshot::new()
        .with_target(EntityId(1), Vec2::ZERO)
        .with_target(EntityId(2), Vec2::new(50.0, 0.0))
        .with_target(EntityId(3), Vec2::new(0.0, 80.0))
        .with_target(EntityId(4), Vec2::new(0.0, 300.0));
    let mut h = Harness::new(world);
    let mut weapon = h.weapon(Archetype::HandCannon, HAND_CANNON, &["the_right_choice"]);

    for _ in 0..6 {
        assert!(!h.engine().on_shot_fired(&mut weapon));
    }
    let shot = h
        .engine()
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    assert!(shot.ricochet);

    let effects = h
        .engine()
        .on_hit(&mut weapon, &hit(1).with_origin(HitOrigin::RightChoice));
    let targets: Vec<EntityId> = ricochets(&effects).iter().map(|r| r.target).collect();
    assert_eq!(targets, [EntityId(2), EntityId(3)]);
    assert!(ricochets(&effects).iter().all(|r| r.chain.is_none()));
}

#[test]
fn trick_shot_chain_stops_when_every_target_is_capped() {
    let world = WorldSnapshot::new()
        .with_target(EntityId(2), Vec2::ZERO)
        .with_target(EntityId(3), Vec2::new(100.0, 0.0));
    let mut h = Harness::new(world);
    let mut weapon = h.weapon(Archetype::ScoutRifle, AUTO, &["trick_shot"]);

    h.engine()
        .on_hit(&mut weapon, &hit(1).precision().kill());
    let effects = h.engine().on_hit(&mut weapon, &hit(2));
    let mut next = ricochets(&effects);
    assert_eq!(next.len(), 1);

    let mut path = Vec::new();
    while let Some(ricochet) = next.pop() {
        path.push(ricochet.target);
        let chain = ricochet.chain.expect("trick-shot ricochets carry a chain");
        let position = h
            .world
            .target_position(ricochet.target)
            .expect("target alive");
        let event = HitEvent::new(ricochet.target, position).with_origin(HitOrigin::Chain(
            ChainLink {
                chain,
                remaining_bounces: ricochet.remaining_bounces,
            },
        ));
        next = ricochets(&h.engine().on_hit(&mut weapon, &event));
    }

    assert_eq!(path, [EntityId(3), EntityId(2), EntityId(3)]);
    assert!(h.state.ledger.is_empty());
}

#[test]
fn unknown_perks_are_skipped() {
    let mut h = Harness::new(WorldSnapshot::new());
    let mut weapon = h.weapon(Archetype::AutoRifle, AUTO, &["not_a_perk", "rampage"]);
    assert_eq!(h.engine().resolve(&weapon), AUTO);
    h.engine().on_hit(&mut weapon, &hit(1).kill());
    assert_eq!(weapon.timers().rampage.stacks(), 1);
}
