#![cfg(feature = "serde")]

use armory_core::{
    Archetype, ArchetypeDescriptor, CombatConfig, CombatEngine, CombatEnv, CombatState, Facing,
    PcgRng, PerkCatalog, WeaponInstance, WeaponSave, WeaponStats, WorldSnapshot,
};
use glam::Vec2;

fn descriptor() -> ArchetypeDescriptor {
    ArchetypeDescriptor {
        key: "scout".into(),
        name: "Scout".into(),
        archetype: Archetype::ScoutRifle,
        base: WeaponStats::new(60.0, 50.0, 50.0, 260.0, 15),
        frame: Some("precision_frame".into()),
        perk_pools: vec![vec!["outlaw".into()], vec!["rampage".into()]],
        catalyst: None,
    }
}

#[test]
fn restore_resumes_an_interrupted_reload() {
    let catalog = PerkCatalog::with_builtin().expect("builtin catalog");
    let config = CombatConfig::default();
    let world = WorldSnapshot::new();
    let mut state = CombatState::new();
    let env = CombatEnv::new(&catalog, &config, &world, &PcgRng);
    let mut engine = CombatEngine::new(&mut state, env);

    let mut weapon = descriptor().roll(&catalog, &PcgRng, 11).expect("roll");
    engine
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    assert!(engine.request_reload(&mut weapon));
    for _ in 0..10 {
        engine.on_tick(&mut weapon);
    }

    let save = weapon.to_save();
    let bytes = bincode::serialize(&save).expect("encode");
    let decoded: WeaponSave = bincode::deserialize(&bytes).expect("decode");
    assert_eq!(decoded, save);

    let mut restored = WeaponInstance::restore(&descriptor(), &decoded, &catalog);
    assert_eq!(restored.loadout().slots(), weapon.loadout().slots());
    assert_eq!(restored.loadout().frame(), Some("precision_frame"));
    assert_eq!(restored.ammo(), 14);

    let remaining = decoded.reload_remaining;
    for _ in 0..remaining {
        engine.on_tick(&mut restored);
    }
    assert!(!restored.is_reloading());
    assert_eq!(restored.ammo(), 15);
}

#[test]
fn digest_tracks_save_contents() {
    let save = WeaponSave {
        perks: vec!["outlaw".into()],
        ammo: 7,
        ..WeaponSave::default()
    };
    let same = save.clone();
    let other = WeaponSave { ammo: 8, ..save.clone() };

    let digest = save.digest().expect("digest");
    assert_eq!(digest, same.digest().expect("digest"));
    assert_ne!(digest, other.digest().expect("digest"));
    assert_eq!(hex::encode(digest).len(), 64);
}

#[test]
fn replicated_instance_resolves_identically() {
    let catalog = PerkCatalog::with_builtin().expect("builtin catalog");
    let config = CombatConfig::default();
    let world =
        WorldSnapshot::new().with_target(armory_core::EntityId(1), Vec2::new(200.0, 0.0));
    let mut state = CombatState::new();
    let env = CombatEnv::new(&catalog, &config, &world, &PcgRng);
    let mut engine = CombatEngine::new(&mut state, env);

    let mut weapon = descriptor().roll(&catalog, &PcgRng, 11).expect("roll");
    engine
        .try_fire(&mut weapon, Vec2::X, Facing::Right)
        .expect("fires");
    let kill = armory_core::HitEvent::new(armory_core::EntityId(1), Vec2::new(200.0, 0.0))
        .precision()
        .kill();
    engine.on_hit(&mut weapon, &kill);
    engine.on_tick(&mut weapon);

    let bytes = bincode::serialize(&weapon).expect("encode");
    let replica: WeaponInstance = bincode::deserialize(&bytes).expect("decode");

    assert_eq!(replica, weapon);
    assert_eq!(engine.resolve(&replica), engine.resolve(&weapon));
    assert_eq!(engine.buff_display(&replica), engine.buff_display(&weapon));
    assert!(
        !engine.buff_display(&replica).is_empty(),
        "outlaw and rampage are active"
    );
}
