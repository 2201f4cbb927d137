use std::fs;

use armory_content::ContentFactory;
use armory_core::{Archetype, CombatConfig, PerkCatalog};

fn perks() -> PerkCatalog {
    PerkCatalog::with_builtin().expect("builtin catalog should build")
}

#[test]
fn bundled_data_loads_and_validates() {
    let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));

    let config = factory.load_config().expect("bundled config should parse");
    assert_eq!(config, CombatConfig::default());

    let weapons = factory
        .load_weapons(&perks())
        .expect("bundled weapons should validate");
    assert_eq!(weapons.len(), 5);
    assert_eq!(
        weapons.require("le_monarque").unwrap().archetype,
        Archetype::Bow
    );
}

#[test]
fn bundled_weapons_roll_reproducibly() {
    let perks = perks();
    let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
    let weapons = factory.load_weapons(&perks).unwrap();
    let rng = armory_core::PcgRng;

    for descriptor in weapons.iter() {
        let a = descriptor.roll(&perks, &rng, 11).unwrap();
        let b = descriptor.roll(&perks, &rng, 11).unwrap();
        assert_eq!(a.to_save(), b.to_save(), "{}", descriptor.key);
    }
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap(), CombatConfig::default());
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "ticks_per_second = 30\n").unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.ticks_per_second, 30);
    assert_eq!(
        config.sweep_interval_ticks,
        CombatConfig::DEFAULT_SWEEP_INTERVAL
    );
}

#[test]
fn malformed_weapon_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("weapons.ron"), "(weapons: [").unwrap();

    let err = ContentFactory::new(dir.path())
        .load_weapons(&perks())
        .unwrap_err();
    assert!(err.to_string().contains("weapon RON"));
}

#[test]
fn misplaced_perk_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("weapons.ron"),
        r#"(weapons: [(
            key: "broken",
            name: "Broken",
            archetype: AutoRifle,
            base: (range: 40.0, stability: 40.0, reload_speed: 40.0, rounds_per_minute: 600.0, magazine_size: 30),
            frame: Some("outlaw"),
        )])"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path())
        .load_weapons(&perks())
        .unwrap_err();
    assert!(err.to_string().contains("broken"));
}

#[test]
fn missing_weapon_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(
        ContentFactory::new(dir.path())
            .load_weapons(&perks())
            .is_err()
    );
}
