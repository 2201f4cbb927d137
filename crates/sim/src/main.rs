//! Headless combat simulation.
//!
//! Loads weapon content, rolls one weapon and runs a scripted engagement
//! through `armory-core` for a fixed number of ticks. Progress is logged to
//! stderr; a JSON summary is printed to stdout.
//!
//! ```bash
//! SIM_WEAPON=bad_juju SIM_SEED=7 SIM_TICKS=1200 cargo run -p armory-sim
//! ```
mod arena;
mod config;
mod logging;
mod sim;

use anyhow::{Context, Result};
use armory_content::ContentFactory;
use armory_core::PerkCatalog;

use crate::config::SimConfig;
use crate::sim::Simulation;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging()?;

    let sim_config = SimConfig::from_env();
    tracing::info!("Starting armory simulation");
    tracing::info!("Data directory: {}", sim_config.data_dir.display());

    let factory = ContentFactory::new(&sim_config.data_dir);
    let config = factory.load_config()?;
    let perks = PerkCatalog::with_builtin().context("Failed to build perk catalog")?;
    let weapons = factory.load_weapons(&perks)?;

    let mut sim = Simulation::new(perks, config, &weapons, &sim_config.weapon, sim_config.seed)?;
    sim.run(sim_config.ticks);

    let report = &sim.arena().report;
    tracing::info!(
        shots = report.shots,
        hits = report.hits,
        kills = report.kills,
        reloads = report.reloads,
        "Simulation finished"
    );

    let weapon = sim.weapon();
    let digest = weapon
        .to_save()
        .digest()
        .context("Failed to encode weapon state")?;

    let summary = serde_json::json!({
        "weapon": sim_config.weapon,
        "seed": sim_config.seed,
        "ticks": sim_config.ticks,
        "perks": weapon.loadout().keys().collect::<Vec<_>>(),
        "ammo": weapon.ammo(),
        "buffs": sim.buff_display(),
        "report": report,
        "save_digest": hex::encode(digest),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
