//! Headless monster arena
//!
//! Loads a scenario, lets every monster fight its neighbours round by
//! round and prints what happened.

mod arena;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use dc_core::world::CombatOptions;

use crate::arena::{Arena, RunEnd};
use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(author, version, about = "Monster-versus-monster melee arena", long_about = None)]
struct Args {
    /// RNG seed (random if not given)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of rounds
    #[arg(short, long, default_value_t = 20)]
    rounds: u32,

    /// Options file (OPTIONS=... lines)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Scenario JSON file (built-in hydra pit if not given)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Log swing-level detail to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_options(path: Option<&PathBuf>) -> Result<CombatOptions> {
    let mut options = match path {
        Some(path) => CombatOptions::load_from_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => CombatOptions::default(),
    };
    if !options.arena {
        if path.is_some() {
            warn!("options file has arena off; the arena always runs with it on");
        }
        options.arena = true;
    }
    Ok(options)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let options = load_options(args.options.as_ref())?;
    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::builtin().context("parsing built-in scenario")?,
    };
    let seed = args.seed.unwrap_or_else(|| dc_core::GameRng::from_entropy().seed());

    let world = scenario
        .build_world(seed, options)
        .context("building the arena")?;
    if !scenario.name.is_empty() {
        println!("== {} (seed {seed}) ==", scenario.name);
    }

    let mut arena = Arena::new(world);
    let summary = arena.run(args.rounds, |round, messages| {
        if messages.is_empty() {
            return;
        }
        println!("-- round {round} --");
        for msg in messages {
            println!("{msg}");
        }
    });

    match summary.end {
        RunEnd::Stalemate => println!("\nNo more fights after {} rounds.", summary.rounds),
        RunEnd::RoundLimit => println!("\nStopped after {} rounds.", summary.rounds),
    }
    println!(
        "{} swings, {} hits, {} kills, {} damage dealt",
        summary.stats.swings, summary.stats.hits, summary.stats.kills, summary.stats.damage
    );

    println!("Survivors:");
    for mon in arena.world.monsters.iter().filter(|m| m.alive) {
        println!(
            "  {:<12} {:>3}/{:<3} {}",
            mon.name, mon.hp, mon.hp_max, mon.attitude
        );
    }
    Ok(())
}
