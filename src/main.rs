use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use trophica_core::{init_logging, AppConfig, Preset};
use trophica_lib::{App, RunOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting population: boom-bust, high-biodiversity, bear-dominance, plant-paradise
    #[arg(short, long, default_value = "boom-bust")]
    preset: Preset,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 500)]
    steps: u32,

    /// Seed of the simulation's random stream (overrides [world] seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Seed for initial positions (defaults to --seed)
    #[arg(long)]
    placement_seed: Option<u64>,

    /// TOML config file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Population table to write
    #[arg(short, long, default_value = "ecosystem_data.csv")]
    output: PathBuf,

    /// Suppress console progress
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let options = RunOptions {
        preset: args.preset,
        steps: args.steps,
        seed: args.seed,
        placement_seed: args.placement_seed,
        output: args.output,
        quiet: args.quiet,
    };

    let mut app = App::new(config, options)?;
    let summary = app.run()?;
    tracing::info!(
        preset = %summary.preset,
        steps = summary.steps,
        survivors = summary.final_population,
        "Run complete"
    );
    Ok(())
}
