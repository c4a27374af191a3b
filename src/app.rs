//! The simulation runner: seed a world from a preset, tick it, export results.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use trophica_core::{AppConfig, Preset, World};
use trophica_io::summary::{render_table, summary_path};
use trophica_io::{write_table, RunSummary};

const PRINT_INTERVAL: u32 = 50;
const BAR_LENGTH: usize = 50;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub preset: Preset,
    pub steps: u32,
    /// Seed of the simulation's random stream; the configured seed when unset.
    pub seed: Option<u64>,
    /// Seed for initial positions; defaults to the simulation seed.
    pub placement_seed: Option<u64>,
    pub output: PathBuf,
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            preset: Preset::BoomBust,
            steps: 500,
            seed: None,
            placement_seed: None,
            output: PathBuf::from("ecosystem_data.csv"),
            quiet: false,
        }
    }
}

pub struct App {
    pub world: World,
    pub options: RunOptions,
}

impl App {
    /// Builds the world and seeds it with the preset population.
    pub fn new(mut config: AppConfig, options: RunOptions) -> Result<Self> {
        if let Some(seed) = options.seed {
            config.world.seed = seed;
        }
        let seed = config.world.seed;
        let mut world = World::new(config)?;
        let mut placement = ChaCha8Rng::seed_from_u64(options.placement_seed.unwrap_or(seed));
        options.preset.populate(&mut world, &mut placement);
        Ok(Self { world, options })
    }

    /// Runs every step, then writes the population table and the JSON summary.
    pub fn run(&mut self) -> Result<RunSummary> {
        let steps = self.options.steps;
        self.say(&format!(
            "=================================================\n  Ecosystem Simulation - Preset: {}\n=================================================\n",
            self.options.preset
        ));
        self.say(&format!("Total organisms: {}", self.world.organism_count()));
        self.say("Starting simulation...\n");

        for step in 0..steps {
            self.world.step();
            if step % PRINT_INTERVAL == 0 || step + 1 == steps {
                self.say(&progress_bar(step + 1, steps));
                self.say(&population_summary(&self.world));
            }
        }
        self.world.metrics().log_summary();
        self.say("\nSimulation complete.");

        let table = self.world.recorder().to_table();
        write_table(&self.options.output, &table)
            .with_context(|| format!("exporting {}", self.options.output.display()))?;
        self.say(&format!("\nData exported to: {}", self.options.output.display()));

        let stats = self.world.recorder().species_stats();
        self.say("\n=== Final Analysis ===");
        self.say(render_table(&stats).trim_end());

        let summary = RunSummary::new(
            self.options.preset.name(),
            steps,
            self.world.config.world.seed,
            self.world.organism_count(),
            stats,
        );
        summary.write_json(summary_path(&self.options.output))?;
        Ok(summary)
    }

    fn say(&self, text: &str) {
        if !self.options.quiet {
            println!("{text}");
        }
    }
}

pub fn progress_bar(current: u32, total: u32) -> String {
    let fraction = if total == 0 {
        1.0
    } else {
        f64::from(current) / f64::from(total)
    };
    let filled = ((fraction * BAR_LENGTH as f64) as usize).min(BAR_LENGTH);
    format!(
        "Progress: [{}{}] {}/{} ({:.1}%)",
        "=".repeat(filled),
        " ".repeat(BAR_LENGTH - filled),
        current,
        total,
        fraction * 100.0
    )
}

/// Current count per recorded species.
pub fn population_summary(world: &World) -> String {
    let mut out = format!("\n=== Population Summary (Step {}) ===", world.tick);
    for (species, count) in world.recorder().summary() {
        out.push_str(&format!("\n{:<20}: {:>4}", species.name(), count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        let bar = progress_bar(250, 500);
        assert!(bar.starts_with("Progress: ["));
        assert!(bar.ends_with("] 250/500 (50.0%)"));
        assert_eq!(bar.matches('=').count(), 25);
    }

    #[test]
    fn test_new_seeds_preset_population() {
        let app = App::new(
            AppConfig::default(),
            RunOptions {
                preset: Preset::PlantParadise,
                quiet: true,
                ..RunOptions::default()
            },
        )
        .unwrap();
        assert_eq!(app.world.organism_count(), Preset::PlantParadise.population());
        assert_eq!(app.world.config.world.seed, 42);
    }

    #[test]
    fn test_configured_seed_survives_without_flag() {
        let mut config = AppConfig::default();
        config.world.seed = 7;
        let quiet = RunOptions {
            quiet: true,
            ..RunOptions::default()
        };

        let from_config = App::new(config.clone(), quiet.clone()).unwrap();
        assert_eq!(from_config.world.config.world.seed, 7);

        let overridden = App::new(
            config.clone(),
            RunOptions {
                seed: Some(9),
                ..quiet.clone()
            },
        )
        .unwrap();
        assert_eq!(overridden.world.config.world.seed, 9);

        // Placement follows the effective seed when not given its own.
        let explicit = App::new(
            AppConfig::default(),
            RunOptions {
                seed: Some(7),
                ..quiet
            },
        )
        .unwrap();
        let positions = |app: &App| -> Vec<_> {
            app.world.organisms().iter().map(|o| o.position).collect()
        };
        assert_eq!(positions(&from_config), positions(&explicit));
    }

    #[test]
    fn test_run_writes_table_and_summary() {
        let output = std::env::temp_dir().join(format!("trophica_app_{}.csv", std::process::id()));
        let mut app = App::new(
            AppConfig::default(),
            RunOptions {
                preset: Preset::PlantParadise,
                steps: 5,
                output: output.clone(),
                quiet: true,
                ..RunOptions::default()
            },
        )
        .unwrap();
        let summary = app.run().unwrap();
        let json = summary_path(&output);
        assert!(output.exists());
        assert!(json.exists());
        assert_eq!(summary.steps, 5);
        let _ = std::fs::remove_file(&output);
        let _ = std::fs::remove_file(&json);
    }
}
