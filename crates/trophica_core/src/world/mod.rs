//! The ecosystem: organism registry, tick loop and population queries.

use crate::config::AppConfig;
use crate::error::CoreError;
use crate::history::StatsRecorder;
use crate::metrics::Metrics;
use crate::spatial_hash::SpatialHash;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trophica_data::{Organism, Species};

pub mod init;
pub mod logic;
pub mod query;
pub mod update;

pub use update::TickReport;

/// Owner of every organism and of the single random stream.
///
/// Every living organism in `organisms` is indexed in `spatial` at its
/// position, and `live_counts` holds the number of living organisms per
/// species, updated as organisms are born and die.
pub struct World {
    pub width: f64,
    pub height: f64,
    pub tick: u64,
    pub sunlight: f64,
    pub config: AppConfig,
    organisms: Vec<Organism>,
    spatial: SpatialHash,
    rng: ChaCha8Rng,
    recorder: StatsRecorder,
    metrics: Metrics,
    next_id: u64,
    live_counts: [usize; Species::COUNT],
}

impl World {
    /// Creates an empty world. The random stream is seeded from `config.world.seed`.
    pub fn new(config: AppConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let world = &config.world;
        Ok(Self {
            width: world.width,
            height: world.height,
            tick: 0,
            sunlight: world.sunlight,
            spatial: SpatialHash::new(world.cell_size),
            rng: ChaCha8Rng::seed_from_u64(world.seed),
            recorder: StatsRecorder::new(),
            metrics: Metrics::new(world.log_interval),
            next_id: 0,
            live_counts: [0; Species::COUNT],
            organisms: Vec::new(),
            config,
        })
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn spatial(&self) -> &SpatialHash {
        &self.spatial
    }

    pub fn recorder(&self) -> &StatsRecorder {
        &self.recorder
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn organism_count(&self) -> usize {
        self.organisms.len()
    }

    pub fn set_sunlight(&mut self, intensity: f64) {
        self.sunlight = intensity.max(0.0);
    }
}
