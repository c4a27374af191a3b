pub mod macros;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trophica_lib::trophica_core::{AppConfig, Preset, World};
use trophica_lib::trophica_data::{Position, Species};

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    organisms: Vec<(Species, Position, f64)>,
    preset: Option<(Preset, u64)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            organisms: Vec::new(),
            preset: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_organism(mut self, species: Species, x: f64, y: f64, energy: f64) -> Self {
        self.organisms.push((species, Position::new(x, y), energy));
        self
    }

    /// Seeds the preset population with positions drawn from `placement_seed`.
    pub fn with_preset(mut self, preset: Preset, placement_seed: u64) -> Self {
        self.preset = Some((preset, placement_seed));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        if let Some((preset, seed)) = self.preset {
            preset.populate(&mut world, &mut ChaCha8Rng::seed_from_u64(seed));
        }
        for (species, position, energy) in self.organisms {
            world.add_organism(species, position, energy);
        }
        world
    }
}

/// A unique scratch path under the system temp directory.
#[allow(dead_code)]
pub fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("trophica_test_{}_{}", std::process::id(), name))
}
