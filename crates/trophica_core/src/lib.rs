//! # Trophica Core
//!
//! Simulation and analysis engine for a predator-prey-plant ecosystem.
//!
//! This crate contains:
//! - The species catalog and per-role update rules
//! - The [`World`](world::World) tick loop with its deterministic random stream
//! - Per-tick population history
//! - Two-species Lotka-Volterra stability analysis
//! - Trophic-level aggregation and starting presets
//! - Metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use trophica_core::config::AppConfig;
//! use trophica_core::presets::Preset;
//! use trophica_core::world::World;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut world = World::new(AppConfig::default()).unwrap();
//! Preset::PlantParadise.populate(&mut world, &mut ChaCha8Rng::seed_from_u64(1));
//! world.tick(5);
//! assert_eq!(world.recorder().len(), 5);
//! ```

/// Static parameter records for each species
pub mod catalog;
/// Configuration management for simulation and analysis parameters
pub mod config;
/// Typed errors
pub mod error;
/// Population time series recorded during a run
pub mod history;
/// Organism creation and life-cycle state
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Named starting populations
pub mod presets;
/// Spatial hashing for radius queries
pub mod spatial_hash;
/// Two-species stability analysis
pub mod stability;
/// Growth, foraging and reproduction rules
pub mod systems;
/// Functional-group aggregation
pub mod trophic;
/// Organism registry and tick loop
pub mod world;

pub use config::AppConfig;
pub use error::{AnalysisStep, CoreError};
pub use metrics::{init_logging, Metrics};
pub use presets::Preset;
pub use stability::{StabilityType, TwoSpeciesModel};
pub use world::World;
