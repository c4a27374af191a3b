//! Configuration management for simulation and analysis parameters.
//!
//! Every field has a default matching the reference ecosystem, so a
//! `config.toml` only needs the values it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 100.0
//! height = 100.0
//! seed = 42
//!
//! [ecology]
//! herbivore_encounter_rate = 0.20
//!
//! [analysis]
//! equilibrium_window = 50
//! ```

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World dimensions, ambient conditions and the random seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Edge length of a spatial hash bucket.
    pub cell_size: f64,
    pub sunlight: f64,
    pub seed: u64,
    /// Ticks between progress log lines.
    pub log_interval: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            cell_size: 10.0,
            sunlight: 1.0,
            seed: 42,
            log_interval: 10,
        }
    }
}

/// Feeding and reproduction constants shared by every species of a role.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EcologyConfig {
    pub herbivore_encounter_rate: f64,
    pub carnivore_encounter_rate: f64,
    pub omnivore_graze_rate: f64,
    pub omnivore_hunt_rate: f64,
    /// Share of a prey's yield the eater keeps.
    pub assimilation_efficiency: f64,
    pub plant_reproduction_chance: f64,
    pub animal_reproduction_chance: f64,
    /// Fraction of size a plant keeps after seeding.
    pub plant_reproduction_retained: f64,
    /// Plants below this fraction of max size regenerate.
    pub regeneration_threshold: f64,
    pub omnivore_hunt_threshold: f64,
    pub omnivore_desperate_threshold: f64,
    pub plant_reproduction_cooldown: u32,
    pub animal_reproduction_cooldown: u32,
}

impl Default for EcologyConfig {
    fn default() -> Self {
        Self {
            herbivore_encounter_rate: 0.20,
            carnivore_encounter_rate: 0.02,
            omnivore_graze_rate: 0.15,
            omnivore_hunt_rate: 0.015,
            assimilation_efficiency: 0.7,
            plant_reproduction_chance: 0.02,
            animal_reproduction_chance: 0.25,
            plant_reproduction_retained: 0.9,
            regeneration_threshold: 0.7,
            omnivore_hunt_threshold: 0.6,
            omnivore_desperate_threshold: 0.4,
            plant_reproduction_cooldown: 30,
            animal_reproduction_cooldown: 25,
        }
    }
}

/// Constants of the two-species stability analysis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub growth_window_start: usize,
    pub growth_window_end: usize,
    pub equilibrium_window: usize,
    pub self_limitation: f64,
    /// Growth rate assumed when a window endpoint count is zero.
    pub extinct_growth_rate: f64,
    pub fallback_a12: f64,
    pub fallback_a21: f64,
    pub zero_tolerance: f64,
    pub oscillation_cv_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            growth_window_start: 5,
            growth_window_end: 30,
            equilibrium_window: 50,
            self_limitation: -0.001,
            extinct_growth_rate: -0.01,
            fallback_a12: -0.001,
            fallback_a21: 0.001,
            zero_tolerance: 1e-10,
            oscillation_cv_threshold: 0.3,
        }
    }
}

/// Top-level configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub ecology: EcologyConfig,
    pub analysis: AnalysisConfig,
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first failing rule as [`CoreError::InvalidConfig`].
    pub fn validate(&self) -> Result<(), CoreError> {
        self.check()
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    fn check(&self) -> anyhow::Result<()> {
        let w = &self.world;
        anyhow::ensure!(w.width > 0.0, "World width must be positive");
        anyhow::ensure!(w.height > 0.0, "World height must be positive");
        anyhow::ensure!(w.cell_size > 0.0, "Cell size must be positive");
        anyhow::ensure!(w.sunlight >= 0.0, "Sunlight must be non-negative");
        anyhow::ensure!(w.log_interval > 0, "Log interval must be positive");

        let e = &self.ecology;
        for (name, rate) in [
            ("Herbivore encounter rate", e.herbivore_encounter_rate),
            ("Carnivore encounter rate", e.carnivore_encounter_rate),
            ("Omnivore graze rate", e.omnivore_graze_rate),
            ("Omnivore hunt rate", e.omnivore_hunt_rate),
            ("Assimilation efficiency", e.assimilation_efficiency),
            ("Plant reproduction chance", e.plant_reproduction_chance),
            ("Animal reproduction chance", e.animal_reproduction_chance),
            ("Plant reproduction retained", e.plant_reproduction_retained),
            ("Regeneration threshold", e.regeneration_threshold),
            ("Omnivore hunt threshold", e.omnivore_hunt_threshold),
            ("Omnivore desperate threshold", e.omnivore_desperate_threshold),
        ] {
            anyhow::ensure!(is_probability(rate), "{name} must be in [0.0, 1.0]");
        }

        let a = &self.analysis;
        anyhow::ensure!(
            a.growth_window_end > a.growth_window_start,
            "Growth window end must follow its start"
        );
        anyhow::ensure!(
            a.equilibrium_window > 0,
            "Equilibrium window must be positive"
        );
        anyhow::ensure!(a.zero_tolerance >= 0.0, "Zero tolerance must be non-negative");
        anyhow::ensure!(
            a.oscillation_cv_threshold > 0.0,
            "Oscillation CV threshold must be positive"
        );
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, CoreError> {
        let config = toml::from_str::<Self>(content)
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(CoreError::InvalidConfig(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_world_width() {
        let config = AppConfig {
            world: WorldConfig {
                width: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_reproduction_chance() {
        let config = AppConfig {
            ecology: EcologyConfig {
                animal_reproduction_chance: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_growth_window() {
        let config = AppConfig {
            analysis: AnalysisConfig {
                growth_window_start: 30,
                growth_window_end: 5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[world]\nseed = 7\n").unwrap();
        assert_eq!(config.world.seed, 7);
        assert_eq!(config.world.width, 100.0);
        assert_eq!(config.analysis.equilibrium_window, 50);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = std::env::temp_dir().join("trophica_config_missing_test.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(AppConfig::from_toml("[world]\nwidth = -1.0\n").is_err());
        assert!(AppConfig::from_toml("not toml at all = [").is_err());
    }
}
