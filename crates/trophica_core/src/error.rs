//! Error types for the simulation and analysis engine.

use std::fmt;
use thiserror::Error;

/// The ordered stages of a two-species analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStep {
    ParameterEstimation,
    StabilityAnalysis,
}

impl fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ParameterEstimation => "parameter estimation",
            Self::StabilityAnalysis => "stability analysis",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A requested species column is absent from the population table.
    #[error("Species not found in population table: {species}")]
    SpeciesNotFound { species: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An analysis step was called before the step it depends on.
    #[error("Analysis step called out of order: {missing} has not run")]
    NotAnalyzed { missing: AnalysisStep },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl CoreError {
    #[must_use]
    pub fn species_not_found(species: impl Into<String>) -> Self {
        Self::SpeciesNotFound {
            species: species.into(),
        }
    }

    #[must_use]
    pub fn not_analyzed(missing: AnalysisStep) -> Self {
        Self::NotAnalyzed { missing }
    }

    /// True for the missing-column case, which batch analysis skips over.
    pub fn is_data_not_found(&self) -> bool {
        matches!(self, Self::SpeciesNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
