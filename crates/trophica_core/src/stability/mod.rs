//! Two-species Lotka-Volterra stability analysis of recorded trajectories.
//!
//! The steps run in a fixed order on a [`TwoSpeciesModel`]:
//! [`load_series`](TwoSpeciesModel::load_series),
//! [`estimate_parameters`](TwoSpeciesModel::estimate_parameters),
//! [`compute_jacobian_and_stability`](TwoSpeciesModel::compute_jacobian_and_stability),
//! then optionally [`compare_with_simulation`](TwoSpeciesModel::compare_with_simulation).
//! Each model holds one pair and shares nothing with any other.

pub mod compare;
pub mod estimate;
pub mod jacobian;

pub use compare::{Comparison, Variability, Verdict};
pub use jacobian::{Eigenvalue, Jacobian, StabilityType};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisStep, CoreError};
use serde::{Deserialize, Serialize};
use trophica_data::PopulationTable;

/// Fitted competition model `dN_i/dt = N_i (r_i + a_ii N_i + a_ij N_j)`
/// and the equilibrium it is linearized at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub r1: f64,
    pub r2: f64,
    pub a11: f64,
    pub a12: f64,
    pub a21: f64,
    pub a22: f64,
    pub x_star: f64,
    pub y_star: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    pub jacobian: Jacobian,
    pub trace: f64,
    pub determinant: f64,
    pub discriminant: f64,
    pub eigenvalues: [Eigenvalue; 2],
    pub stability: StabilityType,
    pub oscillation_period: Option<f64>,
}

impl StabilityReport {
    pub fn from_parameters(params: &Parameters, tolerance: f64) -> Self {
        let jacobian = Jacobian::at_equilibrium(params);
        let eigenvalues = jacobian.eigenvalues();
        let stability = jacobian::classify(eigenvalues[0], tolerance);
        Self {
            jacobian,
            trace: jacobian.trace(),
            determinant: jacobian.determinant(),
            discriminant: jacobian.discriminant(),
            eigenvalues,
            stability,
            oscillation_period: jacobian::oscillation_period(eigenvalues[0], stability),
        }
    }
}

/// Analysis state for one species pair.
#[derive(Debug, Clone)]
pub struct TwoSpeciesModel {
    pub species_a: String,
    pub species_b: String,
    series_a: Vec<f64>,
    series_b: Vec<f64>,
    settings: AnalysisConfig,
    parameters: Option<Parameters>,
    report: Option<StabilityReport>,
}

impl TwoSpeciesModel {
    /// Loads the two named columns from `table`.
    ///
    /// # Errors
    /// [`CoreError::SpeciesNotFound`] naming the first absent column.
    pub fn load_series(
        table: &PopulationTable,
        species_a: &str,
        species_b: &str,
        settings: AnalysisConfig,
    ) -> Result<Self, CoreError> {
        let column = |name: &str| {
            table
                .column(name)
                .ok_or_else(|| CoreError::species_not_found(name))
        };
        let a = column(species_a)?;
        let b = column(species_b)?;
        tracing::debug!(
            species_a,
            species_b,
            ticks = table.len(),
            "Loaded species pair"
        );
        Ok(Self::from_series(species_a, species_b, a, b, settings))
    }

    pub fn from_series(
        species_a: &str,
        species_b: &str,
        series_a: &[u32],
        series_b: &[u32],
        settings: AnalysisConfig,
    ) -> Self {
        Self {
            species_a: species_a.to_string(),
            species_b: species_b.to_string(),
            series_a: series_a.iter().map(|&v| f64::from(v)).collect(),
            series_b: series_b.iter().map(|&v| f64::from(v)).collect(),
            settings,
            parameters: None,
            report: None,
        }
    }

    /// Fits growth rates, equilibrium and interaction terms.
    ///
    /// Never fails: extinct or too-short series fall back to fixed values.
    pub fn estimate_parameters(&mut self) -> &Parameters {
        let s = &self.settings;
        let r1 = estimate::growth_rate(
            &self.series_a,
            s.growth_window_start,
            s.growth_window_end,
            s.extinct_growth_rate,
        );
        let r2 = estimate::growth_rate(
            &self.series_b,
            s.growth_window_start,
            s.growth_window_end,
            s.extinct_growth_rate,
        );
        let x_star = estimate::equilibrium(&self.series_a, s.equilibrium_window);
        let y_star = estimate::equilibrium(&self.series_b, s.equilibrium_window);
        let (a11, a12, a21, a22) = estimate::interaction_coefficients(r1, r2, x_star, y_star, s);

        self.report = None;
        self.parameters.insert(Parameters {
            r1,
            r2,
            a11,
            a12,
            a21,
            a22,
            x_star,
            y_star,
        })
    }

    /// Builds the Jacobian at equilibrium and classifies it.
    ///
    /// # Errors
    /// [`CoreError::NotAnalyzed`] if parameters have not been estimated.
    pub fn compute_jacobian_and_stability(&mut self) -> Result<&StabilityReport, CoreError> {
        let params = self
            .parameters
            .as_ref()
            .ok_or(CoreError::not_analyzed(AnalysisStep::ParameterEstimation))?;
        let report = StabilityReport::from_parameters(params, self.settings.zero_tolerance);
        Ok(self.report.insert(report))
    }

    /// Compares the predicted type with the observed coefficient of variation.
    ///
    /// # Errors
    /// [`CoreError::NotAnalyzed`] if stability has not been computed.
    pub fn compare_with_simulation(&self) -> Result<Comparison, CoreError> {
        let report = self
            .report
            .as_ref()
            .ok_or(CoreError::not_analyzed(AnalysisStep::StabilityAnalysis))?;
        let comparison = compare::compare(
            &self.series_a,
            &self.series_b,
            report.stability,
            self.settings.oscillation_cv_threshold,
        );
        if !comparison.verdict.matches() {
            tracing::warn!(
                species_a = %self.species_a,
                species_b = %self.species_b,
                predicted = report.stability.label(),
                oscillating = comparison.oscillating,
                "Prediction differs from observation"
            );
        }
        Ok(comparison)
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    pub fn report(&self) -> Option<&StabilityReport> {
        self.report.as_ref()
    }

    pub fn series(&self) -> (&[f64], &[f64]) {
        (&self.series_a, &self.series_b)
    }
}
