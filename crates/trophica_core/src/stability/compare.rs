//! Advisory cross-check of the predicted type against observed variability.

use super::estimate::{mean, std_dev};
use super::jacobian::StabilityType;
use serde::{Deserialize, Serialize};

/// Mean, spread and coefficient of variation of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variability {
    pub mean: f64,
    pub std_dev: f64,
    /// `std_dev / mean`, zero when the mean is zero.
    pub cv: f64,
}

impl Variability {
    pub fn of(series: &[f64]) -> Self {
        let mean = mean(series);
        let std_dev = std_dev(series, mean);
        let cv = if mean == 0.0 { 0.0 } else { std_dev / mean };
        Self { mean, std_dev, cv }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Spiral predicted and oscillations observed.
    OscillationsMatch,
    /// Node predicted and monotonic dynamics observed.
    MonotonicMatch,
    Differs,
}

impl Verdict {
    pub fn matches(self) -> bool {
        self != Verdict::Differs
    }

    pub fn describe(self) -> &'static str {
        match self {
            Verdict::OscillationsMatch => "Prediction matches observation: Oscillations detected",
            Verdict::MonotonicMatch => "Prediction matches observation: Monotonic dynamics",
            Verdict::Differs => "Prediction differs from observation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: Variability,
    pub b: Variability,
    /// Either series varies by more than the CV threshold.
    pub oscillating: bool,
    pub verdict: Verdict,
}

pub fn compare(
    series_a: &[f64],
    series_b: &[f64],
    predicted: StabilityType,
    cv_threshold: f64,
) -> Comparison {
    let a = Variability::of(series_a);
    let b = Variability::of(series_b);
    let oscillating = a.cv > cv_threshold || b.cv > cv_threshold;
    let verdict = if predicted.is_spiral() && oscillating {
        Verdict::OscillationsMatch
    } else if predicted.is_node() && !oscillating {
        Verdict::MonotonicMatch
    } else {
        Verdict::Differs
    };
    Comparison {
        a,
        b,
        oscillating,
        verdict,
    }
}
