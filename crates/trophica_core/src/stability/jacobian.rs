//! Linearization at equilibrium and closed-form 2x2 eigen-analysis.

use super::Parameters;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// An eigenvalue `re + im·i`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eigenvalue {
    pub re: f64,
    pub im: f64,
}

impl Eigenvalue {
    pub fn is_complex(&self, tolerance: f64) -> bool {
        self.im.abs() > tolerance
    }
}

impl fmt::Display for Eigenvalue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} + {:.4}i", self.re, self.im)
    }
}

/// Jacobian of the competition system at `(x*, y*)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jacobian {
    pub j11: f64,
    pub j12: f64,
    pub j21: f64,
    pub j22: f64,
}

impl Jacobian {
    pub fn at_equilibrium(p: &Parameters) -> Self {
        let (x, y) = (p.x_star, p.y_star);
        Self {
            j11: p.r1 + 2.0 * p.a11 * x + p.a12 * y,
            j12: p.a12 * x,
            j21: p.a21 * y,
            j22: p.r2 + 2.0 * p.a22 * y + p.a21 * x,
        }
    }

    pub fn trace(&self) -> f64 {
        self.j11 + self.j22
    }

    pub fn determinant(&self) -> f64 {
        self.j11 * self.j22 - self.j12 * self.j21
    }

    pub fn discriminant(&self) -> f64 {
        let t = self.trace();
        t * t - 4.0 * self.determinant()
    }

    /// Roots of `λ² - tr·λ + det = 0`. For a complex pair the first has the
    /// positive imaginary part; for real roots the first is the larger.
    pub fn eigenvalues(&self) -> [Eigenvalue; 2] {
        let trace = self.trace();
        let disc = self.discriminant();
        if disc >= 0.0 {
            let root = disc.sqrt();
            [
                Eigenvalue {
                    re: (trace + root) / 2.0,
                    im: 0.0,
                },
                Eigenvalue {
                    re: (trace - root) / 2.0,
                    im: 0.0,
                },
            ]
        } else {
            let im = (-disc).sqrt() / 2.0;
            let re = trace / 2.0;
            [Eigenvalue { re, im }, Eigenvalue { re, im: -im }]
        }
    }
}

/// Qualitative type of the equilibrium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityType {
    StableSpiral,
    StableNode,
    UnstableSpiral,
    UnstableNode,
    Center,
    MarginallyStable,
}

impl StabilityType {
    pub fn label(self) -> &'static str {
        match self {
            StabilityType::StableSpiral => "Stable Spiral (Damped Oscillations)",
            StabilityType::StableNode => "Stable Node (Monotonic Convergence)",
            StabilityType::UnstableSpiral => "Unstable Spiral (Growing Oscillations)",
            StabilityType::UnstableNode => "Unstable Node (Exponential Divergence)",
            StabilityType::Center => "Center (Neutral Oscillations)",
            StabilityType::MarginallyStable => "Marginally Stable",
        }
    }

    pub fn is_spiral(self) -> bool {
        matches!(self, StabilityType::StableSpiral | StabilityType::UnstableSpiral)
    }

    pub fn is_node(self) -> bool {
        matches!(self, StabilityType::StableNode | StabilityType::UnstableNode)
    }

    pub fn oscillates(self) -> bool {
        self.is_spiral() || self == StabilityType::Center
    }
}

impl fmt::Display for StabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies by the first eigenvalue only. Real parts within `tolerance`
/// of zero count as zero.
pub fn classify(lambda: Eigenvalue, tolerance: f64) -> StabilityType {
    let complex = lambda.is_complex(tolerance);
    if lambda.re < -tolerance {
        if complex {
            StabilityType::StableSpiral
        } else {
            StabilityType::StableNode
        }
    } else if lambda.re > tolerance {
        if complex {
            StabilityType::UnstableSpiral
        } else {
            StabilityType::UnstableNode
        }
    } else if complex {
        StabilityType::Center
    } else {
        StabilityType::MarginallyStable
    }
}

/// `2π / |Im λ|` for oscillating equilibria.
pub fn oscillation_period(lambda: Eigenvalue, stability: StabilityType) -> Option<f64> {
    (stability.oscillates() && lambda.im != 0.0).then(|| TAU / lambda.im.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jac(j11: f64, j12: f64, j21: f64, j22: f64) -> Jacobian {
        Jacobian { j11, j12, j21, j22 }
    }

    #[test]
    fn test_real_eigenvalues() {
        let j = jac(-1.0, 0.0, 0.0, -3.0);
        let [l1, l2] = j.eigenvalues();
        assert_eq!((l1.re, l2.re), (-1.0, -3.0));
        assert_eq!(classify(l1, 1e-10), StabilityType::StableNode);
    }

    #[test]
    fn test_complex_pair() {
        // rotation-like matrix with damping
        let j = jac(-0.1, -1.0, 1.0, -0.1);
        let [l1, l2] = j.eigenvalues();
        assert!((l1.re + 0.1).abs() < 1e-12);
        assert!((l1.im - 1.0).abs() < 1e-12);
        assert_eq!(l2.im, -l1.im);
        let kind = classify(l1, 1e-10);
        assert_eq!(kind, StabilityType::StableSpiral);
        let period = oscillation_period(l1, kind).unwrap();
        assert!((period - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_classification_table() {
        let ev = |re, im| Eigenvalue { re, im };
        assert_eq!(classify(ev(0.5, 0.0), 1e-10), StabilityType::UnstableNode);
        assert_eq!(classify(ev(0.5, 0.2), 1e-10), StabilityType::UnstableSpiral);
        assert_eq!(classify(ev(1e-12, 0.2), 1e-10), StabilityType::Center);
        assert_eq!(classify(ev(-1e-12, 0.0), 1e-10), StabilityType::MarginallyStable);
        assert_eq!(oscillation_period(ev(0.5, 0.0), StabilityType::UnstableNode), None);
    }

    #[test]
    fn test_first_eigenvalue_decides_saddle() {
        // real eigenvalues of opposite sign: the larger one is reported
        let j = jac(1.0, 0.0, 0.0, -2.0);
        let [l1, _] = j.eigenvalues();
        assert_eq!(classify(l1, 1e-10), StabilityType::UnstableNode);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            StabilityType::StableSpiral.to_string(),
            "Stable Spiral (Damped Oscillations)"
        );
        assert!(StabilityType::UnstableNode.is_node());
        assert!(!StabilityType::MarginallyStable.is_spiral());
    }
}
