//! Lotka-Volterra parameter estimation from observed trajectories.

use crate::config::AnalysisConfig;

/// Per-capita growth rate `ln(N[end] / N[start]) / (end - start)`.
///
/// Both window ends are clamped to the last sample. A window that collapses
/// after clamping, or a zero count at either end, yields `fallback`.
pub fn growth_rate(series: &[f64], start: usize, end: usize, fallback: f64) -> f64 {
    let Some(last) = series.len().checked_sub(1) else {
        return fallback;
    };
    let start = start.min(last);
    let end = end.min(last);
    if end <= start {
        return fallback;
    }
    let (n0, nt) = (series[start], series[end]);
    if n0 <= 0.0 || nt <= 0.0 {
        return fallback;
    }
    (nt / n0).ln() / (end - start) as f64
}

/// Mean of the last `window` samples, or of all of them if fewer exist.
pub fn equilibrium(series: &[f64], window: usize) -> f64 {
    let tail = &series[series.len().saturating_sub(window)..];
    mean(tail)
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation around `mean`.
pub fn std_dev(data: &[f64], mean: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Interaction matrix `(a11, a12, a21, a22)`.
///
/// Self-limitation is fixed. Cross terms solve `r_i + a_ii*N_i* + a_ij*N_j* = 0`
/// when both equilibria are positive, and fall back to fixed values otherwise.
pub fn interaction_coefficients(
    r1: f64,
    r2: f64,
    x_star: f64,
    y_star: f64,
    settings: &AnalysisConfig,
) -> (f64, f64, f64, f64) {
    let a11 = settings.self_limitation;
    let a22 = settings.self_limitation;
    let (a12, a21) = if x_star > 0.0 && y_star > 0.0 {
        (-(r1 + a11 * x_star) / y_star, -(r2 + a22 * y_star) / x_star)
    } else {
        (settings.fallback_a12, settings.fallback_a21)
    };
    (a11, a12, a21, a22)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_rate_exponential_window() {
        let series: Vec<f64> = (0..40).map(|t| 10.0 * (0.1 * t as f64).exp()).collect();
        let r = growth_rate(&series, 5, 30, -0.01);
        assert!((r - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_growth_rate_clamps_short_series() {
        let series = [4.0, 4.0, 4.0, 4.0, 4.0, 8.0, 8.0, 16.0];
        // end clamps to index 7
        let r = growth_rate(&series, 5, 30, -0.01);
        assert!((r - 2f64.ln() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_growth_rate_fallbacks() {
        assert_eq!(growth_rate(&[], 5, 30, -0.01), -0.01);
        assert_eq!(growth_rate(&[1.0, 2.0, 3.0], 5, 30, -0.01), -0.01);
        let mut series = vec![5.0; 40];
        series[30] = 0.0;
        assert_eq!(growth_rate(&series, 5, 30, -0.01), -0.01);
    }

    #[test]
    fn test_equilibrium_uses_tail() {
        let mut series = vec![100.0; 10];
        series.extend(vec![2.0; 50]);
        assert_eq!(equilibrium(&series, 50), 2.0);
        assert_eq!(equilibrium(&[1.0, 3.0], 50), 2.0);
        assert_eq!(equilibrium(&[], 50), 0.0);
    }

    #[test]
    fn test_interaction_fallback_when_extinct() {
        let settings = AnalysisConfig::default();
        let (a11, a12, a21, a22) = interaction_coefficients(0.1, 0.1, 0.0, 5.0, &settings);
        assert_eq!((a11, a22), (-0.001, -0.001));
        assert_eq!((a12, a21), (-0.001, 0.001));
    }

    #[test]
    fn test_interaction_satisfies_equilibrium() {
        let settings = AnalysisConfig::default();
        let (r1, r2, x, y) = (0.05, -0.02, 40.0, 12.0);
        let (a11, a12, a21, a22) = interaction_coefficients(r1, r2, x, y, &settings);
        assert!((r1 + a11 * x + a12 * y).abs() < 1e-12);
        assert!((r2 + a22 * y + a21 * x).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_population() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&data, mean(&data)) - 2.0).abs() < 1e-12);
    }
}
