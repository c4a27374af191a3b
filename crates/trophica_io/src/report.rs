//! Plain-text analysis report for one species pair.

use crate::error::{IoError, Result};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use trophica_core::{AnalysisStep, CoreError, TwoSpeciesModel};

/// `<A>_<B>_analysis.txt` inside `dir`.
pub fn report_path(dir: &Path, species_a: &str, species_b: &str) -> PathBuf {
    dir.join(format!("{species_a}_{species_b}_analysis.txt"))
}

/// Renders the report of a fully analyzed model.
///
/// # Errors
/// [`CoreError::NotAnalyzed`] naming the first step that has not run.
pub fn render_report(model: &TwoSpeciesModel) -> Result<String> {
    let Some(p) = model.parameters() else {
        return Err(CoreError::not_analyzed(AnalysisStep::ParameterEstimation).into());
    };
    let Some(report) = model.report() else {
        return Err(CoreError::not_analyzed(AnalysisStep::StabilityAnalysis).into());
    };
    let (a, b) = (&model.species_a, &model.species_b);
    let [l1, l2] = report.eigenvalues;

    let mut out = String::new();
    // fmt::Write into a String is infallible.
    let _ = (|| -> std::fmt::Result {
        writeln!(out, "Two-Species Jacobian Analysis")?;
        writeln!(out, "Species: {a} and {b}")?;
        writeln!(out, "======================================")?;
        writeln!(out)?;
        writeln!(out, "Model Parameters:")?;
        writeln!(out, "r_{a} = {:.6}", p.r1)?;
        writeln!(out, "r_{b} = {:.6}", p.r2)?;
        writeln!(out, "a_{a}{a} = {:.6}", p.a11)?;
        writeln!(out, "a_{a}{b} = {:.6}", p.a12)?;
        writeln!(out, "a_{b}{a} = {:.6}", p.a21)?;
        writeln!(out, "a_{b}{b} = {:.6}", p.a22)?;
        writeln!(out)?;
        writeln!(out, "Equilibrium:")?;
        writeln!(out, "{a}* = {:.2}", p.x_star)?;
        writeln!(out, "{b}* = {:.2}", p.y_star)?;
        writeln!(out)?;
        writeln!(out, "Eigenvalues:")?;
        writeln!(out, "λ₁ = {l1}")?;
        writeln!(out, "λ₂ = {l2}")?;
        writeln!(out)?;
        writeln!(out, "Stability: {}", report.stability)?;
        if let Some(period) = report.oscillation_period {
            writeln!(out, "Oscillation period: {period:.1} steps")?;
        }
        Ok(())
    })();
    Ok(out)
}

/// Renders and writes the report. Nothing is created when rendering fails.
///
/// # Errors
/// [`CoreError::NotAnalyzed`] for an unanalyzed model, or
/// [`IoError::FileSystem`] naming `path`.
pub fn write_report<P: AsRef<Path>>(path: P, model: &TwoSpeciesModel) -> Result<()> {
    let path = path.as_ref();
    let text = render_report(model)?;
    let file = File::create(path).map_err(|e| IoError::file_system(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| IoError::file_system(path, e))?;
    tracing::info!(path = %path.display(), "Analysis exported");
    Ok(())
}
