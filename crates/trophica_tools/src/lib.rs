//! Shared analysis pipeline for the `jacobian` and `trophic` binaries.

use std::path::{Path, PathBuf};
use trophica_core::config::AnalysisConfig;
use trophica_core::stability::{Comparison, StabilityReport};
use trophica_core::TwoSpeciesModel;
use trophica_data::PopulationTable;
use trophica_io::report::{report_path, write_report};

/// Species pairs analysed by `jacobian --all`.
pub const COMMON_PAIRS: [(&str, &str); 10] = [
    ("Wildflowers", "Bunny"),
    ("Bunny", "Fox"),
    ("Deer", "Coyote"),
    ("Deer", "BlackBear"),
    ("Fox", "BlackBear"),
    ("Bunny", "Deer"),
    ("Fox", "Coyote"),
    ("Wildflowers", "Berries"),
    ("Wildflowers", "FieldMouse"),
    ("Berries", "Chipmunk"),
];

pub fn rule(c: char) -> String {
    c.to_string().repeat(60)
}

/// What one pair analysis produced.
#[derive(Debug, Clone)]
pub struct PairOutcome {
    pub report: StabilityReport,
    pub comparison: Comparison,
    pub report_file: PathBuf,
}

/// Loads the pair from `table` and runs the full pipeline, writing
/// `<A>_<B>_analysis.txt` into `out_dir`.
///
/// # Errors
/// A missing species column aborts before any file is written.
pub fn analyze_pair(
    table: &PopulationTable,
    species_a: &str,
    species_b: &str,
    out_dir: &Path,
    settings: AnalysisConfig,
) -> trophica_io::Result<PairOutcome> {
    let mut model = TwoSpeciesModel::load_series(table, species_a, species_b, settings)?;
    println!(
        "Loaded {} timesteps for {} and {}",
        table.len(),
        species_a,
        species_b
    );
    run_model(&mut model, out_dir)
}

/// Runs estimation, eigen-analysis and comparison on a loaded model,
/// narrating each step, then exports the report.
pub fn run_model(model: &mut TwoSpeciesModel, out_dir: &Path) -> trophica_io::Result<PairOutcome> {
    let (a, b) = (model.species_a.clone(), model.species_b.clone());

    println!("\n=== Estimating Parameters ===");
    let p = *model.estimate_parameters();
    println!("r_{a} = {:.4} per step", p.r1);
    println!("r_{b} = {:.4} per step", p.r2);
    println!(
        "Equilibrium: {a}* = {:.1}, {b}* = {:.1}",
        p.x_star, p.y_star
    );
    println!("a_{a}{a} = {:.6} (intraspecific)", p.a11);
    println!("a_{a}{b} = {:.6} (effect of {b} on {a})", p.a12);
    println!("a_{b}{a} = {:.6} (effect of {a} on {b})", p.a21);
    println!("a_{b}{b} = {:.6} (intraspecific)", p.a22);

    println!("\n=== Jacobian Analysis ===");
    let report = *model.compute_jacobian_and_stability()?;
    let j = report.jacobian;
    println!("Jacobian matrix at equilibrium:");
    println!("J = [ {:8.4}  {:8.4} ]", j.j11, j.j12);
    println!("    [ {:8.4}  {:8.4} ]", j.j21, j.j22);
    println!("Trace(J) = {:.4}", report.trace);
    println!("Det(J) = {:.4}", report.determinant);
    println!("Discriminant = {:.4}", report.discriminant);
    let [l1, l2] = report.eigenvalues;
    println!("λ₁ = {l1}");
    println!("λ₂ = {l2}");

    println!("\n=== Stability Classification ===");
    println!("Type: {}", report.stability);
    if let Some(period) = report.oscillation_period {
        println!("Oscillation period: {period:.1} time steps");
    }

    println!("\n=== Model vs Simulation Comparison ===");
    let comparison = model.compare_with_simulation()?;
    for (name, v) in [(&a, comparison.a), (&b, comparison.b)] {
        println!(
            "{name}: Mean={:.1}, StdDev={:.1}, CV={:.2}%",
            v.mean,
            v.std_dev,
            100.0 * v.cv
        );
    }
    let mark = if comparison.verdict.matches() { "✓" } else { "⚠" };
    println!("{mark} {}", comparison.verdict.describe());

    let report_file = report_path(out_dir, &a, &b);
    write_report(&report_file, model)?;
    println!("\nAnalysis exported to: {}", report_file.display());

    Ok(PairOutcome {
        report,
        comparison,
        report_file,
    })
}
