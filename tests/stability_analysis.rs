mod common;

use common::{scratch_path, WorldBuilder};
use proptest::prelude::*;
use trophica_lib::trophica_core::config::AnalysisConfig;
use trophica_lib::trophica_core::stability::{Parameters, StabilityReport};
use trophica_lib::trophica_core::{AnalysisStep, CoreError, Preset, StabilityType, TwoSpeciesModel};
use trophica_lib::trophica_data::PopulationTable;
use trophica_lib::trophica_io::{read_table, report_path, write_report, write_table};

fn constant_table() -> PopulationTable {
    let mut table = PopulationTable::new(vec!["A".into(), "B".into()]);
    for tick in 1..=50u64 {
        table.push_row(tick, &[10, 5]);
    }
    table
}

#[test]
fn test_constant_series_is_near_neutral() {
    let mut model =
        TwoSpeciesModel::load_series(&constant_table(), "A", "B", AnalysisConfig::default())
            .unwrap();
    let p = *model.estimate_parameters();
    assert!(p.r1.abs() < 1e-12);
    assert!(p.r2.abs() < 1e-12);
    assert_eq!((p.x_star, p.y_star), (10.0, 5.0));

    let report = *model.compute_jacobian_and_stability().unwrap();
    assert!(report.trace < 0.0);
    assert!((report.trace - 2.0 * p.a11 * 10.0 - p.a12 * 5.0 - 2.0 * p.a22 * 5.0 - p.a21 * 10.0).abs() < 1e-12);
    assert!(matches!(
        report.stability,
        StabilityType::StableNode | StabilityType::MarginallyStable
    ));
    assert!(report.oscillation_period.is_none());
}

#[test]
fn test_missing_species_reports_not_found_and_writes_nothing() {
    let dir = std::env::temp_dir();
    let report = report_path(&dir, "A", "Moose");
    let _ = std::fs::remove_file(&report);

    let result = TwoSpeciesModel::load_series(&constant_table(), "A", "Moose", AnalysisConfig::default());
    match result {
        Err(CoreError::SpeciesNotFound { species }) => assert_eq!(species, "Moose"),
        other => panic!("expected SpeciesNotFound, got {other:?}"),
    }
    assert!(!report.exists());
}

#[test]
fn test_steps_out_of_order_are_rejected() {
    let mut model = TwoSpeciesModel::from_series("A", "B", &[1, 2, 3], &[3, 2, 1], AnalysisConfig::default());
    assert_eq!(
        model.compute_jacobian_and_stability().unwrap_err(),
        CoreError::not_analyzed(AnalysisStep::ParameterEstimation)
    );
    let err = model.compare_with_simulation().unwrap_err();
    assert_eq!(err, CoreError::not_analyzed(AnalysisStep::StabilityAnalysis));
    assert!(err.to_string().contains("stability analysis has not run"));
}

#[test]
fn test_extinct_series_falls_back() {
    let settings = AnalysisConfig::default();
    let zeros = vec![0u32; 60];
    let mut model = TwoSpeciesModel::from_series("Gone", "Also", &zeros, &zeros, settings);
    let p = *model.estimate_parameters();
    assert_eq!(p.r1, settings.extinct_growth_rate);
    assert_eq!(p.a12, settings.fallback_a12);
    assert_eq!(p.a21, settings.fallback_a21);
    assert!(model.compute_jacobian_and_stability().is_ok());
    assert!(model.compare_with_simulation().is_ok());
}

#[test]
fn test_simulated_run_analysis_end_to_end() {
    let mut world = WorldBuilder::new()
        .with_seed(11)
        .with_preset(Preset::BoomBust, 11)
        .build();
    world.tick(200);

    let csv = scratch_path("stability_run.csv");
    write_table(&csv, &world.recorder().to_table()).unwrap();
    let table = read_table(&csv).unwrap();
    let _ = std::fs::remove_file(&csv);

    let mut model =
        TwoSpeciesModel::load_series(&table, "Wildflowers", "Bunny", AnalysisConfig::default())
            .unwrap();
    model.estimate_parameters();
    let report = *model.compute_jacobian_and_stability().unwrap();
    assert!(report.trace.is_finite());
    assert!(report.determinant.is_finite());
    model.compare_with_simulation().unwrap();

    let out = report_path(&std::env::temp_dir(), "Wildflowers", &format!("Bunny{}", std::process::id()));
    write_report(&out, &model).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    let _ = std::fs::remove_file(&out);
    assert!(text.contains(report.stability.label()));
}

proptest! {
    #[test]
    fn prop_eigenvalues_match_trace_and_determinant(
        r1 in -0.5f64..0.5,
        r2 in -0.5f64..0.5,
        a12 in -0.05f64..0.05,
        a21 in -0.05f64..0.05,
        x_star in 0.0f64..200.0,
        y_star in 0.0f64..200.0,
    ) {
        let params = Parameters { r1, r2, a11: -0.001, a12, a21, a22: -0.001, x_star, y_star };
        let report = StabilityReport::from_parameters(&params, 1e-10);
        let [l1, l2] = report.eigenvalues;
        let scale = 1.0 + report.trace.abs() + report.determinant.abs();

        prop_assert!((l1.re + l2.re - report.trace).abs() < 1e-9 * scale);
        let product_re = l1.re * l2.re - l1.im * l2.im;
        prop_assert!((product_re - report.determinant).abs() < 1e-9 * scale * scale);

        // Same inputs, same answer.
        prop_assert_eq!(report, StabilityReport::from_parameters(&params, 1e-10));
    }
}
