//! End-of-run summary: per-species statistics as JSON and as a console table.

use crate::error::{IoError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trophica_core::history::SpeciesStats;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// RFC 3339 timestamp of when the summary was produced.
    pub generated_at: String,
    pub preset: String,
    pub steps: u32,
    pub seed: u64,
    pub final_population: usize,
    pub species: Vec<SpeciesStats>,
}

impl RunSummary {
    pub fn new(
        preset: impl Into<String>,
        steps: u32,
        seed: u64,
        final_population: usize,
        species: Vec<SpeciesStats>,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            preset: preset.into(),
            steps,
            seed,
            final_population,
            species,
        }
    }

    /// Writes pretty-printed JSON to `path`.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| IoError::file_system(path, e))?;
        tracing::debug!(path = %path.display(), "Wrote run summary");
        Ok(())
    }

    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::not_found(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path).map_err(|e| IoError::file_system(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// `ecosystem_data.csv` becomes `ecosystem_data_summary.json` in the same directory.
pub fn summary_path(table_path: &Path) -> PathBuf {
    let stem = table_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "run".to_string());
    table_path.with_file_name(format!("{stem}_summary.json"))
}

/// One aligned line per species: initial, final, mean, min and max.
pub fn render_table(stats: &[SpeciesStats]) -> String {
    stats
        .iter()
        .map(|s| {
            format!(
                "{:<20}: Initial={:>3} Final={:>3} Avg={:.1} Min={:>3} Max={:>3}\n",
                s.species, s.initial, s.last, s.mean, s.min, s.max
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trophica_core::history::describe;

    #[test]
    fn test_render_table_alignment() {
        let text = render_table(&[describe("Fox", &[3, 5, 4])]);
        assert_eq!(
            text,
            "Fox                 : Initial=  3 Final=  4 Avg=4.0 Min=  3 Max=  5\n"
        );
    }

    #[test]
    fn test_summary_path_sits_next_to_table() {
        let p = summary_path(Path::new("out/ecosystem_data.csv"));
        assert_eq!(p, Path::new("out/ecosystem_data_summary.json"));
    }

    #[test]
    fn test_json_uses_final_key() {
        let summary = RunSummary::new("boom-bust", 10, 42, 3, vec![describe("Bunny", &[1, 2])]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"final\":2"));
        assert!(json.contains("\"preset\":\"boom-bust\""));
    }

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir().join(format!("trophica_summary_{}.json", std::process::id()));
        let summary = RunSummary::new("plant-paradise", 5, 7, 12, vec![describe("Deer", &[4, 4])]);
        summary.write_json(&path).unwrap();
        let back = RunSummary::read_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, summary);
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("trophica_summary_that_does_not_exist.json");
        assert!(matches!(
            RunSummary::read_json(&path),
            Err(IoError::NotFound(_))
        ));
    }
}
