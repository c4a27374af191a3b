//! Per-tick population history.

use serde::{Deserialize, Serialize};
use trophica_data::{Census, PopulationTable, Species};

#[derive(Debug, Clone)]
struct Series {
    species: Species,
    /// Row index of the first recorded value.
    first_row: usize,
    counts: Vec<u32>,
}

/// Accumulates one census per tick into per-species time series.
///
/// A species first seen at a later tick starts its own series there; the
/// exported table zero-fills the rows before it so all columns line up.
#[derive(Debug, Clone, Default)]
pub struct StatsRecorder {
    ticks: Vec<u64>,
    series: Vec<Series>,
}

/// Descriptive statistics of one species' series.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeciesStats {
    pub species: String,
    pub initial: u32,
    #[serde(rename = "final")]
    pub last: u32,
    pub mean: f64,
    pub min: u32,
    pub max: u32,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the counts of `census` as the row for `tick`.
    ///
    /// Known species missing from the census are recorded as zero.
    pub fn record(&mut self, census: &Census, tick: u64) {
        let row = self.ticks.len();
        self.ticks.push(tick);
        for series in &mut self.series {
            series.counts.push(census.get(series.species) as u32);
        }
        for (species, count) in census.iter() {
            if !self.series.iter().any(|s| s.species == species) {
                self.series.push(Series {
                    species,
                    first_row: row,
                    counts: vec![count as u32],
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Tracked species in first-seen order.
    pub fn species(&self) -> impl Iterator<Item = Species> + '_ {
        self.series.iter().map(|s| s.species)
    }

    /// Full history of `species`, zero-filled before it first appeared.
    pub fn history(&self, species: Species) -> Option<Vec<u32>> {
        self.series
            .iter()
            .find(|s| s.species == species)
            .map(|s| self.aligned(s))
    }

    fn aligned(&self, series: &Series) -> Vec<u32> {
        let mut column = vec![0; series.first_row];
        column.extend_from_slice(&series.counts);
        column
    }

    /// Equal-length table with one column per species in first-seen order.
    pub fn to_table(&self) -> PopulationTable {
        PopulationTable {
            ticks: self.ticks.clone(),
            species: self.series.iter().map(|s| s.species.name().to_string()).collect(),
            columns: self.series.iter().map(|s| self.aligned(s)).collect(),
        }
    }

    /// Latest count per tracked species.
    pub fn summary(&self) -> Vec<(Species, u32)> {
        self.series
            .iter()
            .map(|s| (s.species, s.counts.last().copied().unwrap_or(0)))
            .collect()
    }

    pub fn species_stats(&self) -> Vec<SpeciesStats> {
        self.series
            .iter()
            .map(|s| describe(s.species.name(), &self.aligned(s)))
            .collect()
    }
}

/// Initial, final, mean, min and max of a count series.
pub fn describe(name: &str, data: &[u32]) -> SpeciesStats {
    let mean = if data.is_empty() {
        0.0
    } else {
        data.iter().map(|&v| f64::from(v)).sum::<f64>() / data.len() as f64
    };
    SpeciesStats {
        species: name.to_string(),
        initial: data.first().copied().unwrap_or(0),
        last: data.last().copied().unwrap_or(0),
        mean,
        min: data.iter().copied().min().unwrap_or(0),
        max: data.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn census(entries: &[(Species, usize)]) -> Census {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_late_species_is_front_filled() {
        let mut rec = StatsRecorder::new();
        rec.record(&census(&[(Species::Bunny, 3)]), 1);
        rec.record(&census(&[(Species::Bunny, 4)]), 2);
        rec.record(&census(&[(Species::Bunny, 5), (Species::Fox, 1)]), 3);

        let table = rec.to_table();
        assert_eq!(table.species, vec!["Bunny", "Fox"]);
        assert_eq!(table.column("Bunny"), Some(&[3, 4, 5][..]));
        assert_eq!(table.column("Fox"), Some(&[0, 0, 1][..]));
        assert_eq!(table.ticks, vec![1, 2, 3]);
    }

    #[test]
    fn test_extinct_species_keeps_recording_zero() {
        let mut rec = StatsRecorder::new();
        rec.record(&census(&[(Species::Deer, 2)]), 1);
        rec.record(&Census::new(), 2);
        assert_eq!(rec.history(Species::Deer), Some(vec![2, 0]));
        assert_eq!(rec.summary(), vec![(Species::Deer, 0)]);
    }

    #[test]
    fn test_describe() {
        let stats = describe("Aspen", &[4, 2, 6]);
        assert_eq!(stats.initial, 4);
        assert_eq!(stats.last, 6);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 6);
        assert!((stats.mean - 4.0).abs() < 1e-12);
    }
}
