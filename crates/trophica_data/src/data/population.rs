use super::species::Species;
use serde::{Deserialize, Serialize};

/// Living count per species at one instant, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    entries: Vec<(Species, usize)>,
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one organism of `species`, appending the species if unseen.
    pub fn tally(&mut self, species: Species) {
        match self.entries.iter_mut().find(|(s, _)| *s == species) {
            Some((_, n)) => *n += 1,
            None => self.entries.push((species, 1)),
        }
    }

    pub fn get(&self, species: Species) -> usize {
        self.entries
            .iter()
            .find(|(s, _)| *s == species)
            .map_or(0, |(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Species, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Species, usize)> for Census {
    fn from_iter<I: IntoIterator<Item = (Species, usize)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Tick-indexed population counts, one column per named series.
///
/// Every column has exactly one value per row in `ticks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationTable {
    pub ticks: Vec<u64>,
    pub species: Vec<String>,
    pub columns: Vec<Vec<u32>>,
}

impl PopulationTable {
    pub fn new(species: Vec<String>) -> Self {
        let columns = vec![Vec::new(); species.len()];
        Self {
            ticks: Vec::new(),
            species,
            columns,
        }
    }

    /// Appends one row. Missing trailing values are recorded as zero.
    pub fn push_row(&mut self, tick: u64, counts: &[u32]) {
        self.ticks.push(tick);
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.push(counts.get(i).copied().unwrap_or(0));
        }
    }

    pub fn column(&self, name: &str) -> Option<&[u32]> {
        self.species
            .iter()
            .position(|s| s == name)
            .map(|i| self.columns[i].as_slice())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.species.iter().any(|s| s == name)
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<(u64, Vec<u32>)> {
        let tick = *self.ticks.get(index)?;
        Some((tick, self.columns.iter().map(|c| c[index]).collect()))
    }
}
