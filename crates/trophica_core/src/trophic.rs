//! Functional-group aggregation: whole trophic levels analysed as two species.

use crate::config::AnalysisConfig;
use crate::error::CoreError;
use crate::stability::TwoSpeciesModel;
use trophica_data::{PopulationTable, Species};

/// A named sum of species columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrophicGroup {
    pub name: &'static str,
    pub members: &'static [Species],
}

/// A fixed pairing of two groups and where its aggregated table is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrophicAnalysis {
    pub title: &'static str,
    pub first: TrophicGroup,
    pub second: TrophicGroup,
    pub table_file: &'static str,
}

const CONSUMERS: [Species; 6] = [
    Species::Bunny,
    Species::Deer,
    Species::FieldMouse,
    Species::GroundSquirrel,
    Species::Chipmunk,
    Species::BlackBear,
];

pub const PREDATOR_PREY: TrophicAnalysis = TrophicAnalysis {
    title: "Predator-prey dynamics",
    first: TrophicGroup {
        name: "TotalHerbivores",
        members: &Species::HERBIVORES,
    },
    second: TrophicGroup {
        name: "TotalPredators",
        members: &Species::PREDATORS,
    },
    table_file: "aggregated_predator_prey.csv",
};

/// Omnivores count as plant consumers here.
pub const PLANT_CONSUMER: TrophicAnalysis = TrophicAnalysis {
    title: "Plant-consumer dynamics",
    first: TrophicGroup {
        name: "TotalPlants",
        members: &Species::PLANTS,
    },
    second: TrophicGroup {
        name: "TotalConsumers",
        members: &CONSUMERS,
    },
    table_file: "aggregated_plant_consumer.csv",
};

pub const ANALYSES: [TrophicAnalysis; 2] = [PREDATOR_PREY, PLANT_CONSUMER];

/// Row-wise sum of the named columns. Species absent from the table add nothing.
pub fn aggregate(table: &PopulationTable, species: &[Species]) -> Vec<u32> {
    let mut total = vec![0u32; table.len()];
    for column in species.iter().filter_map(|s| table.column(s.name())) {
        for (sum, v) in total.iter_mut().zip(column) {
            *sum = sum.saturating_add(*v);
        }
    }
    total
}

impl TrophicAnalysis {
    /// Two-column table of the group totals, sharing `table`'s ticks.
    pub fn aggregate_table(&self, table: &PopulationTable) -> PopulationTable {
        PopulationTable {
            ticks: table.ticks.clone(),
            species: vec![self.first.name.to_string(), self.second.name.to_string()],
            columns: vec![
                aggregate(table, self.first.members),
                aggregate(table, self.second.members),
            ],
        }
    }

    /// Loads the aggregated pair into a fresh model.
    pub fn model(
        &self,
        aggregated: &PopulationTable,
        settings: AnalysisConfig,
    ) -> Result<TwoSpeciesModel, CoreError> {
        TwoSpeciesModel::load_series(aggregated, self.first.name, self.second.name, settings)
    }
}
