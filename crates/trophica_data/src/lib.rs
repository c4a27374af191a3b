//! Plain data types shared by every trophica crate.

pub mod data;

pub use data::organism::{Organism, OrganismId, Position};
pub use data::population::{Census, PopulationTable};
pub use data::species::{Diet, Role, Species};
