//! Core data structures for the trophica simulation.

pub mod organism;
pub mod population;
pub mod species;
