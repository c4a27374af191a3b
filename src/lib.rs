//! # Trophica
//!
//! Predator-prey-plant ecosystem simulation with a two-species
//! Lotka-Volterra stability analyzer.
//!
//! The workspace crates are re-exported here so the runner and the
//! integration tests have a single import path.

pub mod app;

pub use trophica_core;
pub use trophica_data;
pub use trophica_io;

pub use app::{App, RunOptions};
