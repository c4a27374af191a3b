//! Per-role update rules, written as free functions over organism state.
//!
//! The world decides who to update and supplies counts and randomness;
//! these functions only compute.

pub mod foraging;
pub mod growth;
pub mod reproduction;
