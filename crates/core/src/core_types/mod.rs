//! Core types and utilities

pub mod fold;
pub mod units;

pub use fold::{FoldResult, FoldTarget, MaterialProperties, ScenarioOutcome};
pub use units::*;
