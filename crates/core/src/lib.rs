//! Paper Fold Core Library
//!
//! How many times must a sheet be folded in half before the stack is taller
//! than Mount Fuji, or reaches the Moon, or the nearest star? And how long
//! would the sheet have to be?
//!
//! The crate is a small set of pure functions:
//! - [`thickness_after_folds`]: t₀ × 2ⁿ
//! - [`minimum_folds_to_exceed`]: smallest n whose thickness exceeds a target
//! - [`required_length`]: Gallivan's sheet-length formula
//! - [`run_scenarios`]: the three steps above applied to a list of targets
//!
//! ```
//! use paper_fold_core::{run_scenarios, standard_targets, MaterialProperties};
//!
//! let outcomes = run_scenarios(&standard_targets(), &MaterialProperties::standard_paper())?;
//! assert_eq!(outcomes[0].target.name, "Mount Fuji");
//! assert_eq!(outcomes[0].result.fold_count, 26);
//! # Ok::<(), paper_fold_core::FoldError>(())
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Numeric models
pub mod model;
pub mod scenario;
pub mod targets;

// Re-export core types
pub use core_types::{FoldResult, FoldTarget, MaterialProperties, ScenarioOutcome};
pub use core_types::{Kilometers, LightYears, Meters};
pub use error::FoldError;

// Re-export models
pub use model::{minimum_folds_to_exceed, required_length, thickness_after_folds};
pub use scenario::{growth_series, length_series, run_scenario, run_scenarios};
pub use targets::standard_targets;
