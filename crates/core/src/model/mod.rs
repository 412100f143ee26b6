//! Fold models: thickness growth and required sheet length

pub mod growth;
pub mod length;

pub use growth::{minimum_folds_to_exceed, thickness_after_folds};
pub use length::required_length;
