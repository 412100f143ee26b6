//! Value records passed through the fold pipeline

use serde::{Deserialize, Serialize};

use super::units::Meters;
use crate::error::FoldError;

/// A named height or distance to reach by folding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldTarget {
    /// Display name (e.g. "Mount Fuji")
    pub name: String,
    /// Height or distance to exceed
    pub distance: Meters,
}

impl FoldTarget {
    /// Create a target.
    ///
    /// # Errors
    /// [`FoldError::InvalidInput`] if `distance` is not finite and positive.
    pub fn new(name: impl Into<String>, distance: Meters) -> Result<Self, FoldError> {
        if !distance.is_positive_finite() {
            return Err(FoldError::non_positive("distance", *distance));
        }
        Ok(Self {
            name: name.into(),
            distance,
        })
    }
}

/// Physical properties of the sheet being folded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Thickness of the unfolded sheet
    pub initial_thickness: Meters,
}

impl MaterialProperties {
    /// Create material properties.
    ///
    /// # Errors
    /// [`FoldError::InvalidInput`] if `initial_thickness` is not finite and positive.
    pub fn new(initial_thickness: Meters) -> Result<Self, FoldError> {
        if !initial_thickness.is_positive_finite() {
            return Err(FoldError::non_positive(
                "initial_thickness",
                *initial_thickness,
            ));
        }
        Ok(Self { initial_thickness })
    }
}

/// Outcome of folding a sheet until it exceeds a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldResult {
    /// Minimum number of folds
    pub fold_count: u32,
    /// Stack thickness after `fold_count` folds
    pub final_thickness: Meters,
    /// Sheet length needed to perform `fold_count` folds
    pub required_length: Meters,
}

impl FoldResult {
    /// True if the folded stack is taller than the target
    pub fn exceeds(&self, target: &FoldTarget) -> bool {
        self.final_thickness > target.distance
    }

    /// How far the folded stack overshoots the target
    pub fn excess_over(&self, target: &FoldTarget) -> Meters {
        self.final_thickness - target.distance
    }

    /// Required sheet length as a multiple of the target distance
    pub fn length_to_distance_ratio(&self, target: &FoldTarget) -> f64 {
        self.required_length / target.distance
    }
}

/// A target paired with the result computed for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Target the scenario was run against
    pub target: FoldTarget,
    /// Folds, thickness and length computed for `target`
    pub result: FoldResult,
}
