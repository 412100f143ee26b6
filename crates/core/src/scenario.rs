//! Scenario runner
//!
//! Applies the same three-step pipeline to every target:
//! 1. Minimum folds to exceed the target distance
//! 2. Stack thickness at that fold count
//! 3. Sheet length needed for that fold count

use tracing::{debug, info};

use crate::core_types::fold::{FoldResult, FoldTarget, MaterialProperties, ScenarioOutcome};
use crate::core_types::units::Meters;
use crate::error::FoldError;
use crate::model::{minimum_folds_to_exceed, required_length, thickness_after_folds};

/// Convert a fold count from the search into the signed form the models take.
fn as_model_folds(fold_count: u32) -> Result<i32, FoldError> {
    i32::try_from(fold_count).map_err(|_| FoldError::overflow("fold_count", fold_count))
}

/// Fold a sheet of `material` until it exceeds `target`.
///
/// # Errors
/// Propagates [`FoldError`] from the growth and length models.
pub fn run_scenario(
    target: &FoldTarget,
    material: &MaterialProperties,
) -> Result<FoldResult, FoldError> {
    let thickness = *material.initial_thickness;

    let fold_count = minimum_folds_to_exceed(*target.distance, thickness)?;
    let folds = as_model_folds(fold_count)?;
    let final_thickness = thickness_after_folds(folds, thickness)?;
    let required_length = required_length(folds, thickness)?;

    debug!(
        "Scenario '{}': {} folds, thickness={:e}m, length={:e}m",
        target.name, fold_count, *final_thickness, *required_length
    );

    Ok(FoldResult {
        fold_count,
        final_thickness,
        required_length,
    })
}

/// Run every target through the pipeline, preserving input order.
///
/// # Errors
/// Returns the first [`FoldError`] raised by any target.
pub fn run_scenarios(
    targets: &[FoldTarget],
    material: &MaterialProperties,
) -> Result<Vec<ScenarioOutcome>, FoldError> {
    let outcomes = targets
        .iter()
        .map(|target| {
            run_scenario(target, material).map(|result| ScenarioOutcome {
                target: target.clone(),
                result,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Evaluated {} fold scenarios for t0={}m",
        outcomes.len(),
        *material.initial_thickness
    );
    Ok(outcomes)
}

/// Stack thickness for every fold count in `0..=max_folds`.
///
/// # Errors
/// [`FoldError::Overflow`] if any thickness in the range exceeds `f64`.
pub fn growth_series(
    max_folds: u32,
    material: &MaterialProperties,
) -> Result<Vec<(u32, Meters)>, FoldError> {
    (0..=max_folds)
        .map(|n| -> Result<_, FoldError> {
            let thickness = thickness_after_folds(as_model_folds(n)?, *material.initial_thickness)?;
            Ok((n, thickness))
        })
        .collect()
}

/// Required sheet length for every fold count in `1..=max_folds`.
///
/// # Errors
/// [`FoldError::Overflow`] if any length in the range exceeds `f64`.
pub fn length_series(
    max_folds: u32,
    material: &MaterialProperties,
) -> Result<Vec<(u32, Meters)>, FoldError> {
    (1..=max_folds)
        .map(|n| -> Result<_, FoldError> {
            let length = required_length(as_model_folds(n)?, *material.initial_thickness)?;
            Ok((n, length))
        })
        .collect()
}
