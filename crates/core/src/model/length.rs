//! Required Sheet Length
//!
//! Folding a sheet in the same direction wraps each new layer around the
//! curved edges of the layers beneath it, so the sheet must be long enough to
//! cover every bend. For a sheet of thickness t₀ folded n times the minimum
//! length is
//!
//! L = (π × t₀ / 6) × (2ⁿ + 4) × (2ⁿ − 1)
//!
//! # References
//! Gallivan, B.C. (2002). "How to Fold Paper in Half Twelve Times"
//! Historical Society of Pomona Valley

use std::f64::consts::PI;

use super::growth::{scale_by_power_of_two, thickness_after_folds, validate_positive};
use crate::core_types::units::Meters;
use crate::error::FoldError;

/// Calculate the minimum sheet length needed for `fold_count` folds
///
/// # Arguments
/// * `fold_count` - Number of folds (must be >= 0)
/// * `initial_thickness` - Sheet thickness t₀ in metres (must be > 0)
///
/// # Returns
/// Required length in metres. Zero folds consume no length, so `fold_count = 0`
/// returns exactly zero without evaluating the formula.
///
/// # Errors
/// - [`FoldError::InvalidInput`] for a negative fold count or a non-positive
///   or non-finite thickness
/// - [`FoldError::Overflow`] when the length exceeds the `f64` range
///   (beyond about 520 folds for paper)
pub fn required_length(fold_count: i32, initial_thickness: f64) -> Result<Meters, FoldError> {
    if fold_count < 0 {
        return Err(FoldError::negative_folds(fold_count));
    }
    let initial_thickness = validate_positive("initial_thickness", initial_thickness)?;

    if fold_count < 1 {
        return Ok(Meters::ZERO);
    }

    // Any stack beyond f64 needs an even longer sheet
    let thickness = thickness_after_folds(fold_count, initial_thickness)
        .map_err(|_| FoldError::overflow("required_length", fold_count))?;

    // (2ⁿ − 1) = (1 − 2⁻ⁿ) × 2ⁿ, with 2ⁿ applied last in chunks
    let base = (PI / 6.0) * (*thickness + 4.0 * initial_thickness) * (1.0 - 2f64.powi(-fold_count));
    let length = scale_by_power_of_two(base, fold_count);

    if length.is_finite() {
        Ok(Meters::new(length))
    } else {
        Err(FoldError::overflow("required_length", fold_count))
    }
}
