//! Exponential Thickness Growth
//!
//! Every fold in half doubles the stack, so after `n` folds a sheet of
//! thickness `t₀` is `t₀ × 2ⁿ` thick. The minimum-fold search inverts this
//! relationship for a target height.
//!
//! # Model Overview
//!
//! 1. Thickness: t(n) = t₀ × 2ⁿ
//! 2. Minimum folds: smallest n with t(n) > H (strict)
//! 3. Closed form n ≈ ⌈log₂(H / t₀)⌉, corrected by direct evaluation because
//!    `log2` can round to the wrong side at exact powers of two

use crate::core_types::units::Meters;
use crate::error::FoldError;

/// Largest power of two applied in a single multiplication.
///
/// `2f64.powi(n)` is infinite for n > 1023 even when `t₀ × 2ⁿ` is not, so
/// large exponents are applied in chunks.
const MAX_DOUBLING_CHUNK: i32 = 1000;

/// Upper bound on any fold count that can separate two finite, positive
/// `f64` values (2⁻¹⁰⁷⁴ to 2¹⁰²⁴).
const MAX_MEANINGFUL_FOLDS: f64 = 2100.0;

pub(crate) fn validate_positive(parameter: &'static str, value: f64) -> Result<f64, FoldError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FoldError::non_positive(parameter, value))
    }
}

/// `value × 2^exponent` for `exponent >= 0`, infinite only if the product is.
///
/// Multiplying by a power of two is exact until the range is exhausted.
pub(crate) fn scale_by_power_of_two(value: f64, exponent: i32) -> f64 {
    let mut scaled = value;
    let mut remaining = exponent;
    while remaining > 0 {
        let step = remaining.min(MAX_DOUBLING_CHUNK);
        scaled *= 2f64.powi(step);
        remaining -= step;
    }
    scaled
}

/// Calculate thickness after `fold_count` folds
///
/// t(n) = t₀ × 2ⁿ
///
/// # Arguments
/// * `fold_count` - Number of folds (must be >= 0)
/// * `initial_thickness` - Sheet thickness t₀ in metres (must be > 0)
///
/// # Returns
/// Folded thickness in metres. `fold_count = 0` returns `initial_thickness`.
///
/// # Errors
/// - [`FoldError::InvalidInput`] for a negative fold count or a non-positive
///   or non-finite thickness
/// - [`FoldError::Overflow`] when the thickness exceeds the `f64` range
pub fn thickness_after_folds(fold_count: i32, initial_thickness: f64) -> Result<Meters, FoldError> {
    if fold_count < 0 {
        return Err(FoldError::negative_folds(fold_count));
    }
    let initial_thickness = validate_positive("initial_thickness", initial_thickness)?;
    let thickness = scale_by_power_of_two(initial_thickness, fold_count);

    if thickness.is_finite() {
        Ok(Meters::new(thickness))
    } else {
        Err(FoldError::overflow("thickness_after_folds", fold_count))
    }
}

/// Find the minimum number of folds whose thickness strictly exceeds a target
///
/// Returns the smallest `n >= 0` with `thickness_after_folds(n, t₀) > H`.
/// A target no taller than the sheet itself (`H <= t₀`) needs no folds.
///
/// # Arguments
/// * `target_height` - Target height or distance H in metres (must be > 0)
/// * `initial_thickness` - Sheet thickness t₀ in metres (must be > 0)
///
/// # Errors
/// - [`FoldError::InvalidInput`] if either argument is non-positive or non-finite
/// - [`FoldError::Overflow`] if exceeding H requires a thickness beyond the
///   `f64` range (only for H within a factor of two of `f64::MAX`)
pub fn minimum_folds_to_exceed(target_height: f64, initial_thickness: f64) -> Result<u32, FoldError> {
    let target_height = validate_positive("target_height", target_height)?;
    let initial_thickness = validate_positive("initial_thickness", initial_thickness)?;

    if target_height <= initial_thickness {
        return Ok(0);
    }

    // Closed-form estimate, as a difference of logs since H / t₀ can overflow
    let estimate = (target_height.log2() - initial_thickness.log2()).ceil();
    let mut folds = estimate.clamp(0.0, MAX_MEANINGFUL_FOLDS) as i32;

    // Strict excess: step up while the stack only reaches the target
    while *thickness_after_folds(folds, initial_thickness)? <= target_height {
        folds += 1;
    }
    // Minimality: step down while one fold fewer still exceeds
    while folds > 0 && *thickness_after_folds(folds - 1, initial_thickness)? > target_height {
        folds -= 1;
    }

    Ok(folds as u32)
}
