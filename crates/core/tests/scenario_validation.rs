//! Scenario Validation Test Suite
//!
//! Checks the fold models against hand-computed values for the three
//! reference targets and the documented edge cases.
//!
//! Run tests with: `cargo test --test scenario_validation`

use approx::assert_relative_eq;
use paper_fold_core::{
    minimum_folds_to_exceed, required_length, run_scenarios, standard_targets,
    targets::{LIGHT_YEAR_M, MOON_DISTANCE_M, PAPER_THICKNESS_M},
    thickness_after_folds, FoldError, FoldTarget, MaterialProperties, Meters,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("paper_fold_core=debug")
        .with_test_writer()
        .try_init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: MOUNT FUJI
// ═══════════════════════════════════════════════════════════════════════════════

/// 3776 / 0.00008 = 4.72e7 lies between 2²⁵ (3.36e7) and 2²⁶ (6.71e7)
#[test]
fn test_fuji_requires_26_folds() {
    let folds = minimum_folds_to_exceed(3776.0, PAPER_THICKNESS_M).unwrap();
    assert_eq!(folds, 26);

    let at_26 = *thickness_after_folds(26, PAPER_THICKNESS_M).unwrap();
    let at_25 = *thickness_after_folds(25, PAPER_THICKNESS_M).unwrap();
    assert_relative_eq!(at_26, 5368.70912, max_relative = 1e-12);
    assert_relative_eq!(at_25, 2684.35456, max_relative = 1e-12);

    // Minimality by direct computation
    assert!(at_26 > 3776.0);
    assert!(at_25 <= 3776.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: THE MOON
// ═══════════════════════════════════════════════════════════════════════════════

/// t₀ × 2^(N-1) <= H < t₀ × 2^N must bracket the lunar distance
#[test]
fn test_moon_fold_count_brackets_distance() {
    let n = minimum_folds_to_exceed(MOON_DISTANCE_M, PAPER_THICKNESS_M).unwrap() as i32;

    let below = *thickness_after_folds(n - 1, PAPER_THICKNESS_M).unwrap();
    let above = *thickness_after_folds(n, PAPER_THICKNESS_M).unwrap();
    assert!(below <= MOON_DISTANCE_M, "t(n-1) = {below}");
    assert!(MOON_DISTANCE_M < above, "t(n) = {above}");

    // 0.00008 × 2⁴² = 3.518e8 m is still short of 3.844e8 m
    assert_eq!(n, 43);
}

/// Paper for the Moon is many times the Earth–Moon distance
#[test]
fn test_moon_length_dwarfs_distance() {
    let length = *required_length(43, PAPER_THICKNESS_M).unwrap();
    assert!(length / MOON_DISTANCE_M > 1e9, "Length was {length:e} m");
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: FULL SCENARIO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_standard_scenario_pipeline() {
    init_tracing();

    let paper = MaterialProperties::standard_paper();
    let outcomes = run_scenarios(&standard_targets(), &paper).unwrap();
    assert_eq!(outcomes.len(), 3);

    for outcome in &outcomes {
        let n = outcome.result.fold_count as i32;
        assert_eq!(
            outcome.result.final_thickness,
            thickness_after_folds(n, PAPER_THICKNESS_M).unwrap()
        );
        assert_eq!(
            outcome.result.required_length,
            required_length(n, PAPER_THICKNESS_M).unwrap()
        );
        assert!(outcome.result.exceeds(&outcome.target));
    }

    // Proxima Centauri: 69 folds, a sheet roughly 1.5e21 light years long
    let star = &outcomes[2];
    assert_eq!(star.result.fold_count, 69);
    let length_ly = *star.result.required_length / LIGHT_YEAR_M;
    assert!(length_ly > 1e21 && length_ly < 2e21, "Length was {length_ly:e} ly");
}

#[test]
fn test_custom_material() {
    // 1 mm card: 3776 / 0.001 = 3.776e6, between 2²¹ and 2²²
    let card = MaterialProperties::new(Meters::new(0.001)).unwrap();
    let outcomes = run_scenarios(&[FoldTarget::mount_fuji()], &card).unwrap();
    assert_eq!(outcomes[0].result.fold_count, 22);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: ERROR HANDLING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_invalid_inputs_are_rejected() {
    assert!(matches!(
        minimum_folds_to_exceed(-5.0, 1.0),
        Err(FoldError::InvalidInput {
            parameter: "target_height",
            ..
        })
    ));
    assert!(matches!(
        required_length(-1, 1.0),
        Err(FoldError::InvalidInput {
            parameter: "fold_count",
            ..
        })
    ));
}

#[test]
fn test_overflow_is_reported_not_wrapped() {
    assert!(matches!(
        thickness_after_folds(2000, 1.0),
        Err(FoldError::Overflow { fold_count: 2000, .. })
    ));
    assert!(matches!(
        required_length(600, 1.0),
        Err(FoldError::Overflow { fold_count: 600, .. })
    ));
}
