//! Console report for fold scenarios

use std::io::{self, Write};

use paper_fold_core::targets::{
    EARTH_CIRCUMFERENCE_M, LIGHT_YEAR_M, MILKY_WAY_DIAMETER_LY, PRACTICAL_FOLD_LIMIT,
    RECORD_FOLD_COUNT,
};
use paper_fold_core::{MaterialProperties, Meters, ScenarioOutcome};

/// Lengths at or above this are printed in scientific notation
const SCIENTIFIC_THRESHOLD_M: f64 = 1e9;

/// Format a number with thousands separators, e.g. `5,368.71`.
fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Human-scale lengths grouped, astronomical ones in scientific notation
fn format_length(length: Meters) -> String {
    if length.abs() >= SCIENTIFIC_THRESHOLD_M {
        format!("{:.2e} m", *length)
    } else {
        format!("{} m", format_grouped(*length, 2))
    }
}

/// Write the full text report.
///
/// # Errors
/// Propagates write failures from `out`.
pub(crate) fn write_report(
    out: &mut impl Write,
    outcomes: &[ScenarioOutcome],
    material: &MaterialProperties,
) -> io::Result<()> {
    writeln!(out, "=== Paper Fold Calculator ===")?;
    writeln!(
        out,
        "How many folds until a sheet of {} m paper passes each target?\n",
        *material.initial_thickness
    )?;

    write_fold_counts(out, outcomes)?;
    write_cosmic_comparison(out, outcomes)?;
    write_lengths(out, outcomes)?;
    write_summary(out, outcomes)
}

fn write_fold_counts(out: &mut impl Write, outcomes: &[ScenarioOutcome]) -> io::Result<()> {
    writeln!(out, "=== Folds Required ===")?;
    writeln!(
        out,
        "{:<18} | {:>16} | {:>5} | {:>16} | {:>7} | {:>16}",
        "Target", "Distance", "Folds", "Final thickness", "Exceeds", "Excess"
    )?;
    writeln!(out, "{}", "-".repeat(94))?;

    for ScenarioOutcome { target, result } in outcomes {
        writeln!(
            out,
            "{:<18} | {:>16} | {:>5} | {:>16} | {:>7} | {:>16}",
            target.name,
            format_length(target.distance),
            result.fold_count,
            format_length(result.final_thickness),
            if result.exceeds(target) { "yes" } else { "no" },
            format_length(result.excess_over(target)),
        )?;
    }
    writeln!(out)
}

fn write_cosmic_comparison(out: &mut impl Write, outcomes: &[ScenarioOutcome]) -> io::Result<()> {
    writeln!(out, "=== Cosmic Comparison ===")?;
    for ScenarioOutcome { target, .. } in outcomes {
        writeln!(
            out,
            "  {:<18} {:.3e} light years",
            target.name,
            *target.distance.to_light_years()
        )?;
    }
    writeln!(out, "  1 light year       ~ {} m", format_grouped(LIGHT_YEAR_M, 0))?;
    writeln!(
        out,
        "  Milky Way diameter ~ {} light years\n",
        format_grouped(MILKY_WAY_DIAMETER_LY, 0)
    )
}

fn write_lengths(out: &mut impl Write, outcomes: &[ScenarioOutcome]) -> io::Result<()> {
    writeln!(out, "=== Paper Length Required ===")?;
    for ScenarioOutcome { target, result } in outcomes {
        writeln!(
            out,
            "  {:<18} ({:>2} folds): {}",
            target.name,
            result.fold_count,
            format_length(result.required_length)
        )?;
    }

    writeln!(
        out,
        "\n  Earth circumference ~ {} m",
        format_grouped(EARTH_CIRCUMFERENCE_M, 0)
    )?;
    for ScenarioOutcome { target, result } in outcomes {
        writeln!(
            out,
            "  {:<18} paper = {:.2e} x the target distance, {:.2e} x Earth's circumference, {:.2e} light years",
            target.name,
            result.length_to_distance_ratio(target),
            *result.required_length / EARTH_CIRCUMFERENCE_M,
            *result.required_length.to_light_years(),
        )?;
    }
    writeln!(out)
}

fn write_summary(out: &mut impl Write, outcomes: &[ScenarioOutcome]) -> io::Result<()> {
    writeln!(out, "=== Summary ===")?;
    writeln!(out, "Target             | Folds | Paper length")?;
    writeln!(out, "-------------------|-------|-------------")?;
    for ScenarioOutcome { target, result } in outcomes {
        writeln!(
            out,
            "{:<18} | {:>5} | {}",
            target.name,
            result.fold_count,
            format_length(result.required_length)
        )?;
    }

    writeln!(out, "\nNotes:")?;
    writeln!(
        out,
        "  - Ordinary paper cannot be folded more than {}-{} times by hand",
        PRACTICAL_FOLD_LIMIT - 1,
        PRACTICAL_FOLD_LIMIT
    )?;
    writeln!(
        out,
        "  - The record is {} folds, using specially prepared paper",
        RECORD_FOLD_COUNT
    )?;
    writeln!(
        out,
        "  - These are mathematical limits showing exponential growth, not a physical plan"
    )
}
