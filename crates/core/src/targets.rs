//! Reference targets and physical constants
//!
//! Distances are mean values in metres:
//! - Mount Fuji summit elevation: 3,776 m
//! - Earth–Moon mean distance: 384,400 km
//! - Proxima Centauri: 4.24 light years ≈ 4.0175e16 m

use crate::core_types::fold::{FoldTarget, MaterialProperties};
use crate::core_types::units::{Meters, METERS_PER_LIGHT_YEAR};

/// Thickness of ordinary printer paper (m)
pub const PAPER_THICKNESS_M: f64 = 0.00008;

/// Height of Mount Fuji (m)
pub const MOUNT_FUJI_HEIGHT_M: f64 = 3776.0;

/// Mean Earth–Moon distance (m)
pub const MOON_DISTANCE_M: f64 = 384_400_000.0;

/// Distance to Proxima Centauri (m)
pub const PROXIMA_CENTAURI_DISTANCE_M: f64 = 4.0175e16;

/// One light year (m)
pub const LIGHT_YEAR_M: f64 = METERS_PER_LIGHT_YEAR;

/// Equatorial circumference of the Earth, rounded (m)
pub const EARTH_CIRCUMFERENCE_M: f64 = 4.0e7;

/// Diameter of the Milky Way (light years)
pub const MILKY_WAY_DIAMETER_LY: f64 = 100_000.0;

/// Most folds achieved with ordinary paper by hand
pub const PRACTICAL_FOLD_LIMIT: u32 = 8;

/// World record fold count (specially prepared paper)
pub const RECORD_FOLD_COUNT: u32 = 13;

impl FoldTarget {
    /// Mount Fuji, the local landmark
    pub fn mount_fuji() -> Self {
        Self {
            name: "Mount Fuji".to_string(),
            distance: Meters::new(MOUNT_FUJI_HEIGHT_M),
        }
    }

    /// The Moon
    pub fn moon() -> Self {
        Self {
            name: "Moon".to_string(),
            distance: Meters::new(MOON_DISTANCE_M),
        }
    }

    /// Proxima Centauri, the nearest star
    pub fn proxima_centauri() -> Self {
        Self {
            name: "Proxima Centauri".to_string(),
            distance: Meters::new(PROXIMA_CENTAURI_DISTANCE_M),
        }
    }
}

impl MaterialProperties {
    /// Ordinary printer paper, 0.08 mm thick
    pub fn standard_paper() -> Self {
        Self {
            initial_thickness: Meters::new(PAPER_THICKNESS_M),
        }
    }
}

/// Landmark, lunar and interstellar targets, in that order
pub fn standard_targets() -> Vec<FoldTarget> {
    vec![
        FoldTarget::mount_fuji(),
        FoldTarget::moon(),
        FoldTarget::proxima_centauri(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_targets_order() {
        let names: Vec<_> = standard_targets().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Mount Fuji", "Moon", "Proxima Centauri"]);
    }

    #[test]
    fn test_presets_satisfy_invariants() {
        for target in standard_targets() {
            assert!(target.distance.is_positive_finite(), "{}", target.name);
        }
        assert!(MaterialProperties::standard_paper()
            .initial_thickness
            .is_positive_finite());
    }

    #[test]
    fn test_proxima_in_light_years() {
        let ly = FoldTarget::proxima_centauri().distance.to_light_years();
        assert!((*ly - 4.24).abs() < 0.01, "Distance was {} ly", *ly);
    }
}
