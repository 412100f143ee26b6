//! Semantic unit types for lengths and distances
//!
//! Fold calculations span from a sheet of paper (tens of micrometres) to
//! interstellar distances (tens of petametres), so every length is stored as
//! `f64`. The newtypes keep metres, kilometres and light years from being
//! mixed by accident.
//!
//! # Design Philosophy
//! - All types wrap `f64`; the exponential growth exceeds `f32` range quickly
//! - Total ordering via `Ord` (NaN sorts above every other value)
//! - Explicit conversion methods between related types
//! - Serde support so results can be emitted as JSON
//!
//! # Usage
//! ```
//! use paper_fold_core::core_types::units::{LightYears, Meters};
//!
//! let moon = Meters::new(384_400_000.0);
//! assert!((*moon.to_kilometers() - 384_400.0).abs() < 1e-6);
//!
//! let star: LightYears = Meters::new(4.0175e16).into();
//! assert!((*star - 4.246).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Sub};

/// Metres in one light year (IAU rounded value)
pub const METERS_PER_LIGHT_YEAR: f64 = 9.461e15;

/// Distance or thickness in metres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Zero length
    pub const ZERO: Meters = Meters(0.0);

    /// Create a new length in metres.
    ///
    /// Signed values are allowed (an excess over a target can be negative);
    /// positivity is checked where the model requires it.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the value is finite and strictly positive
    #[inline]
    #[must_use]
    pub fn is_positive_finite(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Convert to kilometres
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / 1000.0)
    }

    /// Convert to light years
    #[inline]
    #[must_use]
    pub fn to_light_years(self) -> LightYears {
        LightYears(self.0 / METERS_PER_LIGHT_YEAR)
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl From<Meters> for f64 {
    fn from(m: Meters) -> f64 {
        m.0
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters {
        Meters(self.0 - rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters {
        Meters(self.0 / rhs)
    }
}

/// Ratio of two lengths (dimensionless)
impl Div for Meters {
    type Output = f64;
    fn div(self, rhs: Meters) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward precision so callers can write `{:.0}` or `{:.2e}`
        if let Some(precision) = f.precision() {
            write!(f, "{:.*} m", precision, self.0)
        } else {
            write!(f, "{} m", self.0)
        }
    }
}

impl fmt::LowerExp for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*e} m", precision, self.0)
        } else {
            write!(f, "{:e} m", self.0)
        }
    }
}

/// Distance in kilometres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilometers {
    /// Create a new distance in kilometres
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    /// Convert to metres
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * 1000.0)
    }
}

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Kilometers {
        m.to_kilometers()
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} km", self.0)
    }
}

/// Distance in light years
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct LightYears(f64);

impl Deref for LightYears {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl LightYears {
    /// Create a new distance in light years
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        LightYears(value)
    }

    /// Convert to metres
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_LIGHT_YEAR)
    }
}

impl From<Meters> for LightYears {
    fn from(m: Meters) -> LightYears {
        m.to_light_years()
    }
}

impl fmt::Display for LightYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ly", self.0)
    }
}
