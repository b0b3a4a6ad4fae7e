//! # Constants and type definitions for ephcore
//!
//! This module centralizes the **reference epochs**, **conversion factors**, and **unit
//! aliases** shared by the time-scale and reference-frame models of the crate.
//!
//! ## Overview
//!
//! - Reference epochs (J2000.0, B1950.0, MJD origin)
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians, days ↔ seconds)
//! - Type aliases documenting the unit carried by a bare `f64`
//!
//! The aliases carry no runtime check: a [`JulianDate`] may be in Universal Time or
//! in Ephemeris Time, and the caller is responsible for tracking which.

// -------------------------------------------------------------------------------------------------
// Reference epochs and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric reductions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Julian Date of J2000.0 (2000 January 1.5)
pub const J2000: f64 = 2451545.0;

/// Julian Date of B1950.0 (1950 January 0.923), origin of the FK4 catalogue epoch
pub const B1950: f64 = 2433282.42345905;

/// Number of days in a tropical century, as used by the FK4 equinox correction
pub const DAYS_PER_TROPICAL_CENTURY: f64 = 36524.2198782;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Number of days in a Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Conversion offset between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Centiseconds of arc in one degree
pub const CS_PER_DEGREE: Centisec = 360_000;

/// Full turn in centiseconds of arc
pub const CS_360: Centisec = 360 * CS_PER_DEGREE;

/// Half turn in centiseconds of arc
pub const CS_180: Centisec = 180 * CS_PER_DEGREE;

/// One zodiac sign (30°) in centiseconds of arc
pub const CS_30: Centisec = 30 * CS_PER_DEGREE;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle in centiseconds of arc (1/100″), integer
pub type Centisec = i32;
/// Time of day or sidereal time in hours
pub type Hours = f64;
/// Duration in days
pub type Days = f64;
/// Duration in seconds
pub type Seconds = f64;
/// Julian Date (days), either UT or ET depending on the caller
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

/// Julian centuries elapsed since J2000.0.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date.
///
/// Return
/// ------
/// * `(jd - J2000) / 36525`
#[inline]
pub fn centuries_since_j2000(jd: JulianDate) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}
