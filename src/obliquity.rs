//! # Obliquity of the ecliptic
//!
//! Mean obliquity ε of the ecliptic at an arbitrary epoch, together with a small
//! [`Obliquity`] bundle carrying its sine and cosine for the rotations that consume it.
//!
//! Two expansions are used:
//! - within two centuries of J2000, the IAU 1976 cubic (Lieske et al. 1977, as given
//!   on page B18 of the Astronomical Almanac);
//! - outside that window, Laskar's (1986) degree-10 polynomial in Julian millennia.
//!
//! The two branches are **not** continuous at |T| = 2 centuries; the jump (about
//! 0.015″) is part of the reference behavior and is kept as is.

use serde::{Deserialize, Serialize};

use crate::constants::{centuries_since_j2000, JulianDate, Radian, DEGRAD, RADEG};

/// Laskar (1986) coefficients in arcseconds, highest power first, in Julian millennia.
const LASKAR_1986: [f64; 11] = [
    2.45e-10, 5.79e-9, 2.787e-7, 7.12e-7, -3.905e-5, -2.4967e-3, -5.138e-3, 1.99925, -0.0155,
    -468.093, 84381.448,
];

/// Compute the mean obliquity of the ecliptic at a given epoch.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (Ephemeris Time).
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// With `T = (jd - 2451545) / 36525`:
///
/// ```text
/// |T| <  2 : ε = ((( 1.813e-3·T − 5.9e-4)·T − 46.8150)·T + 84381.448)  ["]
/// |T| >= 2 : τ = T/10, ε = Laskar degree-10 polynomial in τ            ["]
/// ```
///
/// Both polynomials are evaluated with Horner's scheme.
///
/// # See also
/// * [`Obliquity::at`] – the same value bundled with its sine and cosine
/// * [`crate::precession::Precession::precess`] – rotates through the ecliptic of the source/target epoch
pub fn obliquity(jd: JulianDate) -> Radian {
    let t = centuries_since_j2000(jd);

    if t.abs() < 2.0 {
        (((1.813e-3 * t - 5.9e-4) * t - 46.8150) * t + 84381.448) * RADEG / 3600.0
    } else {
        let tau = t / 10.0;
        let eps = LASKAR_1986[1..]
            .iter()
            .fold(LASKAR_1986[0], |acc, coeff| acc * tau + coeff);
        eps * RADEG / 3600.0
    }
}

/// Obliquity of the ecliptic at one epoch, with its sine and cosine.
///
/// A pure function of `epoch`: nothing is cached between calls, build a new value
/// whenever the epoch changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obliquity {
    pub epoch: JulianDate,
    pub eps: Radian,
    pub sin_eps: f64,
    pub cos_eps: f64,
}

impl Obliquity {
    /// Evaluate [`obliquity`] at `epoch` and precompute its sine and cosine.
    pub fn at(epoch: JulianDate) -> Self {
        let eps = obliquity(epoch);
        let (sin_eps, cos_eps) = eps.sin_cos();
        Obliquity {
            epoch,
            eps,
            sin_eps,
            cos_eps,
        }
    }

    /// The obliquity in degrees.
    pub fn in_degrees(&self) -> f64 {
        self.eps * DEGRAD
    }
}
