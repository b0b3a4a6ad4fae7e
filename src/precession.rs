//! # Precession of the equinox and ecliptic
//!
//! Rotates equatorial cartesian vectors between the mean equator and equinox of an
//! epoch `J` and those of J2000.0, in either direction.
//!
//! The default path uses elementary rotations built from Laskar's (1986) long-term
//! expansions of the general precession in longitude `pA`, and of the node `W` and
//! inclination `i` of the moving ecliptic on the J2000 ecliptic. Two alternative
//! coefficient sets (Williams 1994, Simon et al. 1994) share the same rotation chain.
//! The IAU 1976 ζ, z, θ formula (Lieske et al. 1977) is available for epochs within
//! two centuries of J2000.
//!
//! Going from one arbitrary epoch to another is done in two steps through J2000, see
//! [`Precession::precess_between`].

use std::{fmt, str::FromStr};

use log::trace;
use nalgebra::{Vector3, Vector6};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{centuries_since_j2000, JulianDate, Radian, J2000, RADEG},
    ephcore_errors::EphCoreError,
    obliquity::obliquity,
};

/// Half-width, in Julian centuries, of the window where the IAU 1976 formula is used.
pub const IAU_1976_CENTURIES: f64 = 2.0;

/// Sense of a precession transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecessionDirection {
    /// From the mean equator and equinox of date to J2000.0
    ToJ2000,
    /// From J2000.0 to the mean equator and equinox of date
    FromJ2000,
}

/// Precession theory used by [`Precession`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecessionModel {
    #[default]
    Laskar1986,
    Williams1994,
    Simon1994,
    Iau1976,
}

impl PrecessionModel {
    /// Polynomial tables of the rotation chain. `Iau1976` falls back on Laskar's.
    fn coefficients(&self) -> &'static PrecessionCoefficients {
        match self {
            PrecessionModel::Williams1994 => &WILLIAMS_1994,
            PrecessionModel::Simon1994 => &SIMON_1994,
            PrecessionModel::Laskar1986 | PrecessionModel::Iau1976 => &LASKAR_1986,
        }
    }
}

impl fmt::Display for PrecessionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrecessionModel::Laskar1986 => "laskar1986",
            PrecessionModel::Williams1994 => "williams1994",
            PrecessionModel::Simon1994 => "simon1994",
            PrecessionModel::Iau1976 => "iau1976",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PrecessionModel {
    type Err = EphCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "laskar1986" | "laskar" => Ok(PrecessionModel::Laskar1986),
            "williams1994" | "williams" => Ok(PrecessionModel::Williams1994),
            "simon1994" | "simon" => Ok(PrecessionModel::Simon1994),
            "iau1976" | "iau" => Ok(PrecessionModel::Iau1976),
            _ => Err(EphCoreError::InvalidPrecessionModel(s.to_string())),
        }
    }
}

impl TryFrom<&str> for PrecessionModel {
    type Error = EphCoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Polynomials in Julian millennia, highest power first.
///
/// `p_a` is in arcseconds and lacks the final factor of τ; `node` and `inclination`
/// are in radians.
struct PrecessionCoefficients {
    p_a: [f64; 10],
    node: [f64; 11],
    inclination: [f64; 11],
}

// Terms of Laskar's expansion above τ⁴ are kept in the Williams and Simon sets.
static WILLIAMS_1994: PrecessionCoefficients = PrecessionCoefficients {
    p_a: [
        -8.66e-10, -4.759e-8, 2.424e-7, 1.3095e-5, 1.7451e-4, -1.8055e-3, -0.235316, 0.076,
        110.5407, 50287.70000,
    ],
    node: [
        6.6402e-16,
        -2.69151e-15,
        -1.547021e-12,
        7.521313e-12,
        1.9e-10,
        -3.54e-9,
        -1.8103e-7,
        1.26e-7,
        7.436169e-5,
        -0.04207794833,
        3.052115282424,
    ],
    inclination: [
        1.2147e-16,
        7.3759e-17,
        -8.26287e-14,
        2.503410e-13,
        2.4650839e-11,
        -5.4000441e-11,
        1.32115526e-9,
        -6.012e-7,
        -1.62442e-5,
        0.00227850649,
        0.0,
    ],
};

static SIMON_1994: PrecessionCoefficients = PrecessionCoefficients {
    p_a: [
        -8.66e-10, -4.759e-8, 2.424e-7, 1.3095e-5, 1.7451e-4, -1.8055e-3, -0.235316, 0.07732,
        111.2022, 50288.200,
    ],
    node: [
        6.6402e-16,
        -2.69151e-15,
        -1.547021e-12,
        7.521313e-12,
        1.9e-10,
        -3.54e-9,
        -1.8103e-7,
        2.579e-8,
        7.4379679e-5,
        -0.0420782900,
        3.0521126906,
    ],
    inclination: [
        1.2147e-16,
        7.3759e-17,
        -8.26287e-14,
        2.503410e-13,
        2.4650839e-11,
        -5.4000441e-11,
        1.32115526e-9,
        -5.99908e-7,
        -1.624383e-5,
        0.002278492868,
        0.0,
    ],
};

static LASKAR_1986: PrecessionCoefficients = PrecessionCoefficients {
    p_a: [
        -8.66e-10, -4.759e-8, 2.424e-7, 1.3095e-5, 1.7451e-4, -1.8055e-3, -0.235316, 0.07732,
        111.1971, 50290.966,
    ],
    node: [
        6.6402e-16,
        -2.69151e-15,
        -1.547021e-12,
        7.521313e-12,
        6.3190131e-10,
        -3.48388152e-9,
        -1.813065896e-7,
        2.75036225e-8,
        7.4394531426e-5,
        -0.042078604317,
        3.052112654975,
    ],
    inclination: [
        1.2147e-16,
        7.3759e-17,
        -8.26287e-14,
        2.503410e-13,
        2.4650839e-11,
        -5.4000441e-11,
        1.32115526e-9,
        -5.998737027e-7,
        -1.6242797091e-5,
        0.002278495537,
        0.0,
    ],
};

/// Horner evaluation, coefficients ordered from the highest power down.
fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs[1..]
        .iter()
        .fold(coeffs[0], |acc, coeff| acc * x + coeff)
}

/// Rotate `v` about the x axis: `y' = cos·y + sin·z`, `z' = −sin·y + cos·z`.
fn rotate_x(v: &Vector3<f64>, angle: Radian) -> Vector3<f64> {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x, c * v.y + s * v.z, -s * v.y + c * v.z)
}

/// Rotate `v` about the z axis: `x' = cos·x + sin·y`, `y' = −sin·x + cos·y`.
fn rotate_z(v: &Vector3<f64>, angle: Radian) -> Vector3<f64> {
    let (s, c) = angle.sin_cos();
    Vector3::new(c * v.x + s * v.y, -s * v.x + c * v.y, v.z)
}

/// Precession transform for one [`PrecessionModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precession {
    model: PrecessionModel,
}

impl Precession {
    pub fn new(model: PrecessionModel) -> Self {
        Precession { model }
    }

    pub fn model(&self) -> PrecessionModel {
        self.model
    }

    /// Precess an equatorial cartesian vector between the equinox of `jd` and J2000.0.
    ///
    /// Arguments
    /// ---------
    /// * `r`: equatorial cartesian vector, any length unit.
    /// * `jd`: Julian Date (ET) of the equinox of date.
    /// * `direction`: [`PrecessionDirection::ToJ2000`] or [`PrecessionDirection::FromJ2000`].
    ///
    /// Returns
    /// --------
    /// * The rotated vector. When `jd` is exactly J2000.0 the input is returned unchanged.
    ///
    /// Description
    /// -----------
    /// With τ in Julian millennia from J2000:
    /// 1. rotate about x from the source equator to the source ecliptic
    ///    (ε(jd) going to J2000, ε(J2000) coming from it);
    /// 2. rotate about z to the node of the moving ecliptic, by `W + pA` or `W`;
    /// 3. rotate about x by the inclination, `−i` or `+i`;
    /// 4. rotate about z back from the node, by `−W` or `−W − pA`;
    /// 5. rotate about x from the destination ecliptic to its equator.
    ///
    /// # See also
    /// * [`Precession::precess_between`] – arbitrary epoch to arbitrary epoch
    /// * [`Precession::precess_with_speed`] – position and velocity
    pub fn precess(
        &self,
        r: &Vector3<f64>,
        jd: JulianDate,
        direction: PrecessionDirection,
    ) -> Vector3<f64> {
        if jd == J2000 {
            return *r;
        }

        let t = centuries_since_j2000(jd);

        if self.model == PrecessionModel::Iau1976 {
            if t.abs() <= IAU_1976_CENTURIES {
                return precess_iau_1976(r, t, direction);
            }
            trace!(
                "IAU 1976 precession outside ±{IAU_1976_CENTURIES} centuries (T = {t}), using Laskar 1986"
            );
        }

        let coeffs = self.model.coefficients();
        let to_j2000 = direction == PrecessionDirection::ToJ2000;

        let eps_source = if to_j2000 {
            obliquity(jd)
        } else {
            obliquity(J2000)
        };
        let x = rotate_x(r, eps_source);

        let tau = t / 10.0;
        let p_a = horner(&coeffs.p_a, tau) * RADEG / 3600.0 * tau;
        let node = horner(&coeffs.node, tau);
        let inclination = horner(&coeffs.inclination, tau);

        let x = rotate_z(&x, if to_j2000 { node + p_a } else { node });
        let x = rotate_x(&x, if to_j2000 { -inclination } else { inclination });
        let x = rotate_z(&x, if to_j2000 { -node } else { -node - p_a });

        let eps_dest = if to_j2000 {
            obliquity(J2000)
        } else {
            obliquity(jd)
        };
        rotate_x(&x, -eps_dest)
    }

    /// Precess a position/velocity state: both halves go through the same rotation.
    ///
    /// The time derivative of the rotation itself is neglected, as it is orders of
    /// magnitude below the velocity of any solar-system body.
    pub fn precess_with_speed(
        &self,
        state: &Vector6<f64>,
        jd: JulianDate,
        direction: PrecessionDirection,
    ) -> Vector6<f64> {
        let pos = self.precess(&state.fixed_rows::<3>(0).into_owned(), jd, direction);
        let vel = self.precess(&state.fixed_rows::<3>(3).into_owned(), jd, direction);

        let mut out = Vector6::zeros();
        out.fixed_rows_mut::<3>(0).copy_from(&pos);
        out.fixed_rows_mut::<3>(3).copy_from(&vel);
        out
    }

    /// Precess a vector from the equinox of `from_jd` to the equinox of `to_jd`.
    ///
    /// Goes through J2000.0: first `from_jd → J2000`, then `J2000 → to_jd`.
    pub fn precess_between(
        &self,
        r: &Vector3<f64>,
        from_jd: JulianDate,
        to_jd: JulianDate,
    ) -> Vector3<f64> {
        if from_jd == to_jd {
            return *r;
        }
        let at_j2000 = self.precess(r, from_jd, PrecessionDirection::ToJ2000);
        self.precess(&at_j2000, to_jd, PrecessionDirection::FromJ2000)
    }
}

/// IAU 1976 ζ, z, θ rotation (Astronomical Almanac, p. B18).
fn precess_iau_1976(r: &Vector3<f64>, t: f64, direction: PrecessionDirection) -> Vector3<f64> {
    let zeta = ((0.017998 * t + 0.30188) * t + 2306.2181) * t * RADEG / 3600.0;
    let z = ((0.018203 * t + 1.09468) * t + 2306.2181) * t * RADEG / 3600.0;
    let theta = ((-0.041833 * t - 0.42665) * t + 2004.3109) * t * RADEG / 3600.0;

    let (sinth, costh) = theta.sin_cos();
    let (sin_zeta, cos_zeta) = zeta.sin_cos();
    let (sinz, cosz) = z.sin_cos();

    let a = cos_zeta * costh;
    let b = sin_zeta * costh;

    match direction {
        PrecessionDirection::FromJ2000 => Vector3::new(
            (a * cosz - sin_zeta * sinz) * r.x - (b * cosz + cos_zeta * sinz) * r.y
                - sinth * cosz * r.z,
            (a * sinz + sin_zeta * cosz) * r.x - (b * sinz - cos_zeta * cosz) * r.y
                - sinth * sinz * r.z,
            cos_zeta * sinth * r.x - sin_zeta * sinth * r.y + costh * r.z,
        ),
        PrecessionDirection::ToJ2000 => Vector3::new(
            (a * cosz - sin_zeta * sinz) * r.x
                + (a * sinz + sin_zeta * cosz) * r.y
                + cos_zeta * sinth * r.z,
            -(b * cosz + cos_zeta * sinz) * r.x
                - (b * sinz - cos_zeta * cosz) * r.y
                - sin_zeta * sinth * r.z,
            -sinth * cosz * r.x - sinth * sinz * r.y + costh * r.z,
        ),
    }
}
