//! # Sidereal time
//!
//! Apparent sidereal time at Greenwich, from the IAU 1976 expression of mean sidereal
//! time at 0h UT (Astronomical Almanac, p. B6) plus the rotation accumulated since
//! midnight and the equation of the equinoxes.

use crate::{
    constants::{
        Degree, Hours, JulianDate, Radian, DAYS_PER_CENTURY, DEGRAD, J2000, RADEG,
        SECONDS_PER_DAY,
    },
    delta_t::DeltaT,
    nutation::NutationModel,
    obliquity::obliquity,
};

/// Compute the apparent sidereal time at Greenwich for given obliquity and nutation.
///
/// Arguments
/// ---------
/// * `jd_ut`: Julian Date in Universal Time.
/// * `eps`: obliquity of the ecliptic, in degrees.
/// * `nut`: nutation in longitude Δψ, in degrees.
///
/// Returns
/// --------
/// * Sidereal time in hours, in `[0, 24)`.
///
/// Description
/// -----------
/// 1. Split `jd_ut` into the preceding midnight `jd0` and the seconds elapsed since.
/// 2. Mean sidereal time at `jd0`, with `T0 = (jd0 − J2000) / 36525`:
///    `24110.54841 + 8640184.812866·T0 + 0.093104·T0² − 6.2e-6·T0³` seconds.
/// 3. Add the elapsed seconds scaled by the ratio of the sidereal to the solar day
///    at `T0`, and the equation of the equinoxes `240·nut·cos(eps)` (Δψ in degrees
///    to seconds of time).
/// 4. Reduce modulo one day and convert to hours.
///
/// # See also
/// * [`sidtime`] – obtains `eps` and `nut` from the models of this crate
pub fn sidtime0(jd_ut: JulianDate, eps: Degree, nut: Degree) -> Hours {
    let mut jd0 = jd_ut.floor();
    let mut secs = jd_ut - jd0;
    if secs < 0.5 {
        jd0 -= 0.5;
        secs += 0.5;
    } else {
        jd0 += 0.5;
        secs -= 0.5;
    }
    secs *= SECONDS_PER_DAY;

    let t0 = (jd0 - J2000) / DAYS_PER_CENTURY;

    // equation of the equinoxes, seconds of time
    let eqeq = 240.0 * nut * (eps * RADEG).cos();

    // mean sidereal time at 0h UT, seconds
    let gmst0 = ((-6.2e-6 * t0 + 9.3104e-2) * t0 + 8640184.812866) * t0 + 24110.54841;

    // mean solar days per sidereal day at t0
    let msday = 1.0
        + ((-1.86e-5 * t0 + 0.186208) * t0 + 8640184.812866)
            / (SECONDS_PER_DAY * DAYS_PER_CENTURY);

    let gmst = gmst0 + msday * secs + eqeq;
    let gmst = gmst - SECONDS_PER_DAY * (gmst / SECONDS_PER_DAY).floor();

    gmst / 3600.0
}

/// Apparent sidereal time at Greenwich with the default nutation series.
///
/// Arguments
/// ---------
/// * `jd_ut`: Julian Date in Universal Time.
/// * `delta_t`: ΔT calculator used to get the Ephemeris Time of `jd_ut`.
///
/// Returns
/// --------
/// * Sidereal time in hours, in `[0, 24)`.
pub fn sidtime(jd_ut: JulianDate, delta_t: &DeltaT) -> Hours {
    sidtime_with_nutation(jd_ut, delta_t, &NutationModel::default())
}

/// Apparent sidereal time at Greenwich with an explicit nutation series.
///
/// The obliquity and nutation are evaluated at `jd_ut + ΔT`. The obliquity handed to
/// [`sidtime0`] is the true one, ε + Δε.
pub fn sidtime_with_nutation(
    jd_ut: JulianDate,
    delta_t: &DeltaT,
    nutation: &NutationModel,
) -> Hours {
    let jd_et = jd_ut + delta_t.delta_t(jd_ut);
    let eps = obliquity(jd_et) * DEGRAD;
    let nut = nutation.nutation(jd_et);

    sidtime0(jd_ut, eps + nut.deps * DEGRAD, nut.dpsi * DEGRAD)
}

/// Equation of the equinoxes Δψ·cos ε, in radians.
///
/// Arguments
/// ---------
/// * `jd_et`: Julian Date in Ephemeris Time.
/// * `nutation`: nutation series.
///
/// Returns
/// --------
/// * Apparent minus mean sidereal time, as an angle. ε is the true obliquity.
pub fn equation_of_equinoxes(jd_et: JulianDate, nutation: &NutationModel) -> Radian {
    let nut = nutation.nutation(jd_et);
    nut.dpsi * (obliquity(jd_et) + nut.deps).cos()
}

#[cfg(test)]
mod sidereal_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sidtime0_reference() {
        assert_relative_eq!(
            sidtime0(J2000, 23.4392911, 0.0),
            18.69737455833333,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            sidtime0(J2000 + 1.0, 23.4392911, 0.0),
            18.76308438275244,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_sidtime0_daily_advance() {
        let day0 = sidtime0(2455000.3, 23.44, 0.0);
        let day1 = sidtime0(2455001.3, 23.44, 0.0);
        // 3m 56.5554s of sidereal advance per solar day
        assert_relative_eq!(day1 - day0, 0.0657098, epsilon = 1e-6);
    }

    #[test]
    fn test_sidtime0_range() {
        for i in 0..500 {
            let st = sidtime0(2451000.0 + i as f64 * 0.37, 23.44, -0.004);
            assert!((0.0..24.0).contains(&st), "{st}");
        }
    }

    #[test]
    fn test_sidtime0_equation_of_equinoxes() {
        // one degree of nutation in longitude is 240 s of time scaled by cos eps
        let mean = sidtime0(J2000, 0.0, 0.0);
        let apparent = sidtime0(J2000, 0.0, 1.0 / 240.0);
        assert_relative_eq!((apparent - mean) * 3600.0, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sidtime_reference() {
        let dt = DeltaT::default();
        assert_relative_eq!(sidtime(J2000, &dt), 18.697137991558865, epsilon = 1e-10);
        assert_relative_eq!(sidtime(2451544.5, &dt), 6.664283082644745, epsilon = 1e-10);
    }

    #[test]
    fn test_equation_of_equinoxes() {
        let eqeq = equation_of_equinoxes(J2000, &NutationModel::default());
        // about -0.85 s of time at J2000
        let seconds = eqeq * DEGRAD * 240.0;
        assert_relative_eq!(seconds, -0.8516407442326946, epsilon = 1e-9);
    }
}
