//! Angle reduction helpers shared by the series and conversion routines.
//!
//! Floating-point helpers work in degrees or radians. The `cs*` helpers work on integer
//! centiseconds of arc ([`Centisec`]), the fixed-point format of older chart software.

use crate::constants::{Centisec, Degree, Radian, CS_180, CS_30, CS_360, DPI};

/// Reduce an angle in degrees to `[0, 360)`.
///
/// Uses a truncating remainder followed by a single positive shift, so the
/// rounding matches the classic `fmod`-based reduction.
pub fn degnorm(x: Degree) -> Degree {
    let y = x % 360.0;
    if y < 0.0 {
        y + 360.0
    } else {
        y
    }
}

/// Reduce an angle in radians to `[0, 2π)`.
pub fn radnorm(x: Radian) -> Radian {
    let y = x % DPI;
    if y < 0.0 {
        y + DPI
    } else {
        y
    }
}

/// Bring an angle that is at most one turn out of range back into `[0, 2π)`.
///
/// Cheaper than [`radnorm`] and only valid for inputs in `[-2π, 4π)`.
pub fn angnorm(x: Radian) -> Radian {
    if x < 0.0 {
        x + DPI
    } else if x >= DPI {
        x - DPI
    } else {
        x
    }
}

/// Difference `p1 - p2` reduced to `[0, 360)`.
pub fn difdegn(p1: Degree, p2: Degree) -> Degree {
    degnorm(p1 - p2)
}

/// Signed difference `p1 - p2` reduced to `[-180, 180)`.
///
/// A half-turn difference comes back as `-180`.
pub fn difdeg2n(p1: Degree, p2: Degree) -> Degree {
    let dif = degnorm(p1 - p2);
    if dif >= 180.0 {
        dif - 360.0
    } else {
        dif
    }
}

/// Reduce an angle in centiseconds to `[0, 360°)`.
pub fn csnorm(p: Centisec) -> Centisec {
    p.rem_euclid(CS_360)
}

/// Difference `p1 - p2` in centiseconds reduced to `[0, 360°)`.
pub fn difcsn(p1: Centisec, p2: Centisec) -> Centisec {
    csnorm(p1 - p2)
}

/// Signed difference `p1 - p2` in centiseconds reduced to `[-180°, 180°)`.
pub fn difcs2n(p1: Centisec, p2: Centisec) -> Centisec {
    let dif = csnorm(p1 - p2);
    if dif >= CS_180 {
        dif - CS_360
    } else {
        dif
    }
}

/// Round a non-negative angle in centiseconds to whole arcseconds.
///
/// A value that would round up onto the first second of a 30° sign is rounded down
/// instead, so 29°59′59.6″ stays in its sign.
pub fn csroundsec(x: Centisec) -> Centisec {
    let t = (x + 50) / 100 * 100;
    if t > x && t % CS_30 == 0 {
        x / 100 * 100
    } else {
        t
    }
}

/// Round to the nearest integer, halves away from zero. No overflow check.
pub fn d2l(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5) as i64
    } else {
        -((0.5 - x) as i64)
    }
}

#[cfg(test)]
mod angles_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degnorm() {
        assert_eq!(degnorm(0.0), 0.0);
        assert_eq!(degnorm(360.0), 0.0);
        assert_eq!(degnorm(-90.0), 270.0);
        assert_eq!(degnorm(725.0), 5.0);
    }

    #[test]
    fn test_radnorm() {
        assert_relative_eq!(radnorm(-std::f64::consts::FRAC_PI_2), 1.5 * std::f64::consts::PI);
        assert_relative_eq!(radnorm(5.0 * std::f64::consts::PI), std::f64::consts::PI);
        assert!(radnorm(-1e-12) < DPI);
    }

    #[test]
    fn test_angnorm() {
        assert_relative_eq!(angnorm(-1.0), DPI - 1.0);
        assert_relative_eq!(angnorm(DPI + 0.5), 0.5, epsilon = 1e-15);
        assert_eq!(angnorm(1.0), 1.0);
    }

    #[test]
    fn test_differences() {
        assert_eq!(difdegn(10.0, 350.0), 20.0);
        assert_eq!(difdeg2n(10.0, 350.0), 20.0);
        assert_eq!(difdeg2n(350.0, 10.0), -20.0);
        assert_eq!(difdeg2n(190.0, 10.0), -180.0);
        assert_eq!(difdeg2n(10.0, 190.0), -180.0);
        assert_eq!(difdeg2n(189.5, 10.0), 179.5);
    }

    #[test]
    fn test_centisec_reductions() {
        use crate::constants::CS_PER_DEGREE;

        assert_eq!(csnorm(-1), CS_360 - 1);
        assert_eq!(csnorm(CS_360), 0);
        assert_eq!(csnorm(3 * CS_360 + 7), 7);

        assert_eq!(difcsn(10 * CS_PER_DEGREE, 350 * CS_PER_DEGREE), 20 * CS_PER_DEGREE);
        assert_eq!(difcs2n(350 * CS_PER_DEGREE, 10 * CS_PER_DEGREE), -20 * CS_PER_DEGREE);
        assert_eq!(difcs2n(190 * CS_PER_DEGREE, 10 * CS_PER_DEGREE), -CS_180);
    }

    #[test]
    fn test_csroundsec() {
        assert_eq!(csroundsec(1_234_567), 1_234_600);
        assert_eq!(csroundsec(1_234_549), 1_234_500);
        // 29°59'59.60" would round onto 30°00'00"
        assert_eq!(csroundsec(10_799_960), 10_799_900);
        // 59°59'59.60" likewise stays below the sign boundary
        assert_eq!(csroundsec(2 * CS_30 - 40), 2 * CS_30 - 100);
    }

    #[test]
    fn test_d2l() {
        assert_eq!(d2l(2.5), 3);
        assert_eq!(d2l(2.49), 2);
        assert_eq!(d2l(-2.5), -3);
        assert_eq!(d2l(-2.4), -2);
        assert_eq!(d2l(0.0), 0);
    }
}
