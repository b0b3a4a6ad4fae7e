//! # Chebyshev series evaluation
//!
//! Clenshaw evaluation of a Chebyshev series and of its first derivative, as stored in
//! ephemeris files, plus [`ChebyshevSegment`], one stored segment with its time span.
//!
//! The series convention is the one of those files: the constant term enters with
//! half weight,
//!
//! ```text
//! f(x) = c₀/2 + Σ_{k≥1} c_k·T_k(x)
//! ```
//!
//! and the recurrences are run from the highest coefficient down, in that exact order,
//! so that the rounding matches the files' reference evaluations.

use crate::{constants::JulianDate, ephcore_errors::EphCoreError};

/// Evaluate a Chebyshev series at `x ∈ [−1, 1]`.
///
/// Arguments
/// ---------
/// * `x`: normalized abscissa.
/// * `coeffs`: series coefficients `c₀ … c_{n−1}`.
///
/// Return
/// ------
/// * `(b₀ − b₂) / 2` with `b_k = 2x·b_{k+1} − b_{k+2} + c_k`.
/// * A single coefficient is a constant series and is returned as is, for any `x`.
///   Padding it with zeros brings back the half weight: `[c₀]` gives `c₀` but
///   `[c₀, 0.0]` gives `c₀/2`.
/// * An empty series evaluates to 0.
pub fn evaluate(x: f64, coeffs: &[f64]) -> f64 {
    if let [c0] = coeffs {
        return *c0;
    }

    let x2 = x * 2.0;
    let mut br = 0.0;
    let mut brp2 = 0.0;
    let mut brpp = 0.0;

    for &c in coeffs.iter().rev() {
        brp2 = brpp;
        brpp = br;
        br = x2 * brpp - brp2 + c;
    }

    (br - brp2) * 0.5
}

/// Evaluate the derivative, with respect to `x`, of a Chebyshev series at `x ∈ [−1, 1]`.
///
/// Each coefficient `c_k` is weighted by `2k` and accumulated through a second
/// backward recurrence, halved at the end as in [`evaluate`].
pub fn evaluate_derivative(x: f64, coeffs: &[f64]) -> f64 {
    let x2 = x * 2.0;
    let mut bf = 0.0;
    let mut bj = 0.0;
    let mut xjp2 = 0.0;
    let mut xjpl = 0.0;
    let mut bjp2 = 0.0;
    let mut bjpl = 0.0;

    for (j, &c) in coeffs.iter().enumerate().skip(1).rev() {
        let dj = (j + j) as f64;
        let xj = c * dj + xjp2;
        bj = x2 * bjpl - bjp2 + xj;
        bf = bjp2;
        bjp2 = bjpl;
        bjpl = bj;
        xjp2 = xjpl;
        xjpl = xj;
    }

    (bj - bf) * 0.5
}

/// One Chebyshev segment of a stored ephemeris: a series valid over `[start, end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevSegment {
    start: JulianDate,
    end: JulianDate,
    coefficients: Vec<f64>,
}

impl ChebyshevSegment {
    /// Build a segment, checking that its time span and coefficient list make sense.
    ///
    /// Return
    /// ------
    /// * [`EphCoreError::InvalidChebyshevSegment`] when `start >= end`, either bound
    ///   is not finite, or `coefficients` is empty.
    pub fn new(
        start: JulianDate,
        end: JulianDate,
        coefficients: Vec<f64>,
    ) -> Result<Self, EphCoreError> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(EphCoreError::InvalidChebyshevSegment(format!(
                "empty time span [{start}, {end}]"
            )));
        }
        if coefficients.is_empty() {
            return Err(EphCoreError::InvalidChebyshevSegment(
                "no coefficients".to_string(),
            ));
        }
        Ok(ChebyshevSegment {
            start,
            end,
            coefficients,
        })
    }

    pub fn start(&self) -> JulianDate {
        self.start
    }

    pub fn end(&self) -> JulianDate {
        self.end
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn contains(&self, jd: JulianDate) -> bool {
        jd >= self.start && jd <= self.end
    }

    /// Map `jd` onto `[−1, 1]`, or fail if it lies outside the segment.
    pub fn normalized_time(&self, jd: JulianDate) -> Result<f64, EphCoreError> {
        if !self.contains(jd) {
            return Err(EphCoreError::OutsideChebyshevSegment {
                jd,
                start: self.start,
                end: self.end,
            });
        }
        let half_span = 0.5 * (self.end - self.start);
        let mid = self.start + half_span;
        Ok((jd - mid) / half_span)
    }

    /// Value of the series at `jd`.
    ///
    /// A one-coefficient segment returns its coefficient, while longer segments weight
    /// `c₀` by one half (see [`evaluate`]).
    pub fn value(&self, jd: JulianDate) -> Result<f64, EphCoreError> {
        let x = self.normalized_time(jd)?;
        Ok(evaluate(x, &self.coefficients))
    }

    /// Time derivative of the series at `jd`, per day.
    pub fn rate(&self, jd: JulianDate) -> Result<f64, EphCoreError> {
        let x = self.normalized_time(jd)?;
        Ok(evaluate_derivative(x, &self.coefficients) * 2.0 / (self.end - self.start))
    }
}

#[cfg(test)]
mod chebyshev_test {
    use super::*;
    use approx::assert_relative_eq;

    const COEFFS: [f64; 4] = [1.0, 0.5, -0.25, 0.125];

    /// Direct sum with the half-weight constant term.
    fn direct(x: f64, coeffs: &[f64]) -> f64 {
        let mut t_prev = 1.0;
        let mut t = x;
        let mut sum = 0.5 * coeffs[0];
        for (k, &c) in coeffs.iter().enumerate().skip(1) {
            if k > 1 {
                let next = 2.0 * x * t - t_prev;
                t_prev = t;
                t = next;
            }
            sum += c * t;
        }
        sum
    }

    #[test]
    fn test_evaluate_reference() {
        assert_relative_eq!(evaluate(0.3, &COEFFS), 0.756, epsilon = 1e-15);
        for i in 0..=20 {
            let x = -1.0 + 0.1 * i as f64;
            assert_relative_eq!(evaluate(x, &COEFFS), direct(x, &COEFFS), epsilon = 1e-14);
        }
    }

    #[test]
    fn test_constant_series() {
        for x in [-1.0, -0.3, 0.0, 0.8, 1.0] {
            assert_eq!(evaluate(x, &[4.2]), 4.2);
            assert_eq!(evaluate_derivative(x, &[4.2]), 0.0);
            // a padded constant term is back to half weight
            assert_eq!(evaluate(x, &[4.2, 0.0]), 2.1);
        }
        assert_eq!(evaluate(0.5, &[]), 0.0);
    }

    #[test]
    fn test_derivative_reference() {
        assert_relative_eq!(evaluate_derivative(0.3, &COEFFS), -0.04, epsilon = 1e-15);

        let h = 1e-5;
        for x in [-0.9, -0.2, 0.45, 0.7] {
            let numeric = (evaluate(x + h, &COEFFS) - evaluate(x - h, &COEFFS)) / (2.0 * h);
            assert_relative_eq!(evaluate_derivative(x, &COEFFS), numeric, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_segment_validation() {
        assert_eq!(
            ChebyshevSegment::new(10.0, 10.0, vec![1.0]),
            Err(EphCoreError::InvalidChebyshevSegment(
                "empty time span [10, 10]".into()
            ))
        );
        assert!(ChebyshevSegment::new(12.0, 10.0, vec![1.0]).is_err());
        assert!(ChebyshevSegment::new(f64::NAN, 10.0, vec![1.0]).is_err());
        assert_eq!(
            ChebyshevSegment::new(0.0, 32.0, vec![]),
            Err(EphCoreError::InvalidChebyshevSegment(
                "no coefficients".into()
            ))
        );
    }

    #[test]
    fn test_segment_evaluation() {
        let seg = ChebyshevSegment::new(2451536.5, 2451568.5, COEFFS.to_vec()).unwrap();
        assert_eq!(seg.start(), 2451536.5);
        assert_eq!(seg.end(), 2451568.5);
        assert_eq!(seg.coefficients(), &COEFFS);

        assert_eq!(seg.normalized_time(2451536.5), Ok(-1.0));
        assert_eq!(seg.normalized_time(2451552.5), Ok(0.0));
        assert_eq!(seg.normalized_time(2451568.5), Ok(1.0));

        // x = 0.3 sits 0.3 * 16 days after mid-segment
        let jd = 2451552.5 + 4.8;
        assert_relative_eq!(seg.value(jd).unwrap(), 0.756, epsilon = 1e-12);
        assert_relative_eq!(seg.rate(jd).unwrap(), -0.04 / 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_outside_segment() {
        let seg = ChebyshevSegment::new(0.0, 32.0, COEFFS.to_vec()).unwrap();
        assert!(!seg.contains(32.5));
        assert_eq!(
            seg.value(32.5),
            Err(EphCoreError::OutsideChebyshevSegment {
                jd: 32.5,
                start: 0.0,
                end: 32.0
            })
        );
        assert!(seg.rate(-1.0).is_err());
    }
}
