use approx::assert_relative_eq;
use nalgebra::Vector3;

pub const J2000: f64 = 2451545.0;

/// Julian Date at the start of a decimal Julian year.
pub fn jd_of_year(year: f64) -> f64 {
    J2000 + (year - 2000.0) * 365.25
}

pub fn assert_vector_close(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
