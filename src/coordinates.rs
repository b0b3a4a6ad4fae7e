//! # Coordinate conversions
//!
//! Cartesian ↔ polar conversions, with or without velocities, and the rotation between
//! ecliptic and equatorial frames about their common x axis (the equinox direction).
//!
//! Polar vectors are ordered `(longitude, latitude, radius)`, angles in radians, with
//! rates `(dlon/dt, dlat/dt, dr/dt)` in the last three slots of a [`Vector6`].
//!
//! [`fk4_to_fk5`] applies the FK4 → FK5 equinox correction to an equatorial state.
//!
//! Sign convention of the frame rotation: a **positive** obliquity turns equatorial
//! coordinates into ecliptic ones, a **negative** obliquity goes the other way.

use nalgebra::{Vector3, Vector6};

use crate::constants::{
    Degree, JulianDate, Radian, B1950, DAYS_PER_TROPICAL_CENTURY, DEGRAD, DPI, RADEG,
};

/// Convert cartesian coordinates to polar `(lon, lat, r)`.
///
/// Longitude is in `[0, 2π)`, latitude in `[−π/2, π/2]`. The zero vector maps to zero.
pub fn cartesian_to_polar(x: &Vector3<f64>) -> Vector3<f64> {
    if x.x == 0.0 && x.y == 0.0 && x.z == 0.0 {
        return Vector3::zeros();
    }

    let rxy2 = x.x * x.x + x.y * x.y;
    let r = (rxy2 + x.z * x.z).sqrt();
    let rxy = rxy2.sqrt();

    let mut lon = x.y.atan2(x.x);
    if lon < 0.0 {
        lon += DPI;
    }
    let lat = (x.z / rxy).atan();

    Vector3::new(lon, lat, r)
}

/// Convert polar `(lon, lat, r)` to cartesian coordinates.
pub fn polar_to_cartesian(l: &Vector3<f64>) -> Vector3<f64> {
    let cos_lat = l.y.cos();
    Vector3::new(
        l.z * cos_lat * l.x.cos(),
        l.z * cos_lat * l.x.sin(),
        l.z * l.y.sin(),
    )
}

/// Convert a cartesian position/velocity state to polar coordinates and rates.
///
/// Arguments
/// ---------
/// * `x`: `(x, y, z, vx, vy, vz)`.
///
/// Returns
/// --------
/// * `(lon, lat, r, dlon/dt, dlat/dt, dr/dt)`.
///
/// Special cases
/// -------------
/// * Zero position: the direction of motion is returned as `(lon, lat)`, with `r = 0`,
///   zero angular rates and `dr/dt = |v|`.
/// * Zero velocity: polar position and zero rates.
/// * Position on the z axis with a nonzero velocity: the longitude rate divides by the
///   zero distance to the axis and the three rates come out as NaN. The caller must
///   avoid the poles or handle them itself.
///
/// Otherwise the velocity is rotated by the longitude about z and by the latitude about
/// the new y axis; the transverse components divided by the distances give the angular
/// rates and the radial component gives `dr/dt`.
pub fn cartesian_to_polar_with_speed(x: &Vector6<f64>) -> Vector6<f64> {
    let pos = x.fixed_rows::<3>(0).into_owned();
    let vel = x.fixed_rows::<3>(3).into_owned();

    if pos == Vector3::zeros() {
        let direction = cartesian_to_polar(&vel);
        return Vector6::new(direction.x, direction.y, 0.0, 0.0, 0.0, vel.norm());
    }

    if vel == Vector3::zeros() {
        let l = cartesian_to_polar(&pos);
        return Vector6::new(l.x, l.y, l.z, 0.0, 0.0, 0.0);
    }

    let rxy2 = pos.x * pos.x + pos.y * pos.y;
    let r = (rxy2 + pos.z * pos.z).sqrt();
    let rxy = rxy2.sqrt();

    let mut lon = pos.y.atan2(pos.x);
    if lon < 0.0 {
        lon += DPI;
    }
    let lat = (pos.z / rxy).atan();

    let cos_lon = pos.x / rxy;
    let sin_lon = pos.y / rxy;
    let cos_lat = rxy / r;
    let sin_lat = pos.z / r;

    // rotate by the longitude about z
    let v_radial_xy = vel.x * cos_lon + vel.y * sin_lon;
    let v_lon = -vel.x * sin_lon + vel.y * cos_lon;
    // rotate by the latitude about the new y axis
    let v_lat = -sin_lat * v_radial_xy + cos_lat * vel.z;
    let v_r = cos_lat * v_radial_xy + sin_lat * vel.z;

    Vector6::new(lon, lat, r, v_lon / rxy, v_lat / r, v_r)
}

/// Convert polar coordinates and rates to a cartesian position/velocity state.
///
/// Inverse of [`cartesian_to_polar_with_speed`]. Zero rates give a zero velocity.
pub fn polar_to_cartesian_with_speed(l: &Vector6<f64>) -> Vector6<f64> {
    if l[3] == 0.0 && l[4] == 0.0 && l[5] == 0.0 {
        let pos = polar_to_cartesian(&l.fixed_rows::<3>(0).into_owned());
        return Vector6::new(pos.x, pos.y, pos.z, 0.0, 0.0, 0.0);
    }

    let (sin_lon, cos_lon) = l[0].sin_cos();
    let (sin_lat, cos_lat) = l[1].sin_cos();
    let r = l[2];

    let x = r * cos_lat * cos_lon;
    let y = r * cos_lat * sin_lon;
    let z = r * sin_lat;

    let rxy = (x * x + y * y).sqrt();
    let v_r = l[5];
    let v_lat = l[4] * r;

    let vz = sin_lat * v_r + cos_lat * v_lat;
    let v_radial_xy = cos_lat * v_r - sin_lat * v_lat;
    let v_lon = l[3] * rxy;

    let vx = cos_lon * v_radial_xy - sin_lon * v_lon;
    let vy = sin_lon * v_radial_xy + cos_lon * v_lon;

    Vector6::new(x, y, z, vx, vy, vz)
}

/// Rotate a cartesian vector about the x axis between ecliptic and equatorial frames.
///
/// Arguments
/// ---------
/// * `x`: cartesian vector.
/// * `eps`: obliquity in radians, positive for equatorial → ecliptic, negative for
///   ecliptic → equatorial.
pub fn ecliptic_equatorial_rotate(x: &Vector3<f64>, eps: Radian) -> Vector3<f64> {
    let (sin_eps, cos_eps) = eps.sin_cos();
    ecliptic_equatorial_rotate_with_sincos(x, sin_eps, cos_eps)
}

/// Same as [`ecliptic_equatorial_rotate`] with a precomputed sine and cosine.
///
/// For ecliptic → equatorial pass `−sin(eps)`.
pub fn ecliptic_equatorial_rotate_with_sincos(
    x: &Vector3<f64>,
    sin_eps: f64,
    cos_eps: f64,
) -> Vector3<f64> {
    Vector3::new(
        x.x,
        x.y * cos_eps + x.z * sin_eps,
        -x.y * sin_eps + x.z * cos_eps,
    )
}

/// Rotate both the position and the velocity of a state between ecliptic and equatorial frames.
pub fn ecliptic_equatorial_rotate_with_speed(x: &Vector6<f64>, eps: Radian) -> Vector6<f64> {
    let (sin_eps, cos_eps) = eps.sin_cos();
    let pos = ecliptic_equatorial_rotate_with_sincos(
        &x.fixed_rows::<3>(0).into_owned(),
        sin_eps,
        cos_eps,
    );
    let vel = ecliptic_equatorial_rotate_with_sincos(
        &x.fixed_rows::<3>(3).into_owned(),
        sin_eps,
        cos_eps,
    );
    Vector6::new(pos.x, pos.y, pos.z, vel.x, vel.y, vel.z)
}

/// Transform polar coordinates between ecliptic and equatorial frames, in degrees.
///
/// Arguments
/// ---------
/// * `polar`: `(lon, lat, distance)` with angles in degrees.
/// * `eps`: obliquity in degrees, negative for ecliptic → equatorial, positive for
///   equatorial → ecliptic.
///
/// Returns
/// --------
/// * The transformed `(lon, lat)` in degrees, with the caller's distance copied through.
///
/// The rotation runs on a unit vector so that a zero distance does not collapse the
/// direction.
pub fn cotrans(polar: &Vector3<Degree>, eps: Degree) -> Vector3<Degree> {
    let unit = Vector3::new(polar.x * RADEG, polar.y * RADEG, 1.0);
    let x = polar_to_cartesian(&unit);
    let x = ecliptic_equatorial_rotate(&x, eps * RADEG);
    let l = cartesian_to_polar(&x);
    Vector3::new(l.x * DEGRAD, l.y * DEGRAD, polar.z)
}

/// [`cotrans`] for a state with rates, angles and angular rates in degrees.
///
/// The distance and its rate are copied through from the input.
pub fn cotrans_with_speed(polar: &Vector6<Degree>, eps: Degree) -> Vector6<Degree> {
    let unit = Vector6::new(
        polar[0] * RADEG,
        polar[1] * RADEG,
        1.0,
        polar[3] * RADEG,
        polar[4] * RADEG,
        polar[5],
    );
    let x = polar_to_cartesian_with_speed(&unit);
    let x = ecliptic_equatorial_rotate_with_speed(&x, eps * RADEG);
    let l = cartesian_to_polar_with_speed(&x);
    Vector6::new(
        l[0] * DEGRAD,
        l[1] * DEGRAD,
        polar[2],
        l[3] * DEGRAD,
        l[4] * DEGRAD,
        polar[5],
    )
}

/// Apply the FK4 → FK5 equinox correction to an equatorial state.
///
/// Arguments
/// ---------
/// * `state`: equatorial `(x, y, z, vx, vy, vz)` referred to the FK4 equinox.
/// * `jd`: Julian Date of the state.
///
/// Returns
/// --------
/// * The state with its right ascension shifted by
///   `(0.035 + 0.085·(jd − B1950)/36524.2198782)` seconds of time and its right
///   ascension rate by `0.085` seconds of time per tropical century.
///   A zero position is returned unchanged.
///
/// # See also
/// * Explanatory Supplement to the Astronomical Almanac (1992), p. 167f.
pub fn fk4_to_fk5(state: &Vector6<f64>, jd: JulianDate) -> Vector6<f64> {
    if state.fixed_rows::<3>(0).into_owned() == Vector3::zeros() {
        return *state;
    }

    // seconds of time to radians
    let time_sec = 15.0 / 3600.0 * RADEG;

    let mut l = cartesian_to_polar_with_speed(state);
    l[0] += (0.035 + 0.085 * (jd - B1950) / DAYS_PER_TROPICAL_CENTURY) * time_sec;
    l[3] += 0.085 / DAYS_PER_TROPICAL_CENTURY * time_sec;
    polar_to_cartesian_with_speed(&l)
}
