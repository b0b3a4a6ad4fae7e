//! # Engine: one configuration for every time-scale and frame model
//!
//! [`Engine`] wires the precession theory, the nutation series and the ΔT calculator
//! chosen in an [`EngineConfig`], so that callers working with one ephemeris use a
//! consistent set of models everywhere.
//!
//! ## Typical usage
//!
//! ```rust
//! use ephcore::engine::{Engine, EngineConfig};
//! use ephcore::delta_t::TIDAL_DE200;
//! use ephcore::precession::PrecessionModel;
//!
//! let config = EngineConfig::default()
//!     .with_precession(PrecessionModel::Williams1994)
//!     .with_tidal_acceleration(TIDAL_DE200);
//! let engine = Engine::new(config);
//!
//! let st = engine.sidereal_time(2451545.0);
//! assert!((0.0..24.0).contains(&st));
//! ```
//!
//! The configuration is plain data with `serde` support, so it can be embedded in a
//! settings file:
//!
//! ```json
//! { "precession": "Laskar1986", "tidal_acceleration": -25.8, "herring_nutation": false }
//! ```

use hifitime::Epoch;
use log::debug;
use nalgebra::{Vector3, Vector6};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Days, Hours, JulianDate, Radian},
    coordinates::ecliptic_equatorial_rotate_with_sincos,
    delta_t::{DeltaT, TIDAL_DEFAULT},
    nutation::{Nutation, NutationModel},
    obliquity::Obliquity,
    precession::{Precession, PrecessionDirection, PrecessionModel},
    sidereal::{equation_of_equinoxes, sidtime_with_nutation},
    time::epoch_to_jd,
};

/// Model selection for an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub precession: PrecessionModel,
    /// Lunar tidal acceleration of the ephemeris in use, ″/cy²
    pub tidal_acceleration: f64,
    pub herring_nutation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            precession: PrecessionModel::default(),
            tidal_acceleration: TIDAL_DEFAULT,
            herring_nutation: false,
        }
    }
}

impl EngineConfig {
    pub fn with_precession(mut self, precession: PrecessionModel) -> Self {
        self.precession = precession;
        self
    }

    pub fn with_tidal_acceleration(mut self, tidal_acceleration: f64) -> Self {
        self.tidal_acceleration = tidal_acceleration;
        self
    }

    pub fn with_herring_nutation(mut self, herring_nutation: bool) -> Self {
        self.herring_nutation = herring_nutation;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Engine {
    precession: Precession,
    nutation: NutationModel,
    delta_t: DeltaT,
}

impl Engine {
    /// Construct a new [`Engine`] from a configuration.
    ///
    /// Arguments
    /// -----------------
    /// * `config`: the precession theory, the tidal acceleration used by ΔT, and whether
    ///   the Herring corrections are added to the nutation series.
    ///
    /// See also
    /// ------------
    /// * [`EngineConfig::default`] – Laskar 1986 precession, DE406 tidal acceleration,
    ///   plain IAU 1980 nutation.
    pub fn new(config: EngineConfig) -> Self {
        debug!(
            "engine built with {} precession, tidal acceleration {}, herring nutation {}",
            config.precession, config.tidal_acceleration, config.herring_nutation
        );
        Engine {
            precession: Precession::new(config.precession),
            nutation: NutationModel::new(config.herring_nutation),
            delta_t: DeltaT::new(config.tidal_acceleration),
        }
    }

    /// Current configuration, including any later change of the tidal acceleration.
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            precession: self.precession.model(),
            tidal_acceleration: self.delta_t.tidal_acceleration(),
            herring_nutation: self.nutation.herring_corrections,
        }
    }

    pub fn obliquity(&self, jd_et: JulianDate) -> Obliquity {
        Obliquity::at(jd_et)
    }

    pub fn nutation(&self, jd_et: JulianDate) -> Nutation {
        self.nutation.nutation(jd_et)
    }

    /// Equation of the equinoxes at `jd_et`, radians.
    pub fn equation_of_equinoxes(&self, jd_et: JulianDate) -> Radian {
        equation_of_equinoxes(jd_et, &self.nutation)
    }

    pub fn precess(
        &self,
        r: &Vector3<f64>,
        jd_et: JulianDate,
        direction: PrecessionDirection,
    ) -> Vector3<f64> {
        self.precession.precess(r, jd_et, direction)
    }

    pub fn precess_with_speed(
        &self,
        state: &Vector6<f64>,
        jd_et: JulianDate,
        direction: PrecessionDirection,
    ) -> Vector6<f64> {
        self.precession.precess_with_speed(state, jd_et, direction)
    }

    /// Precess an equatorial vector from the equinox of `from_jd` to that of `to_jd`, via J2000.
    pub fn precess_between(
        &self,
        r: &Vector3<f64>,
        from_jd: JulianDate,
        to_jd: JulianDate,
    ) -> Vector3<f64> {
        self.precession.precess_between(r, from_jd, to_jd)
    }

    /// ΔT in days at the Universal Time `jd_ut`.
    pub fn delta_t(&self, jd_ut: JulianDate) -> Days {
        self.delta_t.delta_t(jd_ut)
    }

    pub fn tidal_acceleration(&self) -> f64 {
        self.delta_t.tidal_acceleration()
    }

    pub fn set_tidal_acceleration(&mut self, tidal_acceleration: f64) {
        self.delta_t.set_tidal_acceleration(tidal_acceleration);
    }

    /// Apparent Greenwich sidereal time in hours at the Universal Time `jd_ut`.
    pub fn sidereal_time(&self, jd_ut: JulianDate) -> Hours {
        sidtime_with_nutation(jd_ut, &self.delta_t, &self.nutation)
    }

    /// Apparent Greenwich sidereal time at an [`Epoch`], with UTC standing in for UT.
    pub fn sidereal_time_at(&self, epoch: &Epoch) -> Hours {
        self.sidereal_time(epoch_to_jd(epoch))
    }

    /// Rotate an ecliptic cartesian vector into the mean equatorial frame of `jd_et`.
    pub fn ecliptic_to_equatorial(&self, x: &Vector3<f64>, jd_et: JulianDate) -> Vector3<f64> {
        let obl = Obliquity::at(jd_et);
        ecliptic_equatorial_rotate_with_sincos(x, -obl.sin_eps, obl.cos_eps)
    }

    /// Rotate a mean equatorial cartesian vector of `jd_et` into the ecliptic frame.
    pub fn equatorial_to_ecliptic(&self, x: &Vector3<f64>, jd_et: JulianDate) -> Vector3<f64> {
        let obl = Obliquity::at(jd_et);
        ecliptic_equatorial_rotate_with_sincos(x, obl.sin_eps, obl.cos_eps)
    }
}
