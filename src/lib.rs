//! # ephcore
//!
//! Time-scale and reference-frame transformations used when computing positions from
//! planetary ephemerides:
//!
//! - [`obliquity`]: mean obliquity of the ecliptic (IAU 1976, Laskar 1986);
//! - [`nutation`]: IAU 1980 nutation series, with optional Herring (1987) corrections;
//! - [`precession`]: precession between an equinox of date and J2000.0;
//! - [`delta_t`]: ΔT = ET − UT;
//! - [`sidereal`]: apparent Greenwich sidereal time;
//! - [`coordinates`]: cartesian/polar conversions and ecliptic/equatorial rotations;
//! - [`chebyshev`]: evaluation of stored Chebyshev segments;
//! - [`engine`]: one [`engine::EngineConfig`] wiring all of the above.
//!
//! Every computation is a pure function of its inputs. The only mutable state is the
//! tidal acceleration held by a [`delta_t::DeltaT`] (or an [`engine::Engine`]).

pub mod angles;
pub mod chebyshev;
pub mod constants;
pub mod coordinates;
pub mod delta_t;
pub mod engine;
pub mod ephcore_errors;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod sidereal;
pub mod time;

pub use engine::{Engine, EngineConfig};
pub use ephcore_errors::EphCoreError;
pub use precession::{PrecessionDirection, PrecessionModel};
