//! # ΔT = ET − UT
//!
//! Difference between Ephemeris (dynamical) Time and Universal Time, in days.
//!
//! Four regimes, selected on the decimal year `Y = 2000 + (jd − J2000) / 365.25`:
//!
//! | Range              | Source                                                      |
//! |--------------------|-------------------------------------------------------------|
//! | `Y > 1999`         | quadratic extrapolation `(0.00362·B + 0.319)·B`, `B = Y − 1902` |
//! | `1620 ≤ Y ≤ 1999`  | yearly table, Besselian interpolation to fourth differences |
//! | `948 ≤ Y < 1620`   | Stephenson & Morrison (1984)                                |
//! | `Y < 948`          | Borkowski (1988)                                            |
//!
//! Table values before 1955 depend on the lunar tidal acceleration assumed by the
//! ephemeris they were reduced with. The table is built on −26″/cy²; the value held by
//! a [`DeltaT`] rescales those entries for the ephemeris actually in use.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Days, JulianDate, Seconds, SECONDS_PER_DAY},
    time::decimal_year,
};

/// Lunar tidal acceleration of JPL DE200, in ″/cy².
pub const TIDAL_DE200: f64 = -23.8946;
/// Lunar tidal acceleration of JPL DE403.
pub const TIDAL_DE403: f64 = -25.8;
/// Lunar tidal acceleration of JPL DE404.
pub const TIDAL_DE404: f64 = -25.8;
/// Lunar tidal acceleration of JPL DE405.
pub const TIDAL_DE405: f64 = -25.8;
/// Lunar tidal acceleration of JPL DE406.
pub const TIDAL_DE406: f64 = -25.8;
/// Value the ΔT table was reduced with.
pub const TIDAL_26: f64 = -26.0;
/// Default lunar tidal acceleration (DE403 to DE406).
pub const TIDAL_DEFAULT: f64 = TIDAL_DE406;

const TABLE_START: f64 = 1620.0;
const TABLE_END: f64 = 1999.0;
const TABLE_SIZE: usize = 380;

/// Year before which the tidal correction applies.
const TIDAL_CORRECTION_END: f64 = 1955.0;

/// ΔT at the start of each year from 1620.0 to 1999.0, in hundredths of a second.
///
/// Stephenson & Morrison (1984) before 1955, Astronomical Almanac K8-K9 afterwards,
/// extended to 1999 with IERS values.
static DELTA_T_TABLE: [i32; TABLE_SIZE] = [
    /* 1620 */ 12400, 11900, 11500, 11000, 10600, 10200, 9800, 9500, 9100, 8800,
    /* 1630 */ 8500, 8200, 7900, 7700, 7400, 7200, 7000, 6700, 6500, 6300,
    /* 1640 */ 6200, 6000, 5800, 5700, 5500, 5400, 5300, 5100, 5000, 4900,
    /* 1650 */ 4800, 4700, 4600, 4500, 4400, 4300, 4200, 4100, 4000, 3800,
    /* 1660 */ 3700, 3600, 3500, 3400, 3300, 3200, 3100, 3000, 2800, 2700,
    /* 1670 */ 2600, 2500, 2400, 2300, 2200, 2100, 2000, 1900, 1800, 1700,
    /* 1680 */ 1600, 1500, 1400, 1400, 1300, 1200, 1200, 1100, 1100, 1000,
    /* 1690 */ 1000, 1000, 900, 900, 900, 900, 900, 900, 900, 900,
    /* 1700 */ 900, 900, 900, 900, 900, 900, 900, 900, 1000, 1000,
    /* 1710 */ 1000, 1000, 1000, 1000, 1000, 1000, 1000, 1100, 1100, 1100,
    /* 1720 */ 1100, 1100, 1100, 1100, 1100, 1100, 1100, 1100, 1100, 1100,
    /* 1730 */ 1100, 1100, 1100, 1100, 1200, 1200, 1200, 1200, 1200, 1200,
    /* 1740 */ 1200, 1200, 1200, 1200, 1300, 1300, 1300, 1300, 1300, 1300,
    /* 1750 */ 1300, 1400, 1400, 1400, 1400, 1400, 1400, 1400, 1500, 1500,
    /* 1760 */ 1500, 1500, 1500, 1500, 1500, 1600, 1600, 1600, 1600, 1600,
    /* 1770 */ 1600, 1600, 1600, 1600, 1600, 1700, 1700, 1700, 1700, 1700,
    /* 1780 */ 1700, 1700, 1700, 1700, 1700, 1700, 1700, 1700, 1700, 1700,
    /* 1790 */ 1700, 1700, 1600, 1600, 1600, 1600, 1500, 1500, 1400, 1400,
    /* 1800 */ 1370, 1340, 1310, 1290, 1270, 1260, 1250, 1250, 1250, 1250,
    /* 1810 */ 1250, 1250, 1250, 1250, 1250, 1250, 1250, 1240, 1230, 1220,
    /* 1820 */ 1200, 1170, 1140, 1110, 1060, 1020, 960, 910, 860, 800,
    /* 1830 */ 750, 700, 660, 630, 600, 580, 570, 560, 560, 560,
    /* 1840 */ 570, 580, 590, 610, 620, 630, 650, 660, 680, 690,
    /* 1850 */ 710, 720, 730, 740, 750, 760, 770, 770, 780, 780,
    /* 1860 */ 788, 782, 754, 697, 640, 602, 541, 410, 292, 182,
    /* 1870 */ 161, 10, -102, -128, -269, -324, -364, -454, -471, -511,
    /* 1880 */ -540, -542, -520, -546, -546, -579, -563, -564, -580, -566,
    /* 1890 */ -587, -601, -619, -664, -644, -647, -609, -576, -466, -374,
    /* 1900 */ -272, -154, -2, 124, 264, 386, 537, 614, 775, 913,
    /* 1910 */ 1046, 1153, 1336, 1465, 1601, 1720, 1824, 1906, 2025, 2095,
    /* 1920 */ 2116, 2225, 2241, 2303, 2349, 2362, 2386, 2449, 2434, 2408,
    /* 1930 */ 2402, 2400, 2387, 2395, 2386, 2393, 2373, 2392, 2396, 2402,
    /* 1940 */ 2433, 2483, 2530, 2570, 2624, 2677, 2728, 2778, 2825, 2871,
    /* 1950 */ 2915, 2957, 2997, 3036, 3072, 3107, 3135, 3168, 3218, 3268,
    /* 1960 */ 3315, 3359, 3400, 3447, 3503, 3573, 3654, 3743, 3829, 3920,
    /* 1970 */ 4018, 4117, 4223, 4337, 4449, 4548, 4646, 4752, 4853, 4959,
    /* 1980 */ 5054, 5138, 5217, 5296, 5379, 5434, 5487, 5532, 5582, 5630,
    /* 1990 */ 5686, 5757, 5831, 5912, 5998, 6078, 6163, 6300, 6400, 6500,
];

/// Besselian interpolation of [`DELTA_T_TABLE`] at decimal year `y`, in hundredths
/// of a second.
///
/// Differences up to the fourth order are used. Near either end of the table the
/// higher orders are dropped as soon as a needed entry is missing.
fn table_interpolation(y: f64) -> f64 {
    let year = y.floor();
    let iy = (year - TABLE_START) as usize;
    let mut ans = DELTA_T_TABLE[iy] as f64;

    if iy + 1 >= TABLE_SIZE {
        return ans;
    }

    // linear
    let p = y - year;
    ans += p * (DELTA_T_TABLE[iy + 1] - DELTA_T_TABLE[iy]) as f64;
    if iy < 1 || iy + 2 >= TABLE_SIZE {
        return ans;
    }

    // first differences around the interval, zero outside the table
    let mut d = [0i32; 5];
    for (i, slot) in d.iter_mut().enumerate() {
        let k = iy as isize - 2 + i as isize;
        if k >= 0 && (k as usize) + 1 < TABLE_SIZE {
            *slot = DELTA_T_TABLE[k as usize + 1] - DELTA_T_TABLE[k as usize];
        }
    }

    // second differences
    for i in 0..4 {
        d[i] = d[i + 1] - d[i];
    }
    let mut b = 0.25 * p * (p - 1.0);
    ans += b * (d[1] + d[2]) as f64;

    // third differences
    for i in 0..3 {
        d[i] = d[i + 1] - d[i];
    }
    b = 2.0 * b / 3.0;
    ans += (p - 0.5) * b * d[1] as f64;
    if iy < 2 || iy + 3 > TABLE_SIZE {
        return ans;
    }

    // fourth differences
    for i in 0..2 {
        d[i] = d[i + 1] - d[i];
    }
    b = 0.125 * b * (p + 1.0) * (p - 2.0);
    ans + b * (d[0] + d[1]) as f64
}

/// ΔT calculator, parameterized by the lunar tidal acceleration of the ephemeris in use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaT {
    tidal_acceleration: f64,
}

impl Default for DeltaT {
    fn default() -> Self {
        DeltaT {
            tidal_acceleration: TIDAL_DEFAULT,
        }
    }
}

impl DeltaT {
    /// Build a calculator for an ephemeris with the given lunar tidal acceleration (″/cy²).
    pub fn new(tidal_acceleration: f64) -> Self {
        DeltaT { tidal_acceleration }
    }

    pub fn tidal_acceleration(&self) -> f64 {
        self.tidal_acceleration
    }

    /// Change the tidal acceleration. Only results for dates before 1955 are affected.
    pub fn set_tidal_acceleration(&mut self, tidal_acceleration: f64) {
        debug!(
            "tidal acceleration changed from {} to {}",
            self.tidal_acceleration, tidal_acceleration
        );
        self.tidal_acceleration = tidal_acceleration;
    }

    /// Compute ΔT = ET − UT at a given Universal Time.
    ///
    /// Arguments
    /// ---------
    /// * `jd_ut`: Julian Date in Universal Time.
    ///
    /// Returns
    /// --------
    /// * ΔT in days. Add it to `jd_ut` to get the Julian Date in Ephemeris Time.
    ///
    /// # See also
    /// * [`DeltaT::delta_t_seconds`] – the same value in seconds
    pub fn delta_t(&self, jd_ut: JulianDate) -> Days {
        self.delta_t_seconds(jd_ut) / SECONDS_PER_DAY
    }

    /// ΔT in seconds.
    pub fn delta_t_seconds(&self, jd_ut: JulianDate) -> Seconds {
        let y = decimal_year(jd_ut);

        if y > TABLE_END {
            let b = y - 1902.0;
            return (0.00362 * b + 0.319) * b;
        }

        if y < TABLE_START {
            return if y >= 948.0 {
                // Stephenson and Morrison (1984)
                let b = 0.01 * (y - 2000.0);
                (23.58 * b + 100.3) * b + 101.6
            } else {
                // Borkowski (1988)
                let b = 0.01 * (y - 2000.0) + 3.75;
                35.0 * b * b + 40.0
            };
        }

        let mut ans = table_interpolation(y) * 0.01;

        if y < TIDAL_CORRECTION_END {
            let b = y - TIDAL_CORRECTION_END;
            ans += -0.000091 * (self.tidal_acceleration + 26.0) * b * b;
        }

        ans
    }
}
