use hifitime::Epoch;
use std::str::FromStr;

use crate::{
    constants::{JulianDate, DAYS_PER_YEAR, J2000, JDTOMJD, MJD},
    ephcore_errors::EphCoreError,
};

/// Decimal year of a Julian Date, on the Julian-year scale centered on J2000.0.
///
/// Argument
/// --------
/// * `jd`: Julian Date
///
/// Return
/// ------
/// * `2000 + (jd - J2000) / 365.25`
pub fn decimal_year(jd: JulianDate) -> f64 {
    2000.0 + (jd - J2000) / DAYS_PER_YEAR
}

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss (UTC) to julian date (JD)
///
/// Argument
/// --------
/// * `date`: an ISO 8601 date, parsed by [`hifitime::Epoch`]
///
/// Return
/// ------
/// * the julian date in UTC, or [`EphCoreError::HifitimeError`] if the string cannot be parsed
pub fn date_to_jd(date: &str) -> Result<JulianDate, EphCoreError> {
    let epoch = Epoch::from_str(date.trim())?;
    Ok(epoch.to_jde_utc_days())
}

/// Transformation from a gregorian calendar date (UTC) to julian date (JD)
///
/// Return
/// ------
/// * the julian date, or [`EphCoreError::InvalidDate`] when the fields do not form a valid date
pub fn calendar_to_jd(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Result<JulianDate, EphCoreError> {
    let epoch = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)
        .map_err(|err| {
            EphCoreError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02} ({err})"
            ))
        })?;
    Ok(epoch.to_jde_utc_days())
}

/// Julian date (UTC) of an [`Epoch`].
pub fn epoch_to_jd(epoch: &Epoch) -> JulianDate {
    epoch.to_jde_utc_days()
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JulianDate {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDate) -> MJD {
    jd - JDTOMJD
}

/// Day of the week of a Julian Date, Monday = 0 ... Sunday = 6.
///
/// The day changes at midnight, i.e. when the fractional part of `jd` is 0.5.
pub fn day_of_week(jd: JulianDate) -> u8 {
    // 2433283.5 is Monday 1950-01-02 0h
    (jd - 2433283.5).floor().rem_euclid(7.0) as u8
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decimal_year() {
        assert_eq!(decimal_year(J2000), 2000.0);
        assert_eq!(decimal_year(J2000 + DAYS_PER_YEAR * 24.5), 2024.5);
        assert_eq!(decimal_year(J2000 - DAYS_PER_YEAR * 380.0), 1620.0);
    }

    #[test]
    fn test_date_to_jd() {
        assert_relative_eq!(date_to_jd("2000-01-01T12:00:00").unwrap(), J2000, epsilon = 1e-9);
        assert_relative_eq!(
            date_to_jd("2023-02-25T00:00:00").unwrap(),
            2460000.5,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            date_to_jd("2023-02-24T00:00:00").unwrap(),
            2459999.5,
            epsilon = 1e-9
        );
        assert!(date_to_jd("not a date").is_err());
    }

    #[test]
    fn test_calendar_to_jd() {
        assert_relative_eq!(
            calendar_to_jd(2000, 1, 1, 12, 0, 0).unwrap(),
            J2000,
            epsilon = 1e-9
        );
        assert!(matches!(
            calendar_to_jd(2021, 2, 30, 0, 0, 0),
            Err(EphCoreError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_mjd_conversions() {
        assert_eq!(jd_to_mjd(J2000), 51544.5);
        assert_eq!(mjd_to_jd(51544.5), J2000);
        assert_eq!(mjd_to_jd(jd_to_mjd(2460000.25)), 2460000.25);
    }

    #[test]
    fn test_day_of_week() {
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(J2000), 5);
        assert_eq!(day_of_week(2451544.5), 5);
        // Sunday 2000-01-02 starts at 0h
        assert_eq!(day_of_week(2451545.5), 6);
        assert_eq!(day_of_week(2451546.5), 0);
        // 1582-10-15, first day of the gregorian calendar, was a Friday
        assert_eq!(day_of_week(2299160.5), 4);
    }
}
