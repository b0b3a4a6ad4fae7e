mod common;

use approx::assert_relative_eq;
use nalgebra::Vector3;

use common::{assert_vector_close, jd_of_year, J2000};
use ephcore::{
    delta_t::{DeltaT, TIDAL_DE200, TIDAL_DEFAULT},
    obliquity::obliquity,
    sidereal::sidtime,
    time::date_to_jd,
    Engine, EngineConfig, EphCoreError, PrecessionDirection, PrecessionModel,
};

#[test]
fn test_config_json_round_trip() {
    let config = EngineConfig::default()
        .with_precession(PrecessionModel::Iau1976)
        .with_tidal_acceleration(TIDAL_DE200)
        .with_herring_nutation(true);

    let json = serde_json::to_string(&config).unwrap();
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_config_from_partial_json() {
    let config: EngineConfig = serde_json::from_str(r#"{ "precession": "Williams1994" }"#).unwrap();
    assert_eq!(config.precession, PrecessionModel::Williams1994);
    assert_eq!(config.tidal_acceleration, TIDAL_DEFAULT);
    assert!(!config.herring_nutation);
}

#[test]
fn test_precession_model_from_settings_string() {
    let model: PrecessionModel = "simon_1994".parse().unwrap();
    let engine = Engine::new(EngineConfig::default().with_precession(model));
    assert_eq!(engine.config().precession, PrecessionModel::Simon1994);

    let err = "newcomb".parse::<PrecessionModel>().unwrap_err();
    assert_eq!(err, EphCoreError::InvalidPrecessionModel("newcomb".into()));
    assert_eq!(err.to_string(), "Invalid precession model: newcomb");
}

#[test]
fn test_obliquity_at_j2000() {
    let engine = Engine::default();
    assert_relative_eq!(engine.obliquity(J2000).in_degrees(), 23.4392911, epsilon = 1e-7);
    assert_eq!(engine.obliquity(J2000).eps, obliquity(J2000));
}

#[test]
fn test_precession_identity_and_round_trip() {
    let r = Vector3::new(-0.18, 0.91, 0.39);
    for model in [
        PrecessionModel::Laskar1986,
        PrecessionModel::Williams1994,
        PrecessionModel::Simon1994,
        PrecessionModel::Iau1976,
    ] {
        let engine = Engine::new(EngineConfig::default().with_precession(model));
        assert_eq!(engine.precess(&r, J2000, PrecessionDirection::ToJ2000), r);

        let jd = jd_of_year(1850.0);
        let at_j2000 = engine.precess(&r, jd, PrecessionDirection::ToJ2000);
        let back = engine.precess(&at_j2000, jd, PrecessionDirection::FromJ2000);
        assert_vector_close(&back, &r, 1e-9);
    }
}

#[test]
fn test_tidal_acceleration_scenario() {
    let mut engine = Engine::default();
    let early = jd_of_year(1800.25);
    let modern = jd_of_year(1987.6);
    let future = jd_of_year(2030.0);

    let early_before = engine.delta_t(early);
    let modern_before = engine.delta_t(modern);
    let future_before = engine.delta_t(future);

    engine.set_tidal_acceleration(TIDAL_DE200);

    assert_ne!(engine.delta_t(early), early_before);
    assert_eq!(engine.delta_t(modern), modern_before);
    assert_eq!(engine.delta_t(future), future_before);
    assert_relative_eq!(
        engine.delta_t(early) * 86400.0,
        9.0351439896625,
        epsilon = 1e-8
    );
}

#[test]
fn test_sidereal_time_from_date_string() {
    let jd = date_to_jd("2000-01-01T00:00:00").unwrap();
    assert_relative_eq!(jd, 2451544.5, epsilon = 1e-8);

    let engine = Engine::default();
    assert_relative_eq!(engine.sidereal_time(jd), 6.664283082644745, epsilon = 1e-6);
    assert_eq!(engine.sidereal_time(jd), sidtime(jd, &DeltaT::default()));
}

#[test]
fn test_invalid_date_string() {
    assert!(date_to_jd("2000-13-45").is_err());
}
