//! Unit tests for the scenario projector.

use std::str::FromStr;

use super::calculations::{climate_multiplier, project};
use super::constants::{BASE_DEMAND_ML, BASE_INVESTMENT_R};
use super::types::{
    CurrentProjection, InvestmentLevel, ScenarioControls, ScenarioError, ALL_INVESTMENT_LEVELS,
};

const EPS: f32 = 1e-3;

#[test]
fn test_neutral_severity_has_unit_multiplier() {
    for level in ALL_INVESTMENT_LEVELS {
        let projection = project(5, level).unwrap();
        assert!((projection.climate_multiplier - 1.0).abs() < EPS);
        assert!((projection.adjusted_demand_ml - BASE_DEMAND_ML).abs() < EPS);
        assert!(projection.demand_delta_ml.abs() < EPS);
        assert!(projection.investment_delta_r.abs() < 1.0);
    }
}

#[test]
fn test_severity_seven_moderate() {
    let projection = project(7, InvestmentLevel::Moderate).unwrap();
    assert!((projection.climate_multiplier - 1.1).abs() < EPS);
    assert!((projection.adjusted_demand_ml - 4070.0).abs() < EPS);
    assert!((projection.failure_probability_pct - 10.5).abs() < EPS);
    assert!((projection.required_investment_r - 74_800_000.0).abs() < 10.0);
    assert!((projection.demand_delta_ml - 370.0).abs() < EPS);
    assert!((projection.investment_delta_r - 6_800_000.0).abs() < 10.0);
}

#[test]
fn test_severity_one_aggressive() {
    let projection = project(1, InvestmentLevel::Aggressive).unwrap();
    assert!((projection.climate_multiplier - 0.8).abs() < EPS);
    assert!((projection.adjusted_demand_ml - 2960.0).abs() < EPS);
    assert!((projection.failure_probability_pct - 0.75).abs() < EPS);
}

#[test]
fn test_severity_ten_minimal() {
    let projection = project(10, InvestmentLevel::Minimal).unwrap();
    assert!((projection.climate_multiplier - 1.25).abs() < EPS);
    assert!((projection.required_investment_r - 85_000_000.0).abs() < 10.0);
}

#[test]
fn test_out_of_range_severity_rejected() {
    assert_eq!(
        project(0, InvestmentLevel::Moderate),
        Err(ScenarioError::SeverityOutOfRange(0))
    );
    assert_eq!(
        project(11, InvestmentLevel::Moderate),
        Err(ScenarioError::SeverityOutOfRange(11))
    );
}

#[test]
fn test_projection_idempotent() {
    let a = project(7, InvestmentLevel::Moderate).unwrap();
    let b = project(7, InvestmentLevel::Moderate).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_multiplier_monotonic_in_severity() {
    for severity in 1..10u8 {
        assert!(climate_multiplier(severity) < climate_multiplier(severity + 1));
    }
}

#[test]
fn test_label_parsing() {
    assert_eq!(
        InvestmentLevel::from_str("Moderate (R50M)"),
        Ok(InvestmentLevel::Moderate)
    );
    assert_eq!(
        InvestmentLevel::from_str("Aggressive"),
        Ok(InvestmentLevel::Aggressive)
    );
}

#[test]
fn test_unknown_label_rejected() {
    let err = InvestmentLevel::from_str("Extreme").unwrap_err();
    assert_eq!(
        err,
        ScenarioError::UnknownInvestmentLevel("Extreme".to_string())
    );
}

#[test]
fn test_impact_factors() {
    assert_eq!(InvestmentLevel::Minimal.impact_factor(), 0.8);
    assert_eq!(InvestmentLevel::Moderate.impact_factor(), 0.6);
    assert_eq!(InvestmentLevel::Aggressive.impact_factor(), 0.3);
}

#[test]
fn test_error_display() {
    let err = ScenarioError::SeverityOutOfRange(11);
    assert!(err.to_string().contains("11"));
    let err = ScenarioError::UnknownInvestmentLevel("Extreme".to_string());
    assert!(err.to_string().contains("Extreme"));
}

#[test]
fn test_default_projection_matches_default_controls() {
    let controls = ScenarioControls::default();
    let expected = project(controls.climate_severity, controls.investment_level).unwrap();
    assert_eq!(CurrentProjection::default().0, expected);
}

#[test]
fn test_baseline_constants() {
    // The projector scales the terminal forecast year.
    assert_eq!(BASE_DEMAND_ML, 3700.0);
    assert_eq!(BASE_INVESTMENT_R, 68_000_000.0);
}
