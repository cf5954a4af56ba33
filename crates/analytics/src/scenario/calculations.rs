//! Pure projection arithmetic for the 2030 scenario simulator.

use super::constants::{
    BASE_DEMAND_ML, BASE_INVESTMENT_R, SEVERITY_MAX, SEVERITY_MIN, SEVERITY_NEUTRAL,
    SEVERITY_STEP, UNMITIGATED_FAILURE_RISK_PCT,
};
use super::types::{InvestmentLevel, ScenarioError, ScenarioProjection};

/// Demand/investment scaling factor for a severity value.
///
/// Severity 5 is neutral (multiplier 1.0); each step away moves the
/// multiplier by 5%.
pub fn climate_multiplier(climate_severity: u8) -> f32 {
    1.0 + (climate_severity as f32 - SEVERITY_NEUTRAL as f32) * SEVERITY_STEP
}

/// Project 2030 demand, failure risk, and investment for the given inputs.
///
/// Severity outside [1, 10] is rejected rather than extrapolated; the UI
/// slider is bounded, but the projector validates because it is the public
/// entry point.
pub fn project(
    climate_severity: u8,
    investment_level: InvestmentLevel,
) -> Result<ScenarioProjection, ScenarioError> {
    if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&climate_severity) {
        return Err(ScenarioError::SeverityOutOfRange(climate_severity));
    }

    let multiplier = climate_multiplier(climate_severity);
    let adjusted_demand_ml = BASE_DEMAND_ML * multiplier;
    let required_investment_r = BASE_INVESTMENT_R * multiplier;
    let failure_probability_pct = UNMITIGATED_FAILURE_RISK_PCT
        * investment_level.impact_factor()
        * (climate_severity as f32 / SEVERITY_MAX as f32);

    Ok(ScenarioProjection {
        climate_severity,
        investment_level,
        climate_multiplier: multiplier,
        adjusted_demand_ml,
        failure_probability_pct,
        required_investment_r,
        demand_delta_ml: adjusted_demand_ml - BASE_DEMAND_ML,
        investment_delta_r: required_investment_r - BASE_INVESTMENT_R,
    })
}
