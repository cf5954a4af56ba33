//! 2030 scenario projector.
//!
//! Pure, deterministic mapping from two user controls (climate severity
//! 1-10 and a three-tier investment level) to projected 2030 demand,
//! system failure risk, and required investment.

mod calculations;
mod constants;
mod systems;
mod types;

#[cfg(test)]
mod tests;

pub use calculations::{climate_multiplier, project};
pub use constants::{
    BASE_DEMAND_ML, BASE_INVESTMENT_R, SEVERITY_MAX, SEVERITY_MIN,
    UNMITIGATED_FAILURE_RISK_PCT,
};
pub use systems::{refresh_projection, ScenarioPlugin};
pub use types::{
    CurrentProjection, InvestmentLevel, ScenarioControls, ScenarioError, ScenarioProjection,
    ALL_INVESTMENT_LEVELS,
};
