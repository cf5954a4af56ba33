//! Types for the 2030 scenario projector.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::constants::{SEVERITY_MAX, SEVERITY_MIN};

/// Capital investment tier selected for the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentLevel {
    Minimal,
    Moderate,
    Aggressive,
}

/// All investment levels, in selector order.
pub const ALL_INVESTMENT_LEVELS: [InvestmentLevel; 3] = [
    InvestmentLevel::Minimal,
    InvestmentLevel::Moderate,
    InvestmentLevel::Aggressive,
];

impl InvestmentLevel {
    /// Display label including the tier's budget.
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentLevel::Minimal => "Minimal (R30M)",
            InvestmentLevel::Moderate => "Moderate (R50M)",
            InvestmentLevel::Aggressive => "Aggressive (R80M)",
        }
    }

    /// Residual-risk factor: the fraction of unmitigated failure risk that
    /// remains at this tier.
    pub fn impact_factor(&self) -> f32 {
        match self {
            InvestmentLevel::Minimal => 0.8,
            InvestmentLevel::Moderate => 0.6,
            InvestmentLevel::Aggressive => 0.3,
        }
    }
}

impl FromStr for InvestmentLevel {
    type Err = ScenarioError;

    /// Parse a selector label. Accepts both the plain tier name and the
    /// budget-suffixed display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for level in ALL_INVESTMENT_LEVELS {
            if s == level.label() {
                return Ok(level);
            }
        }
        match s {
            "Minimal" => Ok(InvestmentLevel::Minimal),
            "Moderate" => Ok(InvestmentLevel::Moderate),
            "Aggressive" => Ok(InvestmentLevel::Aggressive),
            other => Err(ScenarioError::UnknownInvestmentLevel(other.to_string())),
        }
    }
}

/// Invalid scenario input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Climate severity outside the accepted [1, 10] range.
    SeverityOutOfRange(u8),
    /// Investment level label not among the three recognized tiers.
    UnknownInvestmentLevel(String),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::SeverityOutOfRange(value) => write!(
                f,
                "climate severity {value} outside accepted range [{SEVERITY_MIN}, {SEVERITY_MAX}]"
            ),
            ScenarioError::UnknownInvestmentLevel(label) => {
                write!(f, "unknown investment level: {label:?}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {}

/// User-controlled scenario inputs.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioControls {
    /// Climate change severity, 1-10.
    pub climate_severity: u8,
    pub investment_level: InvestmentLevel,
}

impl Default for ScenarioControls {
    fn default() -> Self {
        Self {
            climate_severity: 7,
            investment_level: InvestmentLevel::Moderate,
        }
    }
}

/// The derived outputs for one scenario input pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub climate_severity: u8,
    pub investment_level: InvestmentLevel,
    /// Demand/investment scaling factor derived from severity.
    pub climate_multiplier: f32,
    /// Climate-adjusted 2030 demand, Ml.
    pub adjusted_demand_ml: f32,
    /// Projected system failure probability, percent.
    pub failure_probability_pct: f32,
    /// Climate-adjusted 2030 investment requirement, Rand.
    pub required_investment_r: f32,
    /// Demand change vs the unadjusted baseline, Ml.
    pub demand_delta_ml: f32,
    /// Investment change vs the unadjusted baseline, Rand.
    pub investment_delta_r: f32,
}

/// The projection for the current `ScenarioControls`, refreshed by
/// [`super::systems::refresh_projection`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CurrentProjection(pub ScenarioProjection);

impl Default for CurrentProjection {
    fn default() -> Self {
        let controls = ScenarioControls::default();
        // Default controls are always in range.
        let projection = super::calculations::project(
            controls.climate_severity,
            controls.investment_level,
        )
        .unwrap_or(ScenarioProjection {
            climate_severity: controls.climate_severity,
            investment_level: controls.investment_level,
            climate_multiplier: 1.0,
            adjusted_demand_ml: super::constants::BASE_DEMAND_ML,
            failure_probability_pct: 0.0,
            required_investment_r: super::constants::BASE_INVESTMENT_R,
            demand_delta_ml: 0.0,
            investment_delta_r: 0.0,
        });
        Self(projection)
    }
}
