//! Baseline constants for the 2030 scenario projector.

/// Baseline 2030 demand projection in Ml, before climate adjustment.
pub const BASE_DEMAND_ML: f32 = 3700.0;

/// Baseline 2030 capital investment requirement in Rand.
pub const BASE_INVESTMENT_R: f32 = 68_000_000.0;

/// System failure risk with no intervention, in percent.
pub const UNMITIGATED_FAILURE_RISK_PCT: f32 = 25.0;

/// Lowest accepted climate severity.
pub const SEVERITY_MIN: u8 = 1;

/// Highest accepted climate severity.
pub const SEVERITY_MAX: u8 = 10;

/// Severity at which the climate multiplier is exactly 1.0.
pub const SEVERITY_NEUTRAL: u8 = 5;

/// Multiplier change per severity step away from neutral.
pub const SEVERITY_STEP: f32 = 0.05;
