//! Quick-win leak repair savings calculator (executive overview tab).

use bevy::prelude::*;

/// Slider bounds for the calculator inputs.
pub const LEAKS_RANGE: std::ops::RangeInclusive<u32> = 1..=20;
pub const LEAK_SIZE_RANGE: std::ops::RangeInclusive<f32> = 1.0..=5.0;
pub const COST_PER_ML_RANGE: std::ops::RangeInclusive<f32> = 10_000.0..=25_000.0;

/// Payback period quoted alongside the projected savings, in months.
pub const PAYBACK_MONTHS: u32 = 14;

/// User inputs to the quick-win calculator.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct QuickWinInputs {
    /// Number of key leaks targeted for repair.
    pub leaks_to_fix: u32,
    /// Average leak size in Ml per month.
    pub avg_leak_size_ml: f32,
    /// Value of water per Ml, in Rand.
    pub cost_per_ml_r: f32,
}

impl Default for QuickWinInputs {
    fn default() -> Self {
        Self {
            leaks_to_fix: 10,
            avg_leak_size_ml: 2.3,
            cost_per_ml_r: 17_500.0,
        }
    }
}

impl QuickWinInputs {
    /// Projected savings per month, in Rand.
    pub fn monthly_savings_r(&self) -> f32 {
        self.leaks_to_fix as f32 * self.avg_leak_size_ml * self.cost_per_ml_r
    }

    /// Projected savings per year, in Rand.
    pub fn annual_savings_r(&self) -> f32 {
        self.monthly_savings_r() * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_savings() {
        let inputs = QuickWinInputs::default();
        // 10 leaks * 2.3 Ml * R17,500/Ml
        assert!((inputs.monthly_savings_r() - 402_500.0).abs() < 0.01);
        assert!((inputs.annual_savings_r() - 4_830_000.0).abs() < 0.1);
    }

    #[test]
    fn test_savings_scale_linearly_with_leaks() {
        let one = QuickWinInputs {
            leaks_to_fix: 1,
            ..Default::default()
        };
        let five = QuickWinInputs {
            leaks_to_fix: 5,
            ..Default::default()
        };
        assert!((five.monthly_savings_r() - one.monthly_savings_r() * 5.0).abs() < 0.01);
    }

    #[test]
    fn test_defaults_within_slider_bounds() {
        let inputs = QuickWinInputs::default();
        assert!(LEAKS_RANGE.contains(&inputs.leaks_to_fix));
        assert!(LEAK_SIZE_RANGE.contains(&inputs.avg_leak_size_ml));
        assert!(COST_PER_ML_RANGE.contains(&inputs.cost_per_ml_r));
    }
}
