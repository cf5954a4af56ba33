//! Calendar value types for the monthly reporting series.
//!
//! The historical datasets run at monthly resolution from January 2022
//! through December 2024 (36 samples); forecasts cover 2025-2030.

use serde::{Deserialize, Serialize};

/// First month of the historical series.
pub const SERIES_START: Month = Month {
    year: 2022,
    month: 1,
};

/// Last month of the historical series.
pub const SERIES_END: Month = Month {
    year: 2024,
    month: 12,
};

/// Number of months in the historical series.
pub const SERIES_LEN: usize = 36;

/// First and last year covered by the forecast table.
pub const FORECAST_START_YEAR: i32 = 2025;
pub const FORECAST_END_YEAR: i32 = 2030;

/// A calendar month, the timestamp of every historical sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    /// 1-based month number (1 = January).
    pub month: u32,
}

impl Month {
    /// The month `offset` steps after the series start.
    pub fn from_series_offset(offset: usize) -> Self {
        let total = (SERIES_START.month as usize - 1) + offset;
        Self {
            year: SERIES_START.year + (total / 12) as i32,
            month: (total % 12) as u32 + 1,
        }
    }

    /// Offset of this month from the series start, if it lies inside the series.
    pub fn series_offset(&self) -> Option<usize> {
        if *self < SERIES_START || *self > SERIES_END {
            return None;
        }
        let months = (self.year - SERIES_START.year) * 12 + self.month as i32
            - SERIES_START.month as i32;
        Some(months as usize)
    }

    /// Short display label, e.g. "Jul 2024".
    pub fn label(&self) -> String {
        format!("{} {}", month_abbrev(self.month), self.year)
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

/// All months of the historical series, oldest first.
pub fn series_months() -> Vec<Month> {
    (0..SERIES_LEN).map(Month::from_series_offset).collect()
}

/// All years covered by the forecast table.
pub fn forecast_years() -> Vec<i32> {
    (FORECAST_START_YEAR..=FORECAST_END_YEAR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_has_36_months() {
        let months = series_months();
        assert_eq!(months.len(), SERIES_LEN);
        assert_eq!(months[0], SERIES_START);
        assert_eq!(months[SERIES_LEN - 1], SERIES_END);
    }

    #[test]
    fn test_offset_roundtrip() {
        for (i, month) in series_months().into_iter().enumerate() {
            assert_eq!(month.series_offset(), Some(i));
        }
    }

    #[test]
    fn test_offset_rejects_out_of_series() {
        let before = Month {
            year: 2021,
            month: 12,
        };
        let after = Month {
            year: 2025,
            month: 1,
        };
        assert_eq!(before.series_offset(), None);
        assert_eq!(after.series_offset(), None);
    }

    #[test]
    fn test_year_rollover() {
        let m = Month::from_series_offset(12);
        assert_eq!(
            m,
            Month {
                year: 2023,
                month: 1
            }
        );
    }

    #[test]
    fn test_label() {
        let m = Month {
            year: 2024,
            month: 7,
        };
        assert_eq!(m.label(), "Jul 2024");
    }

    #[test]
    fn test_forecast_years() {
        assert_eq!(forecast_years(), vec![2025, 2026, 2027, 2028, 2029, 2030]);
    }

    #[test]
    fn test_month_ordering() {
        let a = Month {
            year: 2022,
            month: 12,
        };
        let b = Month {
            year: 2023,
            month: 1,
        };
        assert!(a < b);
    }
}
