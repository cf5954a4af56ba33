//! Capital project pipeline tracker data.

use serde::{Deserialize, Serialize};

/// A category of capital works with its delivery pipeline counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub name: &'static str,
    pub completed: u32,
    pub in_progress: u32,
    pub planned: u32,
    pub budget_r: f32,
}

impl ProjectCategory {
    /// Total projects in this category across all pipeline stages.
    pub fn total(&self) -> u32 {
        self.completed + self.in_progress + self.planned
    }
}

/// The project pipeline shown on the financial tab.
pub fn project_pipeline() -> Vec<ProjectCategory> {
    vec![
        ProjectCategory {
            name: "Borehole Projects",
            completed: 5,
            in_progress: 12,
            planned: 8,
            budget_r: 45_000_000.0,
        },
        ProjectCategory {
            name: "Purification Plants",
            completed: 2,
            in_progress: 3,
            planned: 2,
            budget_r: 125_000_000.0,
        },
        ProjectCategory {
            name: "Pipe Replacement",
            completed: 23,
            in_progress: 45,
            planned: 67,
            budget_r: 89_000_000.0,
        },
        ProjectCategory {
            name: "IoT Upgrades",
            completed: 12,
            in_progress: 28,
            planned: 35,
            budget_r: 34_000_000.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_categories() {
        assert_eq!(project_pipeline().len(), 4);
    }

    #[test]
    fn test_totals() {
        let pipeline = project_pipeline();
        let boreholes = &pipeline[0];
        assert_eq!(boreholes.total(), 25);
    }

    #[test]
    fn test_budgets_positive() {
        for category in project_pipeline() {
            assert!(category.budget_r > 0.0);
        }
    }
}
