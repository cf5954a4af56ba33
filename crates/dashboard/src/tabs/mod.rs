//! The four dashboard tabs and the active-tab state.

pub mod executive;
pub mod financial;
pub mod operations;
pub mod vision;

use bevy::prelude::*;

/// Which tab the central panel renders.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    ExecutiveOverview,
    Operations,
    Financial,
    Vision2030,
}

/// All tabs, in display order.
pub const ALL_TABS: [ActiveTab; 4] = [
    ActiveTab::ExecutiveOverview,
    ActiveTab::Operations,
    ActiveTab::Financial,
    ActiveTab::Vision2030,
];

impl ActiveTab {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::ExecutiveOverview => "Executive Overview",
            ActiveTab::Operations => "Operations",
            ActiveTab::Financial => "Financial",
            ActiveTab::Vision2030 => "2030 Vision",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_executive() {
        assert_eq!(ActiveTab::default(), ActiveTab::ExecutiveOverview);
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<&str> = ALL_TABS.iter().map(ActiveTab::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL_TABS.len());
    }
}
