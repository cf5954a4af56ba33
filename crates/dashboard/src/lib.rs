//! egui rendering for the Manzi Water dashboard.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod formatting;
pub mod header;
pub mod sidebar;
pub mod tabs;
pub mod theme;
pub mod widgets;

pub struct DashboardPlugin;

impl Plugin for DashboardPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<tabs::ActiveTab>()
            .init_resource::<sidebar::SeedInput>()
            .add_systems(Startup, theme::apply_manzi_theme)
            .add_systems(
                Update,
                (
                    // Panel order matters: outer panels claim space first.
                    header::header_ui,
                    sidebar::sidebar_ui,
                    tabs::executive::executive_ui,
                    tabs::operations::operations_ui,
                    tabs::financial::financial_ui,
                    tabs::vision::vision_ui,
                )
                    .chain(),
            );
    }
}
