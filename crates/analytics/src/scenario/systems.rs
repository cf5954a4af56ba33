//! Systems keeping the current projection in sync with the controls.

use bevy::prelude::*;

use super::calculations::project;
use super::types::{CurrentProjection, ScenarioControls};

/// Recompute [`CurrentProjection`] whenever the controls change.
///
/// The sidebar slider and selector can only produce valid inputs, so a
/// projection failure here means a programming error; the previous
/// projection is kept and the error logged.
pub fn refresh_projection(
    controls: Res<ScenarioControls>,
    mut current: ResMut<CurrentProjection>,
) {
    if !controls.is_changed() {
        return;
    }
    match project(controls.climate_severity, controls.investment_level) {
        Ok(projection) => current.0 = projection,
        Err(e) => warn!("scenario projection rejected: {e}"),
    }
}

pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioControls>()
            .init_resource::<CurrentProjection>()
            .add_systems(Update, refresh_projection);
    }
}
