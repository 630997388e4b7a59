//! UI domain: HUD plugin wiring.

mod hud;

use bevy::prelude::*;

use crate::core::AppSet;
use crate::ui::hud::{spawn_hud, update_speed_readout, update_state_readout};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            (update_speed_readout, update_state_readout).after(AppSet::Update),
        );
    }
}
