//! Debug domain: dev-only movement overlay and hotkeys.

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{handle_respawn_hotkey, toggle_debug_overlay};
use crate::debug::ui::update_debug_overlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_overlay, handle_respawn_hotkey, update_debug_overlay),
        );
    }
}
