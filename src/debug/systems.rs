//! Debug domain: overlay toggle and respawn hotkey.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugOverlay, spawn_debug_overlay};
use crate::movement::{Player, SPAWN_POINT};

/// Toggle the movement overlay with F1 or the backtick key
pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.overlay_visible = !debug_state.overlay_visible;

        if debug_state.overlay_visible {
            spawn_debug_overlay(&mut commands);
        } else {
            for entity in &existing_overlay {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Ctrl+R: put the player back at the spawn point with zeroed velocity
pub(crate) fn handle_respawn_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut players: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        for (mut transform, mut velocity) in &mut players {
            transform.translation = SPAWN_POINT;
            velocity.0 = Vec3::ZERO;
        }
        info!("[DEBUG] Player respawned");
    }
}
