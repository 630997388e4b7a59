//! Core domain: pause flow, cursor capture, and scene setup.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions};

use crate::core::state::GameState;

pub(crate) fn setup_scene(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(14.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Escape toggles between playing and paused.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
    }
}

pub(crate) fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}

pub(crate) fn resume_physics(mut time: ResMut<Time<Physics>>) {
    time.unpause();
}

pub(crate) fn grab_cursor(mut cursor_options: Query<&mut CursorOptions, With<Window>>) {
    if let Ok(mut cursor) = cursor_options.single_mut() {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}

pub(crate) fn release_cursor(mut cursor_options: Query<&mut CursorOptions, With<Window>>) {
    if let Ok(mut cursor) = cursor_options.single_mut() {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}
