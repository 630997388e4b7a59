//! Core domain: app states, system ordering, and scene shell.

mod state;
mod systems;

pub use state::{AppSet, GameState};

use bevy::prelude::*;

use crate::core::systems::{
    grab_cursor, pause_physics, release_cursor, resume_physics, setup_scene, toggle_pause,
};

/// The physics tick rate. The movement forces are applied once per fixed
/// step, decoupled from the render frame rate.
const PHYSICS_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .configure_sets(Update, (AppSet::RecordInput, AppSet::Update).chain())
            .add_systems(Startup, setup_scene)
            .add_systems(Update, toggle_pause)
            .add_systems(OnEnter(GameState::Playing), (grab_cursor, resume_physics))
            .add_systems(OnEnter(GameState::Paused), (release_cursor, pause_physics));
    }
}
