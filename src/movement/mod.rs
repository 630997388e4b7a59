//! Movement domain: first-person locomotion plugin wiring and public
//! exports.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, JumpBoost, MovementState, Player, PlayerBody};
pub use resources::{MovementInput, MovementTuning};

pub(crate) use bootstrap::SPAWN_POINT;

use bevy::prelude::*;

use crate::core::{AppSet, GameState};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                systems::read_input
                    .in_set(AppSet::RecordInput)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    systems::detect_ground,
                    systems::detect_slope,
                    systems::compute_move_direction,
                    systems::control_drag,
                    systems::control_speed,
                    systems::check_moving,
                    systems::handle_jump,
                    systems::handle_crouch,
                    systems::tween_body_scale,
                    systems::project_slope_direction,
                    systems::apply_jump_boost,
                )
                    .chain()
                    .in_set(AppSet::Update)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                systems::apply_movement_force.run_if(in_state(GameState::Playing)),
            );
    }
}
