//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::MovementTuningDef;

/// Immutable locomotion tuning. The live, interpolated move speed is
/// runtime state and lives on [`crate::movement::MovementState`] instead.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub crouch_speed: f32,
    pub air_multiplier: f32,
    pub movement_multiplier: f32,
    pub crouch_multiplier: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub acceleration: f32,
    pub jump_force: f32,
    pub ground_drag: f32,
    pub air_drag: f32,
    pub grappling_drag: f32,
    pub ground_distance: f32,
    pub player_height: f32,
    pub crouch_y_scale: f32,
    pub jump_boost_impulse: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from(&MovementTuningDef::default())
    }
}

impl From<&MovementTuningDef> for MovementTuning {
    fn from(def: &MovementTuningDef) -> Self {
        Self {
            move_speed: def.move_speed,
            crouch_speed: def.crouch_speed,
            air_multiplier: def.air_multiplier,
            movement_multiplier: def.movement_multiplier,
            crouch_multiplier: def.crouch_multiplier,
            walk_speed: def.walk_speed,
            sprint_speed: def.sprint_speed,
            acceleration: def.acceleration,
            jump_force: def.jump_force,
            ground_drag: def.ground_drag,
            air_drag: def.air_drag,
            grappling_drag: def.grappling_drag,
            ground_distance: def.ground_distance,
            player_height: def.player_height,
            crouch_y_scale: def.crouch_y_scale,
            jump_boost_impulse: def.jump_boost_impulse,
        }
    }
}

impl MovementTuning {
    /// Collider height while crouched.
    pub fn crouch_height(&self) -> f32 {
        self.player_height * self.crouch_y_scale
    }

    /// Length of the downward slope probe from the body center.
    pub fn slope_ray_length(&self) -> f32 {
        self.player_height / 2.0 + 0.5
    }
}

/// Per-frame input record. Sampled once at the top of the frame so the
/// update systems consume an explicit snapshot instead of polling ambient
/// input state.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x = strafe (right positive), y = forward (forward positive).
    pub axis: Vec2,
    pub sprint_held: bool,
    pub jump_just_pressed: bool,
    pub crouch_just_pressed: bool,
    pub crouch_just_released: bool,
}
