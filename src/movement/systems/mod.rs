//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{apply_jump_boost, detect_ground, detect_slope};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_movement_force, check_moving, compute_move_direction, control_drag, control_speed,
    handle_crouch, handle_jump, project_slope_direction, tween_body_scale,
};
