//! Movement domain: locomotion systems for drag, speed, crouch, jump, and
//! the per-physics-tick force application.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::Orientation;
use crate::grapple::GrappleState;
use crate::movement::bootstrap::PLAYER_RADIUS;
use crate::movement::{MovementInput, MovementState, MovementTuning, Player, PlayerBody};
use crate::telemetry::SpeedTelemetry;

/// Per-frame interpolation rate for the visual crouch scale.
const CROUCH_TWEEN_RATE: f32 = 12.0;

// TODO: the stand-up scale target (1.5) does not match the upright collider
// height of 2.0; revisit with art before changing either.
const STAND_Y_SCALE: f32 = 1.5;

/// Dot-product threshold below which a surface normal counts as a slope.
const FLAT_EPSILON: f32 = 1e-4;

/// Desired direction in the orientation's yaw basis. Not normalized; the
/// force application normalizes.
pub(crate) fn compute_move_direction(
    input: Res<MovementInput>,
    mut query: Query<(&Orientation, &mut MovementState), With<Player>>,
) {
    for (orientation, mut state) in &mut query {
        state.move_direction =
            orientation.forward() * input.axis.y + orientation.right() * input.axis.x;
    }
}

/// Grappling forces near-zero drag regardless of ground state; otherwise
/// drag follows grounded vs airborne.
pub(crate) fn control_drag(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &GrappleState, &mut LinearDamping), With<Player>>,
) {
    for (state, grapple, mut damping) in &mut query {
        damping.0 = desired_drag(grapple.active, state.grounded, &tuning);
    }
}

/// Exponentially interpolate the live speed toward the sprint target while
/// sprinting on the ground, else toward the walk target.
pub(crate) fn control_speed(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        let target = speed_target(state.grounded, input.sprint_held, &tuning);
        state.move_speed = approach_speed(state.move_speed, target, tuning.acceleration, dt);
    }
}

/// While grounded, moving iff the reported telemetry speed is nonzero.
/// Airborne frames leave the flag untouched.
pub(crate) fn check_moving(
    mut query: Query<(&SpeedTelemetry, &mut MovementState), With<Player>>,
) {
    for (telemetry, mut state) in &mut query {
        if state.grounded {
            state.moving = telemetry.speed != 0.0;
        }
    }
}

/// Jump on the press edge, only while grounded: zero the vertical velocity
/// component, then apply the upward impulse.
pub(crate) fn handle_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (state, mut velocity) in &mut query {
        if state.grounded {
            velocity.y = tuning.jump_force;
            debug!("Jump with impulse {}", tuning.jump_force);
        }
    }
}

/// Crouch edges only register while grounded. The collider height swaps
/// exactly on the edge; the visual scale tweens separately.
pub(crate) fn handle_crouch(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut Collider), With<Player>>,
) {
    for (mut state, mut collider) in &mut query {
        if input.crouch_just_pressed && state.grounded && !state.crouching {
            state.crouching = true;
            *collider = Collider::cylinder(PLAYER_RADIUS, tuning.crouch_height());
            debug!("Crouched, collider height {}", tuning.crouch_height());
        }

        if input.crouch_just_released && state.grounded && state.crouching {
            state.crouching = false;
            *collider = Collider::cylinder(PLAYER_RADIUS, tuning.player_height);
            debug!("Stood up, collider height {}", tuning.player_height);
        }
    }
}

/// Continuously interpolate the render child's scale toward the crouch
/// target. The boolean intent and the visual scale are transiently
/// inconsistent while the tween catches up.
pub(crate) fn tween_body_scale(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    players: Query<&MovementState, With<Player>>,
    mut bodies: Query<&mut Transform, With<PlayerBody>>,
) {
    let Ok(state) = players.single() else {
        return;
    };

    let target = crouch_scale_target(state.crouching, tuning.crouch_y_scale);
    let t = (CROUCH_TWEEN_RATE * time.delta_secs()).clamp(0.0, 1.0);

    for mut transform in &mut bodies {
        transform.scale = transform.scale.lerp(target, t);
    }
}

/// Project the raw move direction onto the plane of the stored slope
/// normal, every frame, grounded or not.
pub(crate) fn project_slope_direction(mut query: Query<&mut MovementState, With<Player>>) {
    for mut state in &mut query {
        state.slope_move_direction = slope_adjusted(state.move_direction, state.slope_normal);
    }
}

/// Fixed-tick force application. Exactly one policy fires per tick; the
/// acceleration is mass-independent and lands directly on the velocity.
pub(crate) fn apply_movement_force(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        let policy = ForcePolicy::select(state.grounded, state.on_slope, state.crouching);
        velocity.0 += policy_acceleration(policy, state, &tuning) * dt;
    }
}

/// The four mutually exclusive locomotion force policies, in priority
/// order: airborne trumps everything, crouch trumps slope, slope trumps
/// flat ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ForcePolicy {
    Air,
    Crouch,
    Slope,
    Ground,
}

impl ForcePolicy {
    pub(crate) fn select(grounded: bool, on_slope: bool, crouching: bool) -> Self {
        if !grounded {
            Self::Air
        } else if crouching {
            Self::Crouch
        } else if on_slope {
            Self::Slope
        } else {
            Self::Ground
        }
    }
}

pub(crate) fn policy_acceleration(
    policy: ForcePolicy,
    state: &MovementState,
    tuning: &MovementTuning,
) -> Vec3 {
    match policy {
        ForcePolicy::Ground => {
            state.move_direction.normalize_or_zero() * state.move_speed * tuning.movement_multiplier
        }
        ForcePolicy::Slope => {
            state.slope_move_direction.normalize_or_zero()
                * state.move_speed
                * tuning.movement_multiplier
        }
        ForcePolicy::Air => {
            state.move_direction.normalize_or_zero()
                * state.move_speed
                * tuning.movement_multiplier
                * tuning.air_multiplier
        }
        ForcePolicy::Crouch => {
            state.move_direction.normalize_or_zero() * tuning.crouch_speed * tuning.crouch_multiplier
        }
    }
}

pub(crate) fn desired_drag(grappling: bool, grounded: bool, tuning: &MovementTuning) -> f32 {
    if grappling {
        tuning.grappling_drag
    } else if grounded {
        tuning.ground_drag
    } else {
        tuning.air_drag
    }
}

pub(crate) fn speed_target(grounded: bool, sprint_held: bool, tuning: &MovementTuning) -> f32 {
    if grounded && sprint_held {
        tuning.sprint_speed
    } else {
        tuning.walk_speed
    }
}

/// One exponential interpolation step. The factor clamp keeps large frame
/// deltas from overshooting the target.
pub(crate) fn approach_speed(current: f32, target: f32, acceleration: f32, dt: f32) -> f32 {
    let t = (acceleration * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}

pub(crate) fn slope_adjusted(direction: Vec3, normal: Vec3) -> Vec3 {
    direction.reject_from(normal)
}

pub(crate) fn is_flat(normal: Vec3) -> bool {
    normal.dot(Vec3::Y) > 1.0 - FLAT_EPSILON
}

pub(crate) fn crouch_scale_target(crouching: bool, crouch_y_scale: f32) -> Vec3 {
    if crouching {
        Vec3::new(1.0, crouch_y_scale, 1.0)
    } else {
        Vec3::new(1.0, STAND_Y_SCALE, 1.0)
    }
}
