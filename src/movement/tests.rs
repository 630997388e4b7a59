//! Movement domain: unit tests for locomotion state logic.

use bevy::prelude::*;

use super::components::MovementState;
use super::resources::MovementTuning;
use super::systems::movement::{
    ForcePolicy, approach_speed, crouch_scale_target, desired_drag, is_flat, policy_acceleration,
    slope_adjusted, speed_target,
};

fn tuning() -> MovementTuning {
    MovementTuning::default()
}

#[test]
fn grappling_drag_overrides_ground_state() {
    let t = tuning();
    assert_eq!(desired_drag(true, true, &t), t.grappling_drag);
    assert_eq!(desired_drag(true, false, &t), t.grappling_drag);
}

#[test]
fn drag_follows_ground_state_without_grapple() {
    let t = tuning();
    assert_eq!(desired_drag(false, true, &t), t.ground_drag);
    assert_eq!(desired_drag(false, false, &t), t.air_drag);
}

#[test]
fn sprint_target_requires_ground() {
    let t = tuning();
    assert_eq!(speed_target(true, true, &t), t.sprint_speed);
    assert_eq!(speed_target(false, true, &t), t.walk_speed);
    assert_eq!(speed_target(true, false, &t), t.walk_speed);
}

#[test]
fn speed_approach_is_monotonic_and_never_overshoots() {
    let t = tuning();
    let dt = 1.0 / 60.0;
    let mut speed = t.walk_speed;

    for _ in 0..600 {
        let next = approach_speed(speed, t.sprint_speed, t.acceleration, dt);
        assert!(next >= speed, "speed decreased while approaching sprint");
        assert!(next <= t.sprint_speed, "speed overshot the sprint target");
        speed = next;
    }

    assert!((speed - t.sprint_speed).abs() < 1e-3);
}

#[test]
fn speed_approach_survives_huge_frame_deltas() {
    let t = tuning();
    // acceleration * dt > 1 would extrapolate past the target without the
    // clamp.
    let speed = approach_speed(t.walk_speed, t.sprint_speed, t.acceleration, 10.0);
    assert_eq!(speed, t.sprint_speed);
}

#[test]
fn force_policy_is_total_and_exclusive() {
    for grounded in [false, true] {
        for on_slope in [false, true] {
            for crouching in [false, true] {
                let policy = ForcePolicy::select(grounded, on_slope, crouching);

                let expected = if !grounded {
                    ForcePolicy::Air
                } else if crouching {
                    ForcePolicy::Crouch
                } else if on_slope {
                    ForcePolicy::Slope
                } else {
                    ForcePolicy::Ground
                };

                assert_eq!(policy, expected);
            }
        }
    }
}

#[test]
fn air_policy_scales_by_air_multiplier() {
    let t = tuning();
    let mut state = MovementState::new(&t);
    state.move_direction = Vec3::new(0.0, 0.0, -3.0);

    let ground = policy_acceleration(ForcePolicy::Ground, &state, &t);
    let air = policy_acceleration(ForcePolicy::Air, &state, &t);

    assert_eq!(ground, Vec3::NEG_Z * state.move_speed * t.movement_multiplier);
    assert!((air - ground * t.air_multiplier).length() < 1e-5);
}

#[test]
fn crouch_policy_uses_crouch_speed_and_multiplier() {
    let t = tuning();
    let mut state = MovementState::new(&t);
    state.move_direction = Vec3::X * 5.0;

    let crouch = policy_acceleration(ForcePolicy::Crouch, &state, &t);
    assert_eq!(crouch, Vec3::X * t.crouch_speed * t.crouch_multiplier);
}

#[test]
fn slope_policy_uses_projected_direction() {
    let t = tuning();
    let mut state = MovementState::new(&t);
    state.move_direction = Vec3::NEG_Z;
    state.slope_normal = Vec3::new(0.0, 1.0, 0.3).normalize();
    state.slope_move_direction = slope_adjusted(state.move_direction, state.slope_normal);

    let slope = policy_acceleration(ForcePolicy::Slope, &state, &t);
    assert!((slope.length() - state.move_speed * t.movement_multiplier).abs() < 1e-4);
    assert!(slope.dot(state.slope_normal).abs() < 1e-4);
}

#[test]
fn zero_input_applies_zero_acceleration() {
    let t = tuning();
    let state = MovementState::new(&t);

    for policy in [
        ForcePolicy::Ground,
        ForcePolicy::Slope,
        ForcePolicy::Air,
        ForcePolicy::Crouch,
    ] {
        assert_eq!(policy_acceleration(policy, &state, &t), Vec3::ZERO);
    }
}

#[test]
fn slope_projection_is_tangent_to_surface() {
    let normal = Vec3::new(0.2, 1.0, -0.1).normalize();
    let projected = slope_adjusted(Vec3::new(1.0, 0.0, 1.0), normal);
    assert!(projected.dot(normal).abs() < 1e-5);
}

#[test]
fn flat_normal_detection() {
    assert!(is_flat(Vec3::Y));
    assert!(!is_flat(Vec3::new(0.0, 1.0, 0.1).normalize()));
    assert!(!is_flat(Vec3::X));
}

#[test]
fn crouch_scale_targets() {
    let t = tuning();
    assert_eq!(
        crouch_scale_target(true, t.crouch_y_scale),
        Vec3::new(1.0, 0.5, 1.0)
    );
    // Stand-up target is 1.5 on the vertical axis, as shipped.
    assert_eq!(
        crouch_scale_target(false, t.crouch_y_scale),
        Vec3::new(1.0, 1.5, 1.0)
    );
}

#[test]
fn tuning_defaults_match_shipped_values() {
    let t = tuning();
    assert_eq!(t.move_speed, 6.0);
    assert_eq!(t.walk_speed, 4.0);
    assert_eq!(t.sprint_speed, 6.0);
    assert_eq!(t.crouch_height(), 1.0);
    assert_eq!(t.slope_ray_length(), 1.5);
}
