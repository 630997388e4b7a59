//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floor, ramps, obstacles)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (boost pads) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Render child of the player. Carries the tweened crouch scale so the
/// physics collider on the parent stays exact.
#[derive(Component, Debug)]
pub struct PlayerBody;

/// Marker for boost pad sensors. Entering one applies a fixed upward
/// impulse regardless of any other state.
#[derive(Component, Debug)]
pub struct JumpBoost;

#[derive(Component, Debug)]
pub struct MovementState {
    /// Feet probe overlaps the ground layer.
    pub grounded: bool,
    /// Crouch intent. Only toggled while grounded; the visual scale lags
    /// behind it while the tween catches up.
    pub crouching: bool,
    /// Nonzero telemetry speed while grounded. Left untouched while
    /// airborne.
    pub moving: bool,
    /// Live speed, interpolated toward the walk or sprint target each
    /// frame. Seeded from the tuning default.
    pub move_speed: f32,
    /// World-space desired direction in the orientation's basis. Not
    /// normalized here.
    pub move_direction: Vec3,
    /// Surface normal from the most recent downward raycast hit. Persists
    /// across misses.
    pub slope_normal: Vec3,
    /// Move direction projected onto the plane of `slope_normal`.
    pub slope_move_direction: Vec3,
    /// A raycast hit this frame whose normal deviates from world up.
    pub on_slope: bool,
}

impl MovementState {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            grounded: false,
            crouching: false,
            moving: false,
            move_speed: tuning.move_speed,
            move_direction: Vec3::ZERO,
            slope_normal: Vec3::Y,
            slope_move_direction: Vec3::ZERO,
            on_slope: false,
        }
    }
}
