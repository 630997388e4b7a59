//! Content domain: serializable definitions for tuning and arena layout.

use serde::{Deserialize, Serialize};

/// Movement tuning overrides loaded from `assets/data/movement.ron`.
/// Field defaults mirror the compiled-in [`crate::movement::MovementTuning`]
/// so a partial file only overrides what it names.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuningDef {
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

impl Default for MovementTuningDef {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            crouch_speed: 3.0,
            air_multiplier: 0.4,
            movement_multiplier: 10.0,
            crouch_multiplier: 5.0,
            walk_speed: 4.0,
            sprint_speed: 6.0,
            acceleration: 10.0,
            jump_force: 5.0,
            ground_drag: 6.0,
            air_drag: 2.0,
            grappling_drag: 0.001,
            ground_distance: 0.2,
            player_height: 2.0,
            crouch_y_scale: 0.5,
            jump_boost_impulse: 150.0,
        }
    }
}

/// Arena layout loaded from `assets/data/arena.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaDef {
    /// Side length of the square ground slab.
    pub ground_extent: f32,
    pub ground_thickness: f32,
    pub ramps: Vec<RampDef>,
    pub walls: Vec<WallDef>,
    pub boost_pads: Vec<BoostPadDef>,
    pub scatter: ScatterDef,
}

impl Default for ArenaDef {
    fn default() -> Self {
        Self {
            ground_extent: 80.0,
            ground_thickness: 1.0,
            ramps: vec![RampDef {
                position: [12.0, 1.5, -10.0],
                size: [8.0, 0.5, 14.0],
                incline_degrees: 20.0,
                yaw_degrees: 0.0,
            }],
            walls: vec![WallDef {
                position: [-14.0, 4.0, -8.0],
                size: [1.0, 8.0, 16.0],
            }],
            boost_pads: vec![BoostPadDef {
                position: [-6.0, 0.6, 6.0],
                radius: 1.5,
            }],
            scatter: ScatterDef::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RampDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub incline_degrees: f32,
    pub yaw_degrees: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WallDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoostPadDef {
    pub position: [f32; 3],
    pub radius: f32,
}

/// Deterministic obstacle scatter: same seed, same arena.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScatterDef {
    pub seed: u64,
    pub count: usize,
    pub spread: f32,
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for ScatterDef {
    fn default() -> Self {
        Self {
            seed: 7,
            count: 12,
            spread: 30.0,
            min_size: 1.0,
            max_size: 3.5,
        }
    }
}
