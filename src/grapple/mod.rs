//! Grapple domain: grapple state provider read by locomotion.
//!
//! Locomotion only consumes the boolean attach state (for drag selection);
//! the pull itself is this plugin's business.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{Orientation, eye_position};
use crate::core::{AppSet, GameState};
use crate::movement::{GameLayer, MovementTuning, Player};

/// Attach state for the grapple. Maintained here; the movement systems
/// read `active` and nothing else.
#[derive(Component, Debug, Default)]
pub struct GrappleState {
    pub active: bool,
    /// World-space anchor of the current attachment.
    pub anchor: Vec3,
}

impl GrappleState {
    pub fn is_grappling(&self) -> bool {
        self.active
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GrappleTuning {
    pub max_distance: f32,
    pub pull_acceleration: f32,
}

impl Default for GrappleTuning {
    fn default() -> Self {
        Self {
            max_distance: 35.0,
            pull_acceleration: 18.0,
        }
    }
}

pub struct GrapplePlugin;

impl Plugin for GrapplePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GrappleTuning>()
            .add_systems(
                Update,
                update_grapple
                    .in_set(AppSet::RecordInput)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                apply_grapple_pull.run_if(in_state(GameState::Playing)),
            );
    }
}

/// Hold the right mouse button to grapple: an eye-forward raycast arms the
/// hook, release disarms it.
fn update_grapple(
    mouse: Res<ButtonInput<MouseButton>>,
    spatial_query: SpatialQuery,
    tuning: Res<GrappleTuning>,
    movement_tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Orientation, &mut GrappleState), With<Player>>,
) {
    for (transform, orientation, mut grapple) in &mut query {
        if mouse.just_pressed(MouseButton::Right) && !grapple.active {
            let origin = eye_position(transform, &movement_tuning);
            let filter =
                SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

            let Ok(direction) = Dir3::new(orientation.look_direction()) else {
                continue;
            };

            if let Some(hit) = spatial_query.cast_ray(
                origin,
                direction,
                tuning.max_distance,
                true,
                &filter,
            ) {
                grapple.active = true;
                grapple.anchor = origin + direction * hit.distance;
                debug!("Grapple attached at {}", grapple.anchor);
            }
        }

        if mouse.just_released(MouseButton::Right) && grapple.active {
            grapple.active = false;
            debug!("Grapple released");
        }
    }
}

/// Constant pull toward the anchor while attached. Mass-independent, like
/// the locomotion forces.
fn apply_grapple_pull(
    time: Res<Time>,
    tuning: Res<GrappleTuning>,
    mut query: Query<(&Transform, &GrappleState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (transform, grapple, mut velocity) in &mut query {
        if !grapple.active {
            continue;
        }

        let to_anchor = grapple.anchor - transform.translation;
        velocity.0 += to_anchor.normalize_or_zero() * tuning.pull_acceleration * dt;
    }
}
