//! Movement domain: ground probe, slope probe, and boost pad triggers.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::systems::movement::is_flat;
use crate::movement::{GameLayer, JumpBoost, MovementState, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut state) in &mut query {
        let was_grounded = state.grounded;

        // Sphere probe at a fixed offset below the body center, against the
        // ground layer only.
        let feet = transform.translation - Vec3::Y * (tuning.player_height / 2.0);
        let probe = Collider::sphere(tuning.ground_distance);
        let hits = spatial_query.shape_intersections(&probe, feet, Quat::IDENTITY, &ground_filter);

        state.grounded = !hits.is_empty();

        if state.grounded && !was_grounded {
            debug!("Landed");
        } else if !state.grounded && was_grounded {
            debug!("Left ground");
        }
    }
}

pub(crate) fn detect_slope(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut state) in &mut query {
        match spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            tuning.slope_ray_length(),
            true,
            &ground_filter,
        ) {
            Some(hit) => {
                state.slope_normal = hit.normal;
                state.on_slope = !is_flat(hit.normal);
            }
            // The stored normal persists across misses; only the slope flag
            // drops.
            None => state.on_slope = false,
        }
    }
}

/// Entering a boost pad applies a fixed upward impulse, once per entry,
/// regardless of grounded/crouch/grapple state.
pub(crate) fn apply_jump_boost(
    mut collision_events: MessageReader<CollisionStart>,
    tuning: Res<MovementTuning>,
    pads: Query<(), With<JumpBoost>>,
    mut players: Query<&mut LinearVelocity, With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (pad_entity, player_entity) in pairs {
            if pads.get(pad_entity).is_err() {
                continue;
            }

            let Ok(mut velocity) = players.get_mut(player_entity) else {
                continue;
            };

            velocity.y += tuning.jump_boost_impulse;
            debug!("Boost pad entered, impulse {}", tuning.jump_boost_impulse);
        }
    }
}
