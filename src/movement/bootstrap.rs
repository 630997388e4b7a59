//! Movement domain: player bootstrap from loaded content.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::Orientation;
use crate::content::ContentRegistry;
use crate::grapple::GrappleState;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player, PlayerBody};
use crate::telemetry::SpeedTelemetry;

pub(crate) const PLAYER_RADIUS: f32 = 0.5;
pub(crate) const SPAWN_POINT: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Apply loaded tuning overrides, then spawn the player body with its
/// render child and collaborator components.
pub(crate) fn spawn_player(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    mut tuning: ResMut<MovementTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if let Some(def) = registry.as_ref().and_then(|r| r.movement.as_ref()) {
        *tuning = MovementTuning::from(def);
    } else {
        warn!("No movement tuning in content registry, using defaults");
    }

    let body_mesh = meshes.add(Capsule3d::new(
        PLAYER_RADIUS,
        tuning.player_height - 2.0 * PLAYER_RADIUS,
    ));
    let body_material = materials.add(Color::srgb(0.9, 0.9, 0.9));

    commands
        .spawn((
            // Identity & state
            (
                Player,
                MovementState::new(&tuning),
                Orientation::default(),
                GrappleState::default(),
                SpeedTelemetry::default(),
            ),
            Transform::from_translation(SPAWN_POINT),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::cylinder(PLAYER_RADIUS, tuning.player_height),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                LinearDamping(tuning.ground_drag),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
                ),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerBody,
                Mesh3d(body_mesh),
                MeshMaterial3d(body_material),
                Transform::default(),
            ));
        });

    info!(
        "Spawned player at {}: walk={}, sprint={}, jump={}",
        SPAWN_POINT, tuning.walk_speed, tuning.sprint_speed, tuning.jump_force
    );
}
