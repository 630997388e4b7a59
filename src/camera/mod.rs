//! Camera domain: mouse look and the first-person render camera.

use std::f32::consts::FRAC_PI_2;

use avian3d::prelude::PhysicsSystems;
use bevy::ecs::message::MessageReader;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::core::{AppSet, GameState};
use crate::movement::{MovementTuning, Player};

// Padding for camera pitch clamping to keep the basis well-conditioned.
const ANGLE_EPSILON: f32 = 0.001953125;

const SENSITIVITY: f32 = 0.001;

/// Eye height above the body center, as a fraction of the player height.
const EYE_HEIGHT_FACTOR: f32 = 0.4;

/// The reference orientation the move direction is computed in. Yaw spans
/// the horizontal basis; pitch only affects the look direction.
#[derive(Component, Debug, Default)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    pub fn yaw_quat(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn look_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Horizontal forward. Forward is -Z.
    pub fn forward(&self) -> Vec3 {
        self.yaw_quat() * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.yaw_quat() * Vec3::X
    }

    /// Full look direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        self.look_quat() * Vec3::NEG_Z
    }
}

#[derive(Component)]
pub struct PlayerCamera;

pub fn eye_position(transform: &Transform, tuning: &MovementTuning) -> Vec3 {
    transform.translation + Vec3::Y * (tuning.player_height * EYE_HEIGHT_FACTOR)
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                mouse_look
                    .in_set(AppSet::RecordInput)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(PostUpdate, sync_camera.after(PhysicsSystems::Writeback));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        PlayerCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
}

fn mouse_look(
    mut mouse_motion: MessageReader<MouseMotion>,
    mut query: Query<&mut Orientation, With<Player>>,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }
    delta *= SENSITIVITY;

    for mut orientation in &mut query {
        orientation.pitch = (orientation.pitch - delta.y)
            .clamp(-FRAC_PI_2 + ANGLE_EPSILON, FRAC_PI_2 - ANGLE_EPSILON);
        orientation.yaw -= delta.x;
    }
}

fn sync_camera(
    tuning: Res<MovementTuning>,
    players: Query<(&Transform, &Orientation), (With<Player>, Without<PlayerCamera>)>,
    mut cameras: Query<&mut Transform, With<PlayerCamera>>,
) {
    let Ok((player_transform, orientation)) = players.single() else {
        return;
    };

    for mut camera_transform in &mut cameras {
        camera_transform.translation = eye_position(player_transform, &tuning);
        camera_transform.rotation = orientation.look_quat();
    }
}
