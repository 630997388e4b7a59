//! Telemetry domain: scalar speed readout consumed by locomotion and HUD.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::AppSet;

/// Speeds below this snap to exactly zero so `speed != 0` is a meaningful
/// "standing still" test for consumers.
const SPEED_EPSILON: f32 = 1e-3;

#[derive(Component, Debug, Default)]
pub struct SpeedTelemetry {
    pub speed: f32,
}

pub struct TelemetryPlugin;

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_speed.in_set(AppSet::RecordInput));
    }
}

fn update_speed(mut query: Query<(&LinearVelocity, &mut SpeedTelemetry)>) {
    for (velocity, mut telemetry) in &mut query {
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z).length();
        telemetry.speed = if horizontal < SPEED_EPSILON {
            0.0
        } else {
            horizontal
        };
    }
}
