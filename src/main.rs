mod arena;
mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod grapple;
mod movement;
mod telemetry;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Vaultrun".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            grapple::GrapplePlugin,
            telemetry::TelemetryPlugin,
            camera::CameraPlugin,
            arena::ArenaPlugin,
            ui::UiPlugin,
            #[cfg(feature = "dev-tools")]
            debug::DebugPlugin,
        ))
        .run();
}
