//! Core domain: app state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}

/// High-level ordering for per-frame systems. Input recording (keyboard
/// axes, mouse look, grapple trigger, telemetry) runs before any state
/// update consumes it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppSet {
    RecordInput,
    Update,
}
