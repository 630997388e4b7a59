//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the movement overlay is visible
    pub overlay_visible: bool,
}
