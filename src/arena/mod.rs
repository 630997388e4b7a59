//! Arena domain: the movement playground.

mod spawn;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::spawn_arena);
    }
}
