//! Content domain: RON-backed configuration for tuning and arena layout.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{ArenaDef, BoostPadDef, MovementTuningDef, RampDef, ScatterDef, WallDef};
pub use loader::ContentLoadError;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_ron_file;

/// Loaded configuration, consumed by the movement bootstrap and arena spawn.
/// Each entry is `None` when its file was missing or malformed; consumers
/// fall back to compiled defaults.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub movement: Option<MovementTuningDef>,
    pub arena: Option<ArenaDef>,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let base_path = Path::new("assets/data");
    let mut registry = ContentRegistry::default();

    match load_ron_file::<MovementTuningDef>(&base_path.join("movement.ron")) {
        Ok(def) => registry.movement = Some(def),
        Err(e) => warn!("{}, using default movement tuning", e),
    }

    match load_ron_file::<ArenaDef>(&base_path.join("arena.ron")) {
        Ok(def) => registry.arena = Some(def),
        Err(e) => warn!("{}, using default arena layout", e),
    }

    info!(
        "Content loaded: movement tuning {}, arena layout {}",
        if registry.movement.is_some() { "from file" } else { "defaults" },
        if registry.arena.is_some() { "from file" } else { "defaults" },
    );

    commands.insert_resource(registry);
}
