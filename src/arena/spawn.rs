//! Arena domain: spawning the movement playground from loaded layout.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{ContentRegistry, ScatterDef};
use crate::movement::{GameLayer, JumpBoost};

pub(crate) fn spawn_arena(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let def = registry
        .as_ref()
        .and_then(|r| r.arena.clone())
        .unwrap_or_default();

    let ground_color = materials.add(Color::srgb(0.35, 0.45, 0.35));
    let ramp_color = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let wall_color = materials.add(Color::srgb(0.3, 0.3, 0.4));
    let pad_color = materials.add(Color::srgb(0.9, 0.7, 0.2));
    let block_color = materials.add(Color::srgb(0.45, 0.45, 0.5));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground slab
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(
            def.ground_extent,
            def.ground_thickness,
            def.ground_extent,
        ))),
        MeshMaterial3d(ground_color.clone()),
        Transform::from_xyz(0.0, -def.ground_thickness / 2.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(def.ground_extent, def.ground_thickness, def.ground_extent),
        ground_layers,
    ));

    // Ramps count as ground so the slope probe and the ground probe both
    // see them.
    for ramp in &def.ramps {
        let rotation = Quat::from_rotation_y(ramp.yaw_degrees.to_radians())
            * Quat::from_rotation_x(ramp.incline_degrees.to_radians());
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(ramp.size[0], ramp.size[1], ramp.size[2]))),
            MeshMaterial3d(ramp_color.clone()),
            Transform::from_translation(Vec3::from_array(ramp.position)).with_rotation(rotation),
            RigidBody::Static,
            Collider::cuboid(ramp.size[0], ramp.size[1], ramp.size[2]),
            ground_layers,
        ));
    }

    for wall in &def.walls {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(wall.size[0], wall.size[1], wall.size[2]))),
            MeshMaterial3d(wall_color.clone()),
            Transform::from_translation(Vec3::from_array(wall.position)),
            RigidBody::Static,
            Collider::cuboid(wall.size[0], wall.size[1], wall.size[2]),
            wall_layers,
        ));
    }

    for pad in &def.boost_pads {
        commands.spawn((
            JumpBoost,
            Sensor,
            Mesh3d(meshes.add(Cylinder::new(pad.radius, 0.2))),
            MeshMaterial3d(pad_color.clone()),
            Transform::from_translation(Vec3::from_array(pad.position)),
            RigidBody::Static,
            Collider::cylinder(pad.radius, 0.2),
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    let blocks = scatter_blocks(&def.scatter);
    for (position, size) in &blocks {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(block_color.clone()),
            Transform::from_translation(*position),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    }

    info!(
        "Arena spawned: {} ramps, {} walls, {} boost pads, {} scatter blocks (seed {})",
        def.ramps.len(),
        def.walls.len(),
        def.boost_pads.len(),
        blocks.len(),
        def.scatter.seed
    );
}

/// Deterministic obstacle placement: the same seed always produces the
/// same arena.
pub(crate) fn scatter_blocks(def: &ScatterDef) -> Vec<(Vec3, Vec3)> {
    let mut rng = ChaCha8Rng::seed_from_u64(def.seed);
    let mut blocks = Vec::with_capacity(def.count);

    for _ in 0..def.count {
        let size = Vec3::new(
            rng.random_range(def.min_size..=def.max_size),
            rng.random_range(def.min_size..=def.max_size),
            rng.random_range(def.min_size..=def.max_size),
        );
        let position = Vec3::new(
            rng.random_range(-def.spread..=def.spread),
            size.y / 2.0,
            rng.random_range(-def.spread..=def.spread),
        );

        // Keep a clear area around the spawn point.
        if Vec2::new(position.x, position.z).length() < 4.0 {
            continue;
        }

        blocks.push((position, size));
    }

    blocks
}
