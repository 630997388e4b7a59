//! Content domain: unit tests for RON parsing.

use super::data::{ArenaDef, MovementTuningDef};
use super::loader::parse_ron;

#[test]
fn parses_full_movement_tuning() {
    let source = r#"
        (
            move_speed: 6.0,
            crouch_speed: 3.0,
            air_multiplier: 0.4,
            movement_multiplier: 10.0,
            crouch_multiplier: 5.0,
            walk_speed: 4.0,
            sprint_speed: 6.0,
            acceleration: 10.0,
            jump_force: 5.0,
            ground_drag: 6.0,
            air_drag: 2.0,
            grappling_drag: 0.001,
            ground_distance: 0.2,
            player_height: 2.0,
            crouch_y_scale: 0.5,
            jump_boost_impulse: 150.0,
        )
    "#;

    let def: MovementTuningDef = parse_ron("movement.ron", source).unwrap();
    assert_eq!(def.sprint_speed, 6.0);
    assert_eq!(def.grappling_drag, 0.001);
    assert_eq!(def.jump_boost_impulse, 150.0);
}

#[test]
fn partial_tuning_falls_back_to_defaults() {
    let def: MovementTuningDef = parse_ron("movement.ron", "(sprint_speed: 9.5)").unwrap();
    assert_eq!(def.sprint_speed, 9.5);
    // Everything unnamed keeps its compiled default.
    assert_eq!(def.walk_speed, 4.0);
    assert_eq!(def.ground_drag, 6.0);
}

#[test]
fn parses_arena_layout() {
    let source = r#"
        (
            ground_extent: 40.0,
            ramps: [
                (position: [5.0, 1.0, 0.0], size: [6.0, 0.5, 10.0], incline_degrees: 15.0, yaw_degrees: 90.0),
            ],
            boost_pads: [
                (position: [0.0, 0.5, 3.0], radius: 2.0),
            ],
        )
    "#;

    let def: ArenaDef = parse_ron("arena.ron", source).unwrap();
    assert_eq!(def.ground_extent, 40.0);
    assert_eq!(def.ramps.len(), 1);
    assert_eq!(def.boost_pads[0].radius, 2.0);
    // Unnamed sections keep defaults.
    assert_eq!(def.ground_thickness, 1.0);
}

#[test]
fn malformed_file_reports_its_name() {
    let err = parse_ron::<ArenaDef>("arena.ron", "(ground_extent: )").unwrap_err();
    assert_eq!(err.file, "arena.ron");
    assert!(err.to_string().contains("arena.ron"));
}
