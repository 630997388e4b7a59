//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.sprint_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.crouch_just_pressed = keyboard.just_pressed(KeyCode::KeyC);
    input.crouch_just_released = keyboard.just_released(KeyCode::KeyC);
}
