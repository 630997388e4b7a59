//! Debug domain: movement state overlay.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::grapple::GrappleState;
use crate::movement::{MovementState, Player};

/// Marker for the debug overlay root
#[derive(Component)]
pub struct DebugOverlay;

/// Marker for the overlay body text
#[derive(Component)]
pub struct DebugOverlayText;

pub(crate) fn spawn_debug_overlay(commands: &mut Commands) {
    commands
        .spawn((
            DebugOverlay,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                top: Val::Px(20.0),
                width: Val::Px(280.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.08, 0.1, 0.9)),
            BorderColor::all(Color::srgb(0.4, 0.35, 0.2)),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("MOVEMENT DEBUG"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.8, 0.4)),
            ));

            parent.spawn((
                Text::new("F1 or ` to toggle | Ctrl+R to respawn"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));

            parent.spawn((
                DebugOverlayText,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.9, 0.5)),
            ));
        });
}

pub(crate) fn update_debug_overlay(
    players: Query<(&MovementState, &GrappleState, &LinearVelocity, &LinearDamping), With<Player>>,
    mut texts: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok((state, grapple, velocity, damping)) = players.single() else {
        return;
    };

    let body = format!(
        "grounded: {}\non_slope: {}\ncrouching: {}\nmoving: {}\nmove_speed: {:.2}\n\
         move_dir: {:.2}\nslope_normal: {:.2}\nvelocity: {:.2}\ndrag: {:.3}\ngrappling: {}",
        state.grounded,
        state.on_slope,
        state.crouching,
        state.moving,
        state.move_speed,
        state.move_direction,
        state.slope_normal,
        velocity.0,
        damping.0,
        grapple.is_grappling(),
    );

    for mut text in &mut texts {
        text.0 = body.clone();
    }
}
