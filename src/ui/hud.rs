//! UI domain: movement HUD readouts.

use bevy::prelude::*;

use crate::grapple::GrappleState;
use crate::movement::{MovementInput, MovementState, Player};
use crate::telemetry::SpeedTelemetry;

const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD root container
#[derive(Component)]
pub struct HudRoot;

/// Marker for the speed readout text
#[derive(Component)]
pub struct SpeedReadout;

/// Marker for the state line text
#[derive(Component)]
pub struct StateReadout;

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                bottom: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.6)),
        ))
        .with_children(|parent| {
            parent.spawn((
                SpeedReadout,
                Text::new("0.0 m/s"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));

            parent.spawn((
                StateReadout,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.8, 0.6)),
            ));
        });
}

pub(crate) fn update_speed_readout(
    players: Query<&SpeedTelemetry, With<Player>>,
    mut texts: Query<&mut Text, With<SpeedReadout>>,
) {
    let Ok(telemetry) = players.single() else {
        return;
    };

    for mut text in &mut texts {
        text.0 = format!("{:.1} m/s", telemetry.speed);
    }
}

pub(crate) fn update_state_readout(
    input: Res<MovementInput>,
    players: Query<(&MovementState, &GrappleState), With<Player>>,
    mut texts: Query<&mut Text, With<StateReadout>>,
) {
    let Ok((state, grapple)) = players.single() else {
        return;
    };

    let mut flags = Vec::new();
    if state.grounded {
        flags.push("grounded");
    }
    if state.on_slope {
        flags.push("slope");
    }
    if state.crouching {
        flags.push("crouching");
    }
    if state.moving {
        flags.push("moving");
    }
    if input.sprint_held {
        flags.push("sprint");
    }
    if grapple.is_grappling() {
        flags.push("grappling");
    }

    for mut text in &mut texts {
        text.0 = flags.join(" | ");
    }
}
