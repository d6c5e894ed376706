//! UI plugin - HUD and pause overlay.

use bevy::prelude::*;

use crate::core::PauseState;
use super::hud;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Pause overlay
            .add_systems(OnEnter(PauseState::Paused), setup_pause_overlay)
            .add_systems(OnExit(PauseState::Paused), cleanup_pause_overlay);
    }
}

/// Marker for pause overlay UI entities.
#[derive(Component)]
struct PauseOverlayUi;

/// Spawn the pause overlay.
fn setup_pause_overlay(mut commands: Commands) {
    // Semi-transparent overlay
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            PauseOverlayUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
            parent.spawn((
                Text::new("Press Esc to resume"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

/// Clean up pause overlay.
fn cleanup_pause_overlay(mut commands: Commands, query: Query<Entity, With<PauseOverlayUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
