//! In-game HUD - dragon health and capture counters.

use bevy::prelude::*;

use crate::core::GameState;
use crate::entities::{CaptureTally, Dragon, Health};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for dragon health bar fill.
#[derive(Component)]
pub struct DragonHealthBar;

/// Marker for the capture counter text.
#[derive(Component)]
pub struct TallyText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(
            Update,
            (update_dragon_bar, update_tally_text).run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // HUD root container (top-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Dragon", Color::srgb(0.8, 0.2, 0.2), DragonHealthBar);

            parent.spawn((
                Text::new(tally_label(&CaptureTally::default())),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                TallyText,
            ));
        });
}

/// Helper to spawn a status bar.
fn spawn_bar<M: Component>(parent: &mut ChildBuilder, label: &str, color: Color, bar_marker: M) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            // Label
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    // Bar fill
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        bar_marker,
                    ));
                });
        });
}

fn tally_label(tally: &CaptureTally) -> String {
    format!(
        "Ghosts captured: {}   Graves: {}   Chests: {}   Dragons: {}",
        tally.ghosts, tally.graves, tally.chests, tally.dragons
    )
}

/// Update dragon bar; empty once the dragon is gone.
fn update_dragon_bar(
    dragon_query: Query<&Health, With<Dragon>>,
    mut bar_query: Query<&mut Node, With<DragonHealthBar>>,
) {
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    let percentage = dragon_query
        .get_single()
        .map_or(0.0, |health| health.percentage());
    bar.width = Val::Percent(percentage * 100.0);
}

/// Update the capture counter when the tally changes.
fn update_tally_text(tally: Res<CaptureTally>, mut text_query: Query<&mut Text, With<TallyText>>) {
    if !tally.is_changed() {
        return;
    }
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    text.0 = tally_label(&tally);
}
