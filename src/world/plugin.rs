//! World plugin - arena loading, setup, and restart.

use bevy::prelude::*;

use crate::core::{ForceStopDrawing, GameState, PauseState};
use crate::entities::CaptureTally;

use super::data::{load_arena_definition, ArenaBounds, CurrentArena};
use super::spawning::{spawn_arena_entities, spawn_camera, ArenaEntity};

/// World plugin - handles arena loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentArena>()
            .init_resource::<ArenaBounds>()
            .add_systems(Startup, (spawn_camera, load_arena_definition))
            .add_systems(OnEnter(GameState::InGame), setup_arena)
            .add_systems(
                Update,
                restart_arena
                    .run_if(in_state(GameState::InGame))
                    .run_if(in_state(PauseState::Running)),
            );
    }
}

/// Set up the arena from data.
pub fn setup_arena(mut commands: Commands, arena: Res<CurrentArena>) {
    info!(
        "Building arena {:.1}x{:.1}",
        arena.0.half_extents.0 * 2.0,
        arena.0.half_extents.1 * 2.0
    );
    spawn_arena_entities(&mut commands, &arena.0);
}

/// Press R to clear the arena and spawn it again.
fn restart_arena(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    arena: Res<CurrentArena>,
    arena_query: Query<Entity, With<ArenaEntity>>,
    mut tally: ResMut<CaptureTally>,
    mut force_stop: EventWriter<ForceStopDrawing>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    force_stop.send(ForceStopDrawing);
    for entity in arena_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    *tally = CaptureTally::default();

    info!("Restarting arena");
    spawn_arena_entities(&mut commands, &arena.0);
}
