//! Entity plugin - reactions to capture events and ghost wandering.

use bevy::prelude::*;

use super::components::CaptureTally;
use super::reactions;
use super::roaming;
use crate::capture::CaptureSet;
use crate::core::{GameState, PauseState};

/// Entity plugin - applies capture outcomes to ghosts, graves, the dragon and chests.
pub struct EntityPlugin;

impl Plugin for EntityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CaptureTally>()
            // Flash first so chest opening can see the inserted Flash
            .add_systems(
                Update,
                (
                    reactions::flash_contained,
                    reactions::open_chests,
                    reactions::apply_progress_scale,
                    reactions::capture_ghosts,
                    reactions::replace_graves,
                    reactions::damage_dragon,
                )
                    .chain()
                    .in_set(CaptureSet::React),
            )
            // Pausing aborts the stroke, so the restore must also run while paused
            .add_systems(
                Update,
                reactions::restore_scale
                    .after(CaptureSet::React)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                (
                    reactions::update_flashes,
                    reactions::fade_essence,
                    roaming::roam,
                )
                    .run_if(in_state(GameState::InGame))
                    .run_if(in_state(PauseState::Running)),
            );
    }
}
