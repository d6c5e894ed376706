//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::states::*;
use super::tween::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the pause sub-state
/// - Capture events (LoopDetected, EntityCaptured, etc.)
/// - Basic game flow systems
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PauseState>()

            // Register capture events
            .add_event::<LoopDetected>()
            .add_event::<EntityContained>()
            .add_event::<EntityProgress>()
            .add_event::<EntityCaptured>()
            .add_event::<DragonHit>()
            .add_event::<GravesCaptured>()
            .add_event::<ChestOpened>()
            .add_event::<ProgressRestored>()
            .add_event::<StrokeReset>()
            .add_event::<ForceStopDrawing>()

            // Data files are read in Startup, so there is nothing to wait for
            .add_systems(OnEnter(GameState::Loading), transition_to_game)

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::InGame)))

            // Shrink feedback keeps easing while paused so it settles
            .add_systems(Update, update_smooth_scales);
    }
}

/// Move from Loading to InGame.
fn transition_to_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PauseState>>,
    mut next_state: ResMut<NextState<PauseState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PauseState::Running => next_state.set(PauseState::Paused),
            PauseState::Paused => next_state.set(PauseState::Running),
        }
    }
}
