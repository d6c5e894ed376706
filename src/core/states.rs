//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Capture systems
//! only run while the game is in `InGame` and not paused.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while config and arena data are read
/// - Move to `InGame` once loading completes
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Pausing keeps the arena alive but freezes drawing, roaming and reactions.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PauseState {
    /// Normal gameplay - drawing and capturing
    #[default]
    Running,
    /// Game is paused (overlay on gameplay)
    Paused,
}
