//! Ghost Lasso - a top-down 2D game about catching ghosts with a drawn line.
//!
//! Hold the left mouse button and draw. Whenever the line crosses itself the
//! enclosed region is tested, and everything inside makes progress toward
//! capture: ghosts shrink and are caught after enough loops, graves release
//! new ghosts, the dragon takes damage, and chests open.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, capture events, scale tweening
//! - **Capture**: The lasso line, loop detection, containment and progress
//! - **Entities**: Ghosts, graves, dragon, chests and their reactions
//! - **World**: Arena data, camera and spawning
//! - **UI**: HUD and pause overlay

pub mod capture;
pub mod core;
pub mod entities;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct GhostLassoPlugin;

impl Plugin for GhostLassoPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Arena and camera
            .add_plugins(world::WorldPlugin)

            // Lasso drawing and capture
            .add_plugins(capture::CapturePlugin)

            // Reactions to capture events
            .add_plugins(entities::EntityPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
