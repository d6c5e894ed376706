//! Ghost Lasso - Entry Point
//!
//! Controls:
//! - Left mouse (hold and drag): Draw the lasso line
//! - Escape: Pause/Unpause
//! - R: Restart the arena

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ghost Lasso".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.05, 0.06, 0.1)))

        // Our game plugin
        .add_plugins(ghost_lasso::GhostLassoPlugin)

        .run();
}
