//! Entities module - ghosts, graves, the dragon, chests and their reactions.

mod components;
mod plugin;
mod reactions;
mod roaming;

pub use components::*;
pub use plugin::EntityPlugin;
pub use roaming::random_heading;
