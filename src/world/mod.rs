//! World module - arena data, camera, and entity spawning.

mod data;
mod error;
mod plugin;
mod spawning;

pub use data::{ArenaBounds, ArenaDefinition, CurrentArena, DragonDef, ResetZoneDef, ARENA_PATH};
pub use error::DataLoadError;
pub use plugin::{setup_arena, WorldPlugin};
pub use spawning::{spawn_essence, spawn_ghost, ArenaEntity, MainCamera};
