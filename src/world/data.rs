//! Arena data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Default location of the arena file.
pub const ARENA_PATH: &str = "assets/data/arena.ron";

fn default_half_extents() -> (f32, f32) {
    (8.0, 4.5)
}

fn default_ghost_count() -> u32 {
    6
}

fn default_ghost_threshold() -> (u32, u32) {
    (2, 4)
}

fn default_dragon_health() -> f32 {
    10.0
}

fn default_reset_radius() -> f32 {
    0.4
}

/// Dragon placement and toughness.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DragonDef {
    pub position: (f32, f32),
    #[serde(default = "default_dragon_health")]
    pub health: f32,
}

/// A circle that aborts the stroke when touched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResetZoneDef {
    pub position: (f32, f32),
    #[serde(default = "default_reset_radius")]
    pub radius: f32,
}

/// Arena layout loaded from RON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArenaDefinition {
    /// Half width and half height of the playable area, in world units
    #[serde(default = "default_half_extents")]
    pub half_extents: (f32, f32),
    /// Ghosts spawned at random positions
    #[serde(default = "default_ghost_count")]
    pub ghost_count: u32,
    /// Inclusive range each ghost's capture threshold is drawn from
    #[serde(default = "default_ghost_threshold")]
    pub ghost_threshold: (u32, u32),
    #[serde(default)]
    pub graves: Vec<(f32, f32)>,
    #[serde(default)]
    pub dragon: Option<DragonDef>,
    #[serde(default)]
    pub chests: Vec<(f32, f32)>,
    #[serde(default)]
    pub reset_zones: Vec<ResetZoneDef>,
}

impl Default for ArenaDefinition {
    fn default() -> Self {
        Self {
            half_extents: default_half_extents(),
            ghost_count: default_ghost_count(),
            ghost_threshold: default_ghost_threshold(),
            graves: vec![(-5.0, 2.5), (-4.0, 3.0), (-3.0, 2.5)],
            dragon: Some(DragonDef {
                position: (5.0, -2.0),
                health: default_dragon_health(),
            }),
            chests: vec![(6.0, 3.0)],
            reset_zones: vec![ResetZoneDef {
                position: (0.0, -3.5),
                radius: default_reset_radius(),
            }],
        }
    }
}

impl ArenaDefinition {
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let (min, max) = self.ghost_threshold;
        if min == 0 || min > max {
            return Err(DataLoadError::InvalidThresholdRange { min, max });
        }
        let (w, h) = self.half_extents;
        if w <= 0.0 || h <= 0.0 {
            return Err(DataLoadError::InvalidExtents(w, h));
        }
        Ok(())
    }

    pub fn from_ron(source: &str, path: &str) -> Result<Self, DataLoadError> {
        let arena: ArenaDefinition = ron::from_str(source).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        arena.validate()?;
        Ok(arena)
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &display)
    }
}

/// The arena in play.
#[derive(Resource, Debug, Default)]
pub struct CurrentArena(pub ArenaDefinition);

/// Playable area, centred on the origin.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub half_extents: Vec2,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        let (w, h) = default_half_extents();
        Self {
            half_extents: Vec2::new(w, h),
        }
    }
}

/// Load the arena definition, falling back to the built-in layout.
pub fn load_arena_definition(mut commands: Commands) {
    let arena = match ArenaDefinition::load(Path::new(ARENA_PATH)) {
        Ok(arena) => {
            info!(
                "Loaded arena: {} ghosts, {} graves, {} chests",
                arena.ghost_count,
                arena.graves.len(),
                arena.chests.len()
            );
            arena
        }
        Err(DataLoadError::FileNotFound(path)) => {
            warn!("Arena file not found: {}, using default arena", path);
            ArenaDefinition::default()
        }
        Err(e) => {
            error!("{}; using default arena", e);
            ArenaDefinition::default()
        }
    };

    let (w, h) = arena.half_extents;
    commands.insert_resource(ArenaBounds {
        half_extents: Vec2::new(w, h),
    });
    commands.insert_resource(CurrentArena(arena));
}
