//! Global events used for cross-system communication.
//!
//! The capture session only reports what happened; the systems that scale
//! sprites, despawn ghosts or damage the dragon listen for these events.
//! This keeps the capture core free of any knowledge about sprites.

use bevy::prelude::*;

use crate::capture::{EntityCategory, ResetReason};

/// A loop closed; carries the ring used for the containment test.
#[derive(Event, Debug, Clone)]
pub struct LoopDetected {
    pub vertices: Vec<Vec2>,
}

/// An entity was inside a loop. Used for capture VFX and a highlight flash.
#[derive(Event, Debug, Clone, Copy)]
pub struct EntityContained {
    pub entity: Entity,
    pub category: EntityCategory,
}

/// Hit count changed for a ghost or grave.
#[derive(Event, Debug, Clone, Copy)]
pub struct EntityProgress {
    pub entity: Entity,
    pub category: EntityCategory,
    pub hits: u32,
    /// 0.0 to 1.0
    pub progress: f32,
    /// Target visual scale relative to the entity's base scale
    pub scale: f32,
}

/// Fired at most once per entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct EntityCaptured {
    pub entity: Entity,
    pub category: EntityCategory,
    pub position: Vec2,
}

/// One loop around the dragon.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragonHit {
    pub entity: Entity,
    pub damage: u32,
}

/// Every grave that reached its threshold during the same loop.
#[derive(Event, Debug, Clone)]
pub struct GravesCaptured {
    pub graves: Vec<Entity>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ChestOpened {
    pub entity: Entity,
}

/// The stroke ended; these entities should return to full size.
#[derive(Event, Debug, Clone)]
pub struct ProgressRestored {
    pub entities: Vec<Entity>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct StrokeReset {
    pub reason: ResetReason,
}

/// Request from outside the capture systems (cutscene, menu) to drop the stroke.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ForceStopDrawing;
