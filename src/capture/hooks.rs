//! Outbound notifications from the capture core.

use bevy::ecs::entity::Entity;
use bevy::math::Vec2;

use super::containment::EntityCategory;
use super::detector::CapturePolygon;

/// Why a stroke ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    Released,
    TouchedResetZone,
    ForcedStop,
}

/// Progress update for one entity after a loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub id: Entity,
    pub category: EntityCategory,
    pub hits: u32,
    /// `hits / threshold`, clamped to `[0, 1]`
    pub progress: f32,
    /// Visual scale to apply (1.0 for categories that don't shrink)
    pub scale: f32,
}

/// Side effects requested by the drawing session.
///
/// Every method is fire-and-forget; the session never waits on or reads
/// back anything from the host.
pub trait CaptureHooks {
    fn loop_detected(&mut self, _polygon: &CapturePolygon) {}

    /// Capture VFX and highlight flash for an entity inside a loop.
    fn entity_contained(&mut self, _id: Entity, _category: EntityCategory) {}

    fn entity_progress(&mut self, _update: ProgressUpdate) {}

    /// At most once per entity.
    fn entity_captured(&mut self, _id: Entity, _category: EntityCategory, _position: Vec2) {}

    fn dragon_hit(&mut self, _id: Entity, _damage: u32) {}

    /// Every grave that reached its threshold in one loop, batched.
    fn graves_captured(&mut self, _ids: &[Entity]) {}

    /// At most once per chest.
    fn chest_opened(&mut self, _id: Entity) {}

    /// Entities whose shrink should be undone because the stroke ended.
    fn progress_restored(&mut self, _ids: &[Entity]) {}

    fn stroke_reset(&mut self, _reason: ResetReason) {}
}
