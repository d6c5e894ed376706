//! Which capturable entities fall inside a loop.

use bevy::ecs::entity::Entity;
use bevy::math::Vec2;
use std::num::NonZeroU32;

use super::detector::CapturePolygon;

/// Kinds of entity the lasso can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Ghost,
    Grave,
    Dragon,
    Chest,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 4] = [
        EntityCategory::Ghost,
        EntityCategory::Grave,
        EntityCategory::Dragon,
        EntityCategory::Chest,
    ];
}

/// Snapshot of an active entity handed over by the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedEntity {
    pub id: Entity,
    pub category: EntityCategory,
    pub position: Vec2,
    /// Per-entity hit threshold (ghosts only)
    pub threshold: Option<NonZeroU32>,
}

/// A circle that aborts the stroke when the line touches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetArea {
    pub center: Vec2,
    pub radius: f32,
}

/// Source of live entities, polled fresh for every loop.
pub trait EntityRegistry {
    /// All currently active entities of one category.
    fn query_by_category(&self, category: EntityCategory) -> Vec<TrackedEntity>;

    /// Areas the raw stroke must not touch.
    fn reset_areas(&self) -> Vec<ResetArea> {
        Vec::new()
    }
}

/// Snapshot of every active entity, with the subset inside the polygon.
#[derive(Debug, Default)]
pub struct Containment {
    pub active: Vec<TrackedEntity>,
    pub inside: Vec<TrackedEntity>,
}

impl Containment {
    pub fn is_active(&self, id: Entity) -> bool {
        self.active.iter().any(|entity| entity.id == id)
    }
}

/// Full scan of every category against the polygon.
pub fn evaluate_containment(polygon: &CapturePolygon, registry: &impl EntityRegistry) -> Containment {
    let active: Vec<TrackedEntity> = EntityCategory::ALL
        .iter()
        .flat_map(|category| registry.query_by_category(*category))
        .collect();

    let inside = active
        .iter()
        .filter(|entity| polygon.contains(entity.position))
        .copied()
        .collect();

    Containment { active, inside }
}
