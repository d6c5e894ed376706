//! ECS adapters for the capture session's registry and hooks.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::containment::{EntityCategory, EntityRegistry, ResetArea, TrackedEntity};
use super::detector::CapturePolygon;
use super::hooks::{CaptureHooks, ProgressUpdate, ResetReason};
use crate::core::{
    ChestOpened, DragonHit, EntityCaptured, EntityContained, EntityProgress, GravesCaptured,
    LoopDetected, ProgressRestored, StrokeReset,
};
use crate::entities::{Chest, Dragon, Ghost, Grave, Opened, ResetZone};

/// Live capturable entities, read straight from the world on each loop.
#[derive(SystemParam)]
pub struct CaptureTargets<'w, 's> {
    ghosts: Query<'w, 's, (Entity, &'static Transform, &'static Ghost)>,
    graves: Query<'w, 's, (Entity, &'static Transform), With<Grave>>,
    dragons: Query<'w, 's, (Entity, &'static Transform), With<Dragon>>,
    chests: Query<'w, 's, (Entity, &'static Transform), (With<Chest>, Without<Opened>)>,
    reset_zones: Query<'w, 's, (&'static Transform, &'static ResetZone)>,
}

fn tracked(entity: Entity, transform: &Transform, category: EntityCategory) -> TrackedEntity {
    TrackedEntity {
        id: entity,
        category,
        position: transform.translation.truncate(),
        threshold: None,
    }
}

impl EntityRegistry for CaptureTargets<'_, '_> {
    fn query_by_category(&self, category: EntityCategory) -> Vec<TrackedEntity> {
        match category {
            EntityCategory::Ghost => self
                .ghosts
                .iter()
                .map(|(entity, transform, ghost)| TrackedEntity {
                    threshold: Some(ghost.threshold),
                    ..tracked(entity, transform, category)
                })
                .collect(),
            EntityCategory::Grave => self
                .graves
                .iter()
                .map(|(entity, transform)| tracked(entity, transform, category))
                .collect(),
            EntityCategory::Dragon => self
                .dragons
                .iter()
                .map(|(entity, transform)| tracked(entity, transform, category))
                .collect(),
            EntityCategory::Chest => self
                .chests
                .iter()
                .map(|(entity, transform)| tracked(entity, transform, category))
                .collect(),
        }
    }

    fn reset_areas(&self) -> Vec<ResetArea> {
        self.reset_zones
            .iter()
            .map(|(transform, zone)| ResetArea {
                center: transform.translation.truncate(),
                radius: zone.radius,
            })
            .collect()
    }
}

/// Forwards session notifications as Bevy events.
#[derive(SystemParam)]
pub struct CaptureEventWriters<'w> {
    loops: EventWriter<'w, LoopDetected>,
    contained: EventWriter<'w, EntityContained>,
    progress: EventWriter<'w, EntityProgress>,
    captured: EventWriter<'w, EntityCaptured>,
    dragon_hits: EventWriter<'w, DragonHit>,
    graves: EventWriter<'w, GravesCaptured>,
    chests: EventWriter<'w, ChestOpened>,
    restored: EventWriter<'w, ProgressRestored>,
    resets: EventWriter<'w, StrokeReset>,
}

impl CaptureHooks for CaptureEventWriters<'_> {
    fn loop_detected(&mut self, polygon: &CapturePolygon) {
        self.loops.send(LoopDetected {
            vertices: polygon.vertices.clone(),
        });
    }

    fn entity_contained(&mut self, id: Entity, category: EntityCategory) {
        self.contained.send(EntityContained {
            entity: id,
            category,
        });
    }

    fn entity_progress(&mut self, update: ProgressUpdate) {
        self.progress.send(EntityProgress {
            entity: update.id,
            category: update.category,
            hits: update.hits,
            progress: update.progress,
            scale: update.scale,
        });
    }

    fn entity_captured(&mut self, id: Entity, category: EntityCategory, position: Vec2) {
        self.captured.send(EntityCaptured {
            entity: id,
            category,
            position,
        });
    }

    fn dragon_hit(&mut self, id: Entity, damage: u32) {
        self.dragon_hits.send(DragonHit { entity: id, damage });
    }

    fn graves_captured(&mut self, ids: &[Entity]) {
        self.graves.send(GravesCaptured {
            graves: ids.to_vec(),
        });
    }

    fn chest_opened(&mut self, id: Entity) {
        self.chests.send(ChestOpened { entity: id });
    }

    fn progress_restored(&mut self, ids: &[Entity]) {
        self.restored.send(ProgressRestored {
            entities: ids.to_vec(),
        });
    }

    fn stroke_reset(&mut self, reason: ResetReason) {
        self.resets.send(StrokeReset { reason });
    }
}
