//! Per-entity hit counting and capture thresholds.

use bevy::ecs::entity::Entity;
use std::collections::{HashMap, HashSet};

use super::config::CaptureConfig;
use super::containment::{Containment, EntityCategory, TrackedEntity};
use super::hooks::{CaptureHooks, ProgressUpdate};

/// Hit count for one entity since the last stroke reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsideCount {
    pub category: EntityCategory,
    pub hits: u32,
}

/// Accumulates loop hits and fires capture outcomes.
///
/// Counts are cleared with the stroke. The sets of captured and opened
/// entities survive strokes, so those events fire once per entity lifetime,
/// and are pruned once an entity no longer exists.
#[derive(Debug)]
pub struct CaptureProgress {
    ghost_threshold: u32,
    grave_threshold: u32,
    min_shrink_ratio: f32,
    dragon_damage: u32,
    counts: HashMap<Entity, InsideCount>,
    captured: HashSet<Entity>,
    opened: HashSet<Entity>,
}

impl CaptureProgress {
    /// Expects a validated config (non-zero thresholds).
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            ghost_threshold: config.ghost_threshold.max(1),
            grave_threshold: config.grave_threshold.max(1),
            min_shrink_ratio: config.min_shrink_ratio,
            dragon_damage: config.dragon_damage,
            counts: HashMap::new(),
            captured: HashSet::new(),
            opened: HashSet::new(),
        }
    }

    pub fn hits(&self, id: Entity) -> Option<u32> {
        self.counts.get(&id).map(|count| count.hits)
    }

    pub fn counts(&self) -> &HashMap<Entity, InsideCount> {
        &self.counts
    }

    pub fn is_captured(&self, id: Entity) -> bool {
        self.captured.contains(&id)
    }

    pub fn is_opened(&self, id: Entity) -> bool {
        self.opened.contains(&id)
    }

    /// Shrink ratio for a given progress in `[0, 1]`.
    pub fn shrink_ratio(&self, progress: f32) -> f32 {
        1.0 + (self.min_shrink_ratio - 1.0) * progress.clamp(0.0, 1.0)
    }

    /// Apply one loop's containment result.
    pub fn apply(&mut self, containment: &Containment, hooks: &mut impl CaptureHooks) {
        // Entities destroyed since the last loop drop out lazily
        self.counts.retain(|id, _| containment.is_active(*id));
        self.captured.retain(|id| containment.is_active(*id));
        self.opened.retain(|id| containment.is_active(*id));

        let mut graves_done = Vec::new();

        for entity in &containment.inside {
            match entity.category {
                EntityCategory::Ghost => self.hit_ghost(entity, hooks),
                EntityCategory::Grave => {
                    if self.hit_grave(entity, hooks) {
                        graves_done.push(entity.id);
                    }
                }
                EntityCategory::Dragon => hooks.dragon_hit(entity.id, self.dragon_damage),
                EntityCategory::Chest => {
                    if self.opened.insert(entity.id) {
                        hooks.chest_opened(entity.id);
                    }
                }
            }
        }

        if !graves_done.is_empty() {
            hooks.graves_captured(&graves_done);
        }
    }

    fn increment(&mut self, entity: &TrackedEntity) -> u32 {
        let count = self.counts.entry(entity.id).or_insert(InsideCount {
            category: entity.category,
            hits: 0,
        });
        count.hits += 1;
        count.hits
    }

    fn hit_ghost(&mut self, entity: &TrackedEntity, hooks: &mut impl CaptureHooks) {
        if self.captured.contains(&entity.id) {
            return;
        }

        let threshold = entity
            .threshold
            .map_or(self.ghost_threshold, |threshold| threshold.get());
        let hits = self.increment(entity);
        let progress = (hits as f32 / threshold as f32).clamp(0.0, 1.0);

        hooks.entity_progress(ProgressUpdate {
            id: entity.id,
            category: entity.category,
            hits,
            progress,
            scale: self.shrink_ratio(progress),
        });

        if hits >= threshold {
            self.captured.insert(entity.id);
            self.counts.remove(&entity.id);
            hooks.entity_captured(entity.id, entity.category, entity.position);
        }
    }

    /// Returns true when the grave crossed its threshold on this hit.
    fn hit_grave(&mut self, entity: &TrackedEntity, hooks: &mut impl CaptureHooks) -> bool {
        if self.captured.contains(&entity.id) {
            return false;
        }

        let hits = self.increment(entity);
        let progress = (hits as f32 / self.grave_threshold as f32).clamp(0.0, 1.0);

        hooks.entity_progress(ProgressUpdate {
            id: entity.id,
            category: entity.category,
            hits,
            progress,
            scale: 1.0,
        });

        if hits >= self.grave_threshold {
            self.captured.insert(entity.id);
            self.counts.remove(&entity.id);
            return true;
        }
        false
    }

    /// Clear per-stroke counts, returning the ghosts whose shrink needs undoing.
    pub fn reset(&mut self) -> Vec<Entity> {
        let shrunk = self
            .counts
            .iter()
            .filter(|(_, count)| count.category == EntityCategory::Ghost)
            .map(|(id, _)| *id)
            .collect();
        self.counts.clear();
        shrunk
    }
}
