//! Drawing session state machine.
//!
//! Each frame the host calls [`DrawingSession::tick`] with the pointer state.
//! Within one tick the order is fixed: append the sample, trim to the length
//! budget, check reset zones, detect a loop, then (on a loop) evaluate
//! containment, apply progress and splice the line at the crossing.

use bevy::math::Vec2;

use super::config::CaptureConfig;
use super::containment::{evaluate_containment, EntityRegistry};
use super::detector::{detect_loop, CapturePolygon, Loop};
use super::error::ConfigError;
use super::geometry::distance_to_segment;
use super::hooks::{CaptureHooks, ResetReason};
use super::polyline::Polyline;
use super::progress::CaptureProgress;

/// Pointer state for one frame, already in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub is_down: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl PointerSample {
    pub fn pressed(position: Vec2) -> Self {
        Self {
            position,
            is_down: true,
            just_pressed: true,
            just_released: false,
        }
    }

    pub fn held(position: Vec2) -> Self {
        Self {
            position,
            is_down: true,
            just_pressed: false,
            just_released: false,
        }
    }

    pub fn released(position: Vec2) -> Self {
        Self {
            position,
            is_down: false,
            just_pressed: false,
            just_released: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Drawing,
    /// Transient, only while a detected loop is being resolved
    LoopProcessing,
}

/// Owns the stroke and hit counts for one player.
#[derive(Debug)]
pub struct DrawingSession {
    state: SessionState,
    line: Polyline,
    progress: CaptureProgress,
    loops_this_stroke: u32,
}

impl DrawingSession {
    pub fn new(config: &CaptureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: SessionState::Idle,
            line: Polyline::new(config.sample_interval, config.max_line_length),
            progress: CaptureProgress::new(config),
            loops_this_stroke: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state != SessionState::Idle
    }

    pub fn line(&self) -> &Polyline {
        &self.line
    }

    pub fn progress(&self) -> &CaptureProgress {
        &self.progress
    }

    /// Loops closed since the current stroke started.
    pub fn loops_this_stroke(&self) -> u32 {
        self.loops_this_stroke
    }

    /// Advance one frame. Returns the loop resolved this frame, if any.
    ///
    /// `SessionState::LoopProcessing` is entered and left inside this call,
    /// so [`DrawingSession::state`] never reports it between ticks.
    pub fn tick(
        &mut self,
        sample: PointerSample,
        registry: &impl EntityRegistry,
        hooks: &mut impl CaptureHooks,
    ) -> Option<Loop> {
        match self.state {
            SessionState::Idle => {
                if sample.just_pressed {
                    self.begin(sample.position);
                }
                None
            }
            SessionState::Drawing | SessionState::LoopProcessing => {
                if sample.just_released || !sample.is_down {
                    self.end(ResetReason::Released, hooks);
                    return None;
                }
                self.extend(sample.position, registry, hooks)
            }
        }
    }

    /// Abort the stroke from outside the frame step (pause, cutscene).
    pub fn force_stop(&mut self, hooks: &mut impl CaptureHooks) {
        if self.state != SessionState::Idle {
            self.end(ResetReason::ForcedStop, hooks);
        }
    }

    fn begin(&mut self, position: Vec2) {
        self.line.clear();
        self.progress.reset();
        self.loops_this_stroke = 0;
        self.line.append(position);
        self.state = SessionState::Drawing;
    }

    fn end(&mut self, reason: ResetReason, hooks: &mut impl CaptureHooks) {
        let shrunk = self.progress.reset();
        if !shrunk.is_empty() {
            hooks.progress_restored(&shrunk);
        }
        self.line.clear();
        self.loops_this_stroke = 0;
        self.state = SessionState::Idle;
        hooks.stroke_reset(reason);
    }

    fn extend(
        &mut self,
        position: Vec2,
        registry: &impl EntityRegistry,
        hooks: &mut impl CaptureHooks,
    ) -> Option<Loop> {
        if !self.line.append(position) {
            return None;
        }
        self.line.trim_to_max_length();

        if self.touches_reset_area(registry) {
            self.end(ResetReason::TouchedResetZone, hooks);
            return None;
        }

        let hit = detect_loop(self.line.points())?;
        self.state = SessionState::LoopProcessing;
        self.resolve_loop(&hit, registry, hooks);
        self.state = SessionState::Drawing;
        Some(hit)
    }

    fn touches_reset_area(&self, registry: &impl EntityRegistry) -> bool {
        let Some((a, b)) = self.line.last_segment() else {
            return false;
        };
        registry
            .reset_areas()
            .iter()
            .any(|area| distance_to_segment(area.center, a, b) <= area.radius)
    }

    fn resolve_loop(
        &mut self,
        hit: &Loop,
        registry: &impl EntityRegistry,
        hooks: &mut impl CaptureHooks,
    ) {
        let Some(polygon) = CapturePolygon::from_loop(self.line.points(), hit) else {
            return;
        };
        self.loops_this_stroke += 1;
        hooks.loop_detected(&polygon);

        let containment = evaluate_containment(&polygon, registry);
        for entity in &containment.inside {
            hooks.entity_contained(entity.id, entity.category);
        }
        self.progress.apply(&containment, hooks);

        self.line.splice_at_loop(hit.segment_index, hit.intersection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::containment::tests::ListRegistry;
    use crate::capture::containment::ResetArea;
    use crate::capture::progress::tests::RecordingHooks;

    fn session() -> DrawingSession {
        DrawingSession::new(&CaptureConfig::default()).unwrap()
    }

    /// Drag the pointer through `points`, pressing on the first one.
    fn drag(
        session: &mut DrawingSession,
        points: &[Vec2],
        registry: &ListRegistry,
        hooks: &mut RecordingHooks,
    ) -> Vec<Loop> {
        let mut loops = Vec::new();
        for (i, point) in points.iter().enumerate() {
            let sample = if i == 0 && !session.is_drawing() {
                PointerSample::pressed(*point)
            } else {
                PointerSample::held(*point)
            };
            loops.extend(session.tick(sample, registry, hooks));
        }
        loops
    }

    /// A closed lap around `center` that crosses its own start.
    fn lap(center: Vec2) -> Vec<Vec2> {
        vec![
            center + Vec2::new(-0.7, -0.5),
            center + Vec2::new(0.5, -0.5),
            center + Vec2::new(0.5, 0.5),
            center + Vec2::new(-0.5, 0.5),
            center + Vec2::new(-0.5, -0.8),
        ]
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CaptureConfig {
            ghost_threshold: 0,
            ..Default::default()
        };
        assert!(DrawingSession::new(&config).is_err());
    }

    #[test]
    fn straight_stroke_never_loops() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        registry.add_ghost(1, Vec2::new(1.0, 1.0), 3);
        let mut hooks = RecordingHooks::default();

        let points: Vec<Vec2> = (0..40).map(|i| Vec2::new(i as f32 * 0.15, 0.0)).collect();
        let loops = drag(&mut session, &points, &registry, &mut hooks);

        assert!(loops.is_empty());
        assert_eq!(hooks.loops, 0);
        assert!(session.progress().counts().is_empty());
        assert!(session.line().length() <= 5.0 + 1e-4);
    }

    #[test]
    fn three_laps_capture_ghost_once() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        let ghost = registry.add_ghost(1, Vec2::ZERO, 3);
        let mut hooks = RecordingHooks::default();

        let loops = drag(&mut session, &lap(Vec2::ZERO), &registry, &mut hooks);
        assert_eq!(loops.len(), 1);
        assert_eq!(session.progress().hits(ghost), Some(1));
        assert!((hooks.progress[0].scale - 0.8667).abs() < 1e-3);
        assert_eq!(session.state(), SessionState::Drawing);

        session.tick(PointerSample::released(Vec2::ZERO), &registry, &mut hooks);
        assert_eq!(hooks.restored, vec![ghost]);

        // Counts reset with the stroke, so three laps in one stroke are needed
        for _ in 0..3 {
            drag(&mut session, &lap(Vec2::ZERO), &registry, &mut hooks);
        }
        assert_eq!(hooks.captured, vec![ghost]);
        assert!(session.progress().is_captured(ghost));

        drag(&mut session, &lap(Vec2::ZERO), &registry, &mut hooks);
        assert_eq!(hooks.captured.len(), 1);
    }

    #[test]
    fn chained_loops_in_one_stroke() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        let left = registry.add_ghost(1, Vec2::new(0.0, 0.0), 5);
        let right = registry.add_ghost(2, Vec2::new(3.0, 0.0), 5);
        let mut hooks = RecordingHooks::default();

        let mut path = lap(Vec2::new(0.0, 0.0));
        path.extend(lap(Vec2::new(3.0, 0.0)));
        let loops = drag(&mut session, &path, &registry, &mut hooks);

        assert_eq!(loops.len(), 2);
        assert_eq!(hooks.loops, 2);
        assert_eq!(hooks.contained, vec![left, right]);
        assert_eq!(session.loops_this_stroke(), 2);
    }

    #[test]
    fn graves_batched_after_five_loops() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        let graves: Vec<_> = (0..6)
            .map(|i| {
                let offset = Vec2::new(-0.3 + 0.12 * i as f32, 0.1);
                registry.add(10 + i, crate::capture::EntityCategory::Grave, offset)
            })
            .collect();
        let mut hooks = RecordingHooks::default();

        for _ in 0..5 {
            drag(&mut session, &lap(Vec2::ZERO), &registry, &mut hooks);
        }
        assert_eq!(hooks.grave_batches.len(), 1);
        assert_eq!(hooks.grave_batches[0], graves);
    }

    #[test]
    fn release_before_loop_fires_nothing() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        registry.add_ghost(1, Vec2::ZERO, 3);
        let mut hooks = RecordingHooks::default();

        let partial = &lap(Vec2::ZERO)[..3];
        drag(&mut session, partial, &registry, &mut hooks);
        assert_eq!(session.line().len(), 3);

        session.tick(PointerSample::released(Vec2::ZERO), &registry, &mut hooks);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.line().is_empty());
        assert!(session.progress().counts().is_empty());
        assert_eq!(hooks.loops, 0);
        assert!(hooks.progress.is_empty());
        assert!(hooks.restored.is_empty());
        assert_eq!(hooks.resets, vec![ResetReason::Released]);
    }

    #[test]
    fn touching_reset_zone_aborts_stroke() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        registry.resets.push(ResetArea {
            center: Vec2::new(1.0, 0.5),
            radius: 0.2,
        });
        let mut hooks = RecordingHooks::default();

        drag(
            &mut session,
            &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
            &registry,
            &mut hooks,
        );
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.line().is_empty());
        assert_eq!(hooks.resets, vec![ResetReason::TouchedResetZone]);
    }

    #[test]
    fn force_stop_from_any_state() {
        let mut session = session();
        let registry = ListRegistry::default();
        let mut hooks = RecordingHooks::default();

        session.force_stop(&mut hooks);
        assert!(hooks.resets.is_empty());

        drag(&mut session, &[Vec2::ZERO, Vec2::new(1.0, 0.0)], &registry, &mut hooks);
        session.force_stop(&mut hooks);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.line().is_empty());
        assert_eq!(hooks.resets, vec![ResetReason::ForcedStop]);

        // Holding after the stop does not resume; a new press does
        session.tick(PointerSample::held(Vec2::new(2.0, 0.0)), &registry, &mut hooks);
        assert_eq!(session.state(), SessionState::Idle);
        session.tick(PointerSample::pressed(Vec2::new(2.0, 0.0)), &registry, &mut hooks);
        assert_eq!(session.state(), SessionState::Drawing);
        assert_eq!(session.line().len(), 1);
    }

    #[test]
    fn reset_zone_abort_restores_shrunk_ghost() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        let ghost = registry.add_ghost(1, Vec2::ZERO, 3);
        registry.resets.push(ResetArea {
            center: Vec2::new(-0.5, -1.5),
            radius: 0.2,
        });
        let mut hooks = RecordingHooks::default();

        let loops = drag(&mut session, &lap(Vec2::ZERO), &registry, &mut hooks);
        assert_eq!(loops.len(), 1);
        assert_eq!(session.progress().hits(ghost), Some(1));

        session.tick(PointerSample::held(Vec2::new(-0.5, -1.6)), &registry, &mut hooks);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(hooks.restored, vec![ghost]);
        assert!(session.progress().counts().is_empty());
        assert_eq!(hooks.resets, vec![ResetReason::TouchedResetZone]);
    }

    #[test]
    fn force_stop_restores_shrunk_ghost() {
        let mut session = session();
        let mut registry = ListRegistry::default();
        let ghost = registry.add_ghost(1, Vec2::ZERO, 3);
        let mut hooks = RecordingHooks::default();

        drag(&mut session, &lap(Vec2::ZERO), &registry, &mut hooks);
        assert_eq!(session.progress().hits(ghost), Some(1));

        session.force_stop(&mut hooks);
        assert_eq!(hooks.restored, vec![ghost]);
        assert!(session.progress().counts().is_empty());
        assert_eq!(hooks.resets, vec![ResetReason::ForcedStop]);
        assert!(!session.progress().is_captured(ghost));
    }
}
