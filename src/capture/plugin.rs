//! Capture plugin - pointer sampling and the drawing session resource.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::bridge::{CaptureEventWriters, CaptureTargets};
use super::config::{load_capture_config, CaptureConfig};
use super::session::{DrawingSession, PointerSample};
use crate::core::{ForceStopDrawing, GameState, LoopDetected, PauseState, StrokeReset};
use crate::world::MainCamera;

/// The player's drawing session.
#[derive(Resource)]
pub struct CaptureSession(pub DrawingSession);

/// System set ordering for capture.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaptureSet {
    /// Pointer sampling and the session tick
    Sample,
    /// Systems reacting to capture events
    React,
    /// Gizmos and logging
    Present,
}

/// Capture plugin - handles the lasso line and capture outcomes.
pub struct CapturePlugin;

impl Plugin for CapturePlugin {
    fn build(&self, app: &mut App) {
        configure_capture_sets(app);
        app.add_systems(Startup, (load_capture_config, init_capture_session).chain())
            .add_systems(
                Update,
                (handle_force_stop, drive_capture_session)
                    .chain()
                    .in_set(CaptureSet::Sample)
                    .run_if(resource_exists::<CaptureSession>),
            )
            .add_systems(
                Update,
                (draw_stroke.run_if(resource_exists::<CaptureSession>), log_capture_events)
                    .in_set(CaptureSet::Present),
            )
            .add_systems(
                OnEnter(PauseState::Paused),
                stop_drawing_on_pause.run_if(resource_exists::<CaptureSession>),
            );
    }
}

/// Order the capture sets and freeze them outside of running gameplay.
pub(crate) fn configure_capture_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (CaptureSet::Sample, CaptureSet::React, CaptureSet::Present)
            .chain()
            .run_if(in_state(GameState::InGame))
            .run_if(in_state(PauseState::Running)),
    );
}

/// Build the session from the loaded config.
fn init_capture_session(mut commands: Commands, config: Res<CaptureConfig>) {
    match DrawingSession::new(&config) {
        Ok(session) => commands.insert_resource(CaptureSession(session)),
        Err(e) => error!("Capture disabled: {}", e),
    }
}

/// Project the cursor into world space through the main camera.
fn cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Vec2> {
    let window = windows.get_single().ok()?;
    let (camera, camera_transform) = cameras.get_single().ok()?;
    let cursor = window.cursor_position()?;
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}

/// Feed this frame's pointer state into the drawing session.
fn drive_capture_session(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut session: ResMut<CaptureSession>,
    targets: CaptureTargets,
    mut hooks: CaptureEventWriters,
) {
    // Off-window cursor: hold the last point so a release still ends the stroke
    let Some(position) =
        cursor_world_position(&windows, &cameras).or_else(|| session.0.line().last())
    else {
        return;
    };

    let sample = PointerSample {
        position,
        is_down: mouse.pressed(MouseButton::Left),
        just_pressed: mouse.just_pressed(MouseButton::Left),
        just_released: mouse.just_released(MouseButton::Left),
    };

    if let Some(hit) = session.0.tick(sample, &targets, &mut hooks) {
        debug!(
            "Loop closed on segment {} at {:?} ({} this stroke)",
            hit.segment_index,
            hit.intersection,
            session.0.loops_this_stroke()
        );
    }
}

/// Apply forced stops requested by other systems.
fn handle_force_stop(
    mut events: EventReader<ForceStopDrawing>,
    mut session: ResMut<CaptureSession>,
    mut hooks: CaptureEventWriters,
) {
    if events.read().count() > 0 {
        session.0.force_stop(&mut hooks);
    }
}

/// Pausing drops the current stroke.
fn stop_drawing_on_pause(mut session: ResMut<CaptureSession>, mut hooks: CaptureEventWriters) {
    session.0.force_stop(&mut hooks);
}

/// Draw the live stroke.
fn draw_stroke(session: Res<CaptureSession>, mut gizmos: Gizmos) {
    let points = session.0.line().points();
    if points.len() < 2 {
        return;
    }
    gizmos.linestrip_2d(points.iter().copied(), Color::srgb(0.6, 0.9, 1.0));
}

fn log_capture_events(
    mut loops: EventReader<LoopDetected>,
    mut resets: EventReader<StrokeReset>,
) {
    for event in loops.read() {
        debug!("Loop polygon with {} vertices", event.vertices.len());
    }
    for event in resets.read() {
        debug!("Stroke reset: {:?}", event.reason);
    }
}
