//! Capture module - the lasso line, loop detection, and capture progress.
//!
//! The geometry and bookkeeping (`geometry`, `polyline`, `detector`,
//! `containment`, `progress`, `session`) know nothing about the ECS; the
//! `bridge` and `plugin` files connect them to queries and events.

mod bridge;
mod config;
mod containment;
mod detector;
mod error;
mod geometry;
mod hooks;
mod plugin;
mod polyline;
mod progress;
mod session;

pub use bridge::{CaptureEventWriters, CaptureTargets};
pub use config::{load_capture_config, CaptureConfig, CAPTURE_CONFIG_PATH};
pub use containment::{evaluate_containment, Containment, EntityCategory, EntityRegistry, ResetArea, TrackedEntity};
pub use detector::{detect_loop, CapturePolygon, Loop};
pub use error::ConfigError;
pub use geometry::{distance_to_segment, point_in_polygon, segments_intersect};
pub use hooks::{CaptureHooks, ProgressUpdate, ResetReason};
pub use plugin::{CapturePlugin, CaptureSession, CaptureSet};
pub(crate) use plugin::configure_capture_sets;
pub use polyline::Polyline;
pub use progress::{CaptureProgress, InsideCount};
pub use session::{DrawingSession, PointerSample, SessionState};
