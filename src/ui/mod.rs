//! UI module - HUD and pause overlay.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
