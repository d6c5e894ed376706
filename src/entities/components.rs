//! Components for everything the lasso can catch.

use bevy::prelude::*;
use std::num::NonZeroU32;

/// A roaming ghost. Shrinks with each loop and is captured at `threshold`.
#[derive(Component)]
pub struct Ghost {
    pub threshold: NonZeroU32,
}

/// Marker for graves. Enough loops turn them into fresh ghosts.
#[derive(Component)]
pub struct Grave;

/// Marker for the dragon boss.
#[derive(Component)]
pub struct Dragon;

/// Marker for treasure chests.
#[derive(Component)]
pub struct Chest;

/// Chest has been opened (prevents opening twice).
#[derive(Component)]
pub struct Opened;

/// Touching this area with the line drops the whole stroke.
#[derive(Component)]
pub struct ResetZone {
    pub radius: f32,
}

/// Remembers the spawn scale so shrink feedback can be undone.
#[derive(Component)]
pub struct Shrinkable {
    pub base_scale: Vec3,
}

/// Dropped where a ghost was captured; fades out over its lifetime.
#[derive(Component)]
pub struct Essence {
    pub lifetime: Timer,
}

impl Default for Essence {
    fn default() -> Self {
        Self {
            lifetime: Timer::from_seconds(1.5, TimerMode::Once),
        }
    }
}

/// Brief highlight after being caught inside a loop.
#[derive(Component)]
pub struct Flash {
    pub timer: Timer,
    /// Sprite color to restore afterwards
    pub original: Color,
}

impl Flash {
    pub fn new(original: Color) -> Self {
        Self {
            timer: Timer::from_seconds(0.15, TimerMode::Once),
            original,
        }
    }
}

/// Random wandering inside the arena.
#[derive(Component)]
pub struct Roam {
    pub heading: Vec2,
    pub speed: f32,
    /// When this finishes a new heading is picked
    pub retarget: Timer,
}

impl Default for Roam {
    fn default() -> Self {
        Self {
            heading: Vec2::X,
            speed: 0.8,
            retarget: Timer::from_seconds(2.0, TimerMode::Repeating),
        }
    }
}

/// Component for entities that can take damage.
#[derive(Component)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.maximum
    }
}

/// Running totals shown on the HUD.
#[derive(Resource, Default, Debug)]
pub struct CaptureTally {
    pub ghosts: u32,
    pub graves: u32,
    pub chests: u32,
    pub dragons: u32,
}
