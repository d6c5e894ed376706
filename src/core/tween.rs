//! Scale tweening used for shrink feedback.

use bevy::prelude::*;

/// Component for smooth scale interpolation.
#[derive(Component)]
pub struct SmoothScale {
    /// Target scale (None = don't animate)
    pub target: Option<Vec3>,
    /// Interpolation speed multiplier (higher = faster)
    pub speed: f32,
}

impl Default for SmoothScale {
    fn default() -> Self {
        Self {
            target: None,
            speed: 10.0,
        }
    }
}

/// System that interpolates scales toward their targets.
pub fn update_smooth_scales(time: Res<Time>, mut query: Query<(&mut Transform, &SmoothScale)>) {
    let dt = time.delta_secs();

    for (mut transform, smooth) in query.iter_mut() {
        if let Some(target) = smooth.target {
            let t = (smooth.speed * dt).min(1.0);
            transform.scale = transform.scale.lerp(target, t);
        }
    }
}
