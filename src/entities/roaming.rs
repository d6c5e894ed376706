//! Ghost wandering.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use super::components::Roam;
use crate::world::ArenaBounds;

/// Pick a random unit heading.
pub fn random_heading(rng: &mut impl Rng) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

/// Keep a position inside the arena, bouncing the heading off the walls.
pub fn bounce_inside(position: Vec2, heading: Vec2, half_extents: Vec2) -> (Vec2, Vec2) {
    let mut heading = heading;
    if position.x.abs() > half_extents.x {
        heading.x = -position.x.signum() * heading.x.abs();
    }
    if position.y.abs() > half_extents.y {
        heading.y = -position.y.signum() * heading.y.abs();
    }
    (position.clamp(-half_extents, half_extents), heading)
}

/// Move roaming entities and occasionally change direction.
pub fn roam(time: Res<Time>, bounds: Res<ArenaBounds>, mut query: Query<(&mut Transform, &mut Roam)>) {
    let mut rng = rand::thread_rng();

    for (mut transform, mut roam) in query.iter_mut() {
        roam.retarget.tick(time.delta());
        if roam.retarget.just_finished() {
            roam.heading = random_heading(&mut rng);
        }

        let moved = transform.translation.truncate() + roam.heading * roam.speed * time.delta_secs();
        let (position, heading) = bounce_inside(moved, roam.heading, bounds.half_extents);
        roam.heading = heading;
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_turns_heading_back_inside() {
        let (position, heading) =
            bounce_inside(Vec2::new(5.5, 0.0), Vec2::new(1.0, 0.0), Vec2::new(5.0, 3.0));
        assert_eq!(position, Vec2::new(5.0, 0.0));
        assert!(heading.x < 0.0);

        let (position, heading) =
            bounce_inside(Vec2::new(0.0, -4.0), Vec2::new(0.0, -1.0), Vec2::new(5.0, 3.0));
        assert_eq!(position, Vec2::new(0.0, -3.0));
        assert!(heading.y > 0.0);
    }

    #[test]
    fn inside_positions_are_untouched() {
        let heading = Vec2::new(0.6, 0.8);
        let (position, new_heading) = bounce_inside(Vec2::new(1.0, 1.0), heading, Vec2::new(5.0, 3.0));
        assert_eq!(position, Vec2::new(1.0, 1.0));
        assert_eq!(new_heading, heading);
    }

    #[test]
    fn random_heading_is_unit_length() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            assert!((random_heading(&mut rng).length() - 1.0).abs() < 1e-5);
        }
    }
}
