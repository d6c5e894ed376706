//! Entity spawning functions for arena construction.

use bevy::prelude::*;
use rand::Rng;
use std::num::NonZeroU32;

use super::data::{ArenaDefinition, DragonDef, ResetZoneDef};
use crate::core::SmoothScale;
use crate::entities::{
    random_heading, Chest, Dragon, Essence, Ghost, Grave, Health, ResetZone, Roam, Shrinkable,
};

/// Marker for everything spawned as part of the arena.
#[derive(Component)]
pub struct ArenaEntity;

/// Marker for the camera used to project the cursor into the world.
#[derive(Component)]
pub struct MainCamera;

const GHOST_COLOR: Color = Color::srgba(0.8, 0.9, 1.0, 0.85);
const GRAVE_COLOR: Color = Color::srgb(0.4, 0.4, 0.45);
const DRAGON_COLOR: Color = Color::srgb(0.7, 0.15, 0.1);
const CHEST_COLOR: Color = Color::srgb(0.85, 0.65, 0.2);
const RESET_COLOR: Color = Color::srgba(0.9, 0.1, 0.3, 0.5);
const ESSENCE_COLOR: Color = Color::srgb(0.5, 1.0, 0.8);

/// World units per screen pixel for the 2D camera.
const CAMERA_SCALE: f32 = 1.0 / 64.0;

/// Spawn the 2D camera.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        },
        MainCamera,
    ));
}

fn square_sprite(color: Color, size: f32) -> Sprite {
    Sprite::from_color(color, Vec2::splat(size))
}

/// Spawn a ghost that wanders and can be captured.
pub fn spawn_ghost(commands: &mut Commands, position: Vec2, threshold: NonZeroU32) -> Entity {
    let mut rng = rand::thread_rng();
    commands
        .spawn((
            Ghost { threshold },
            square_sprite(GHOST_COLOR, 0.4),
            Transform::from_translation(position.extend(1.0)),
            Shrinkable {
                base_scale: Vec3::ONE,
            },
            SmoothScale::default(),
            Roam {
                heading: random_heading(&mut rng),
                ..default()
            },
            ArenaEntity,
        ))
        .id()
}

/// Spawn a grave.
pub fn spawn_grave(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Grave,
        square_sprite(GRAVE_COLOR, 0.35),
        Transform::from_translation(position.extend(0.5)),
        ArenaEntity,
    ));
}

/// Spawn the dragon boss.
pub fn spawn_dragon(commands: &mut Commands, dragon: &DragonDef) {
    let (x, y) = dragon.position;
    commands.spawn((
        Dragon,
        Health::new(dragon.health),
        square_sprite(DRAGON_COLOR, 0.9),
        Transform::from_xyz(x, y, 0.5),
        ArenaEntity,
    ));
}

/// Spawn a closed chest.
pub fn spawn_chest(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Chest,
        square_sprite(CHEST_COLOR, 0.3),
        Transform::from_translation(position.extend(0.5)),
        ArenaEntity,
    ));
}

/// Spawn a reset zone.
pub fn spawn_reset_zone(commands: &mut Commands, zone: &ResetZoneDef) {
    let (x, y) = zone.position;
    commands.spawn((
        ResetZone {
            radius: zone.radius,
        },
        square_sprite(RESET_COLOR, zone.radius * 2.0),
        Transform::from_xyz(x, y, 0.2),
        ArenaEntity,
    ));
}

/// Spawn the essence left behind by a captured ghost.
pub fn spawn_essence(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Essence::default(),
        square_sprite(ESSENCE_COLOR, 0.2),
        Transform::from_translation(position.extend(0.8)),
        ArenaEntity,
    ));
}

/// Random point inside the arena, away from the walls.
fn random_position(rng: &mut impl Rng, half_extents: Vec2) -> Vec2 {
    let margin = half_extents * 0.9;
    Vec2::new(
        rng.gen_range(-margin.x..=margin.x),
        rng.gen_range(-margin.y..=margin.y),
    )
}

/// Spawn every entity the arena definition lists.
pub fn spawn_arena_entities(commands: &mut Commands, arena: &ArenaDefinition) {
    let mut rng = rand::thread_rng();
    let half_extents = Vec2::new(arena.half_extents.0, arena.half_extents.1);
    let (min_threshold, max_threshold) = arena.ghost_threshold;

    for _ in 0..arena.ghost_count {
        let threshold = rng.gen_range(min_threshold..=max_threshold);
        let Some(threshold) = NonZeroU32::new(threshold) else {
            continue;
        };
        spawn_ghost(commands, random_position(&mut rng, half_extents), threshold);
    }

    for &(x, y) in &arena.graves {
        spawn_grave(commands, Vec2::new(x, y));
    }

    if let Some(dragon) = &arena.dragon {
        spawn_dragon(commands, dragon);
    }

    for &(x, y) in &arena.chests {
        spawn_chest(commands, Vec2::new(x, y));
    }

    for zone in &arena.reset_zones {
        spawn_reset_zone(commands, zone);
    }
}
