//! Systems that turn capture events into changes in the world.

use bevy::prelude::*;
use std::num::NonZeroU32;

use super::components::*;
use crate::capture::{CaptureConfig, EntityCategory};
use crate::core::{
    ChestOpened, DragonHit, EntityCaptured, EntityContained, EntityProgress, GravesCaptured,
    ProgressRestored, SmoothScale,
};
use crate::world::{spawn_essence, spawn_ghost};

const OPENED_CHEST_COLOR: Color = Color::srgb(0.45, 0.35, 0.15);

/// Highlight everything caught inside a loop.
pub fn flash_contained(
    mut commands: Commands,
    mut events: EventReader<EntityContained>,
    mut query: Query<(&mut Sprite, Option<&mut Flash>)>,
) {
    for event in events.read() {
        let Ok((mut sprite, flash)) = query.get_mut(event.entity) else {
            continue;
        };
        match flash {
            Some(mut flash) => flash.timer.reset(),
            None => {
                commands.entity(event.entity).insert(Flash::new(sprite.color));
                sprite.color = Color::WHITE;
            }
        }
    }
}

/// Restore sprite colors once the flash runs out.
pub fn update_flashes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Sprite, &mut Flash)>,
) {
    for (entity, mut sprite, mut flash) in query.iter_mut() {
        flash.timer.tick(time.delta());
        if flash.timer.finished() {
            sprite.color = flash.original;
            commands.entity(entity).remove::<Flash>();
        }
    }
}

/// Open chests and recolor them.
pub fn open_chests(
    mut commands: Commands,
    mut events: EventReader<ChestOpened>,
    mut query: Query<(&mut Sprite, Option<&mut Flash>), With<Chest>>,
    mut tally: ResMut<CaptureTally>,
) {
    for event in events.read() {
        let Ok((mut sprite, flash)) = query.get_mut(event.entity) else {
            continue;
        };
        // A running flash would otherwise restore the closed color
        match flash {
            Some(mut flash) => flash.original = OPENED_CHEST_COLOR,
            None => sprite.color = OPENED_CHEST_COLOR,
        }
        commands.entity(event.entity).insert(Opened);
        tally.chests += 1;
        info!("Chest opened");
    }
}

/// Shrink ghosts toward their capture size.
pub fn apply_progress_scale(
    mut events: EventReader<EntityProgress>,
    mut query: Query<(&Shrinkable, &mut SmoothScale)>,
) {
    for event in events.read() {
        let Ok((shrinkable, mut smooth)) = query.get_mut(event.entity) else {
            continue;
        };
        smooth.target = Some(shrinkable.base_scale * event.scale);
    }
}

/// Return shrunk ghosts to full size when the stroke ends.
pub fn restore_scale(
    mut events: EventReader<ProgressRestored>,
    mut query: Query<(&Shrinkable, &mut SmoothScale)>,
) {
    for event in events.read() {
        for entity in &event.entities {
            if let Ok((shrinkable, mut smooth)) = query.get_mut(*entity) {
                smooth.target = Some(shrinkable.base_scale);
            }
        }
    }
}

/// Remove captured ghosts and leave their essence behind.
pub fn capture_ghosts(
    mut commands: Commands,
    mut events: EventReader<EntityCaptured>,
    mut tally: ResMut<CaptureTally>,
) {
    for event in events.read() {
        if event.category != EntityCategory::Ghost {
            continue;
        }
        if let Some(mut entity) = commands.get_entity(event.entity) {
            entity.despawn_recursive();
        }
        spawn_essence(&mut commands, event.position);
        tally.ghosts += 1;
        info!("Ghost captured at {:?} ({} total)", event.position, tally.ghosts);
    }
}

/// Captured graves release a new ghost where they stood.
pub fn replace_graves(
    mut commands: Commands,
    mut events: EventReader<GravesCaptured>,
    graves: Query<&Transform, With<Grave>>,
    config: Res<CaptureConfig>,
    mut tally: ResMut<CaptureTally>,
) {
    let threshold = NonZeroU32::new(config.ghost_threshold).unwrap_or(NonZeroU32::MIN);

    for event in events.read() {
        let mut replaced = 0;
        for grave in &event.graves {
            // Destroyed since the loop was resolved
            let Ok(transform) = graves.get(*grave) else {
                continue;
            };
            let position = transform.translation.truncate();
            commands.entity(*grave).despawn_recursive();
            spawn_ghost(&mut commands, position, threshold);
            replaced += 1;
        }
        tally.graves += replaced;
        info!("{} graves captured, ghosts released", replaced);
    }
}

/// Each loop around the dragon costs it health.
pub fn damage_dragon(
    mut commands: Commands,
    mut events: EventReader<DragonHit>,
    mut query: Query<&mut Health, With<Dragon>>,
    mut tally: ResMut<CaptureTally>,
) {
    for event in events.read() {
        let Ok(mut health) = query.get_mut(event.entity) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        health.take_damage(event.damage as f32);
        debug!("Dragon hit, {} health left", health.current);

        if health.is_dead() {
            commands.entity(event.entity).despawn_recursive();
            tally.dragons += 1;
            info!("Dragon defeated!");
        }
    }
}

/// Fade and remove essence pickups.
pub fn fade_essence(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Essence, &mut Sprite)>,
) {
    for (entity, mut essence, mut sprite) in query.iter_mut() {
        essence.lifetime.tick(time.delta());
        sprite.color.set_alpha(1.0 - essence.lifetime.fraction());
        if essence.lifetime.finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}
