//! Keyboard/mouse harvesting.
//!
//! The client never mutates simulation state directly: keys become
//! `CannonInput` values and intents, the simulation consumes them on
//! its own fixed tick.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use cannonade_simulation::{Cannon, CannonInput, FireIntent, SpawnObstacleIntent};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (read_rotation_keys, read_fire_key, read_obstacle_clicks),
        );
    }
}

/// ArrowUp raises the barrel, ArrowDown lowers it. Both held cancel out.
fn read_rotation_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut inputs: Query<&mut CannonInput>,
) {
    let mut rotation = 0.0;
    if keys.pressed(KeyCode::ArrowUp) {
        rotation += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        rotation -= 1.0;
    }

    for mut input in inputs.iter_mut() {
        input.rotation = rotation;
    }
}

/// One shot per Space press; holding the key does not autofire.
fn read_fire_key(
    keys: Res<ButtonInput<KeyCode>>,
    cannons: Query<Entity, With<Cannon>>,
    mut intents: EventWriter<FireIntent>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    for cannon in cannons.iter() {
        intents.write(FireIntent { cannon });
    }
}

/// Left click drops a static triangle at the cursor's world position.
fn read_obstacle_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut intents: EventWriter<SpawnObstacleIntent>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return; // Cursor outside the window
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(position) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    intents.write(SpawnObstacleIntent { position });
}
