//! Fixed-viewport 2D camera.
//!
//! The window always shows the same world-unit rectangle (100x100 by
//! default) centered on the play field, whatever the window resolution;
//! non-square windows stretch rather than reveal extra world.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use cannonade_simulation::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    let view = config.world.view_size_vec();
    let center = view * 0.5;

    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: view.x,
                height: view.y,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(center.extend(0.0)),
    ));
}
