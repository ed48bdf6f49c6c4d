//! Windowed client: the simulation plus a camera, keyboard/mouse
//! harvesting and shape visuals.

use bevy::prelude::*;
use bevy_rapier2d::render::RapierDebugRenderPlugin;
use cannonade_simulation::{logger, GameConfig, SimulationPlugin};

mod camera;
mod input;
mod rendering;

use camera::CameraPlugin;
use input::InputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    logger::init_logger();
    let config = GameConfig::load_or_default("cannonade.json");

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: (config.window.width, config.window.height).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic + rapier)
        .add_plugins(SimulationPlugin { config })
        // Collider wireframe overlay on top of the shape visuals
        .add_plugins(RapierDebugRenderPlugin::default())
        // Rendering sync (simulation -> visuals)
        .add_plugins(RenderingSyncPlugin)
        // Fixed world-unit viewport
        .add_plugins(CameraPlugin)
        // Keyboard/mouse -> simulation inputs
        .add_plugins(InputPlugin)
        .run();
}
