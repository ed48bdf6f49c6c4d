//! Cannonade simulation core
//!
//! ECS simulation on Bevy 0.16. A kinematic cannon on the left wall
//! fires dynamic projectiles into a walled arena; rigid-body dynamics
//! and collision detection are delegated wholesale to rapier
//! (bevy_rapier2d). This crate composes bodies, inputs and pruning —
//! nothing more.
//!
//! Runs headless under MinimalPlugins for tests and the scripted
//! binary; the windowed client lives in its own crate.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;

pub mod arena;
pub mod cannon;
pub mod config;
pub mod contacts;
pub mod logger;
pub mod obstacle;
pub mod projectile;

pub use arena::{ArenaPlugin, Ground, Wall, WorldBounds};
pub use cannon::{spawn_cannon, Cannon, CannonInput, CannonPlugin};
pub use config::GameConfig;
pub use obstacle::{Obstacle, ObstaclePlugin, SpawnObstacleIntent};
pub use projectile::{FireIntent, Projectile, ProjectilePlugin};

/// Main simulation plugin. Carries the config so headless apps, tests
/// and the client all build the same world from the same knobs.
pub struct SimulationPlugin {
    pub config: GameConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        logger::init_logger();

        app.insert_resource(Time::<Fixed>::from_hz(self.config.world.tick_hz))
            .insert_resource(WorldBounds::from(&self.config))
            .insert_resource(self.config.clone())
            // Rapier steps inside FixedUpdate, after our systems
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
            .add_plugins((ArenaPlugin, CannonPlugin, ProjectilePlugin, ObstaclePlugin))
            .add_systems(PostStartup, apply_gravity_config)
            .add_systems(Update, contacts::log_collision_events);
    }
}

/// Push the configured gravity into the rapier context. PostStartup so
/// the plugin has already created the context entity.
fn apply_gravity_config(
    config: Res<GameConfig>,
    mut contexts: Query<&mut RapierConfiguration>,
) {
    for mut rapier_config in contexts.iter_mut() {
        rapier_config.gravity = config.world.gravity_vec();
    }
}

/// Minimal Bevy App for headless runs. Time advances by exactly one
/// fixed tick per `app.update()`, so scripted runs and tests are
/// deterministic tick counts, not wall-clock dependent.
pub fn create_headless_app(config: GameConfig) -> App {
    let tick = Duration::from_secs_f64(1.0 / config.world.tick_hz);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::transform::TransformPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick))
        .add_plugins(SimulationPlugin { config });

    app
}
