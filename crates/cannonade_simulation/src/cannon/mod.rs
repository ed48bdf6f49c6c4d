//! Kinematic cannon mounted on the left wall.
//!
//! The barrel is a kinematic position-based rapier body: input drives
//! the elevation angle, the angle drives the transform, and rapier picks
//! the transform up at the next sync. Velocity-based dynamics never
//! touch this body.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;
use crate::logger;

/// Barrel state. The angle is the single source of truth; the transform
/// rotation is rewritten from it every tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cannon {
    /// Elevation in radians, 0 = pointing along +X. Unclamped: full
    /// revolutions are allowed.
    pub angle: f32,
    /// Distance from pivot to muzzle.
    pub half_length: f32,
}

impl Cannon {
    /// Unit vector along the barrel.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// World-space muzzle position, at the barrel tip. Projectiles spawn
    /// here; a ball can overlap the barrel end briefly and rapier resolves
    /// the initial penetration.
    pub fn muzzle_point(&self, transform: &Transform) -> Vec2 {
        transform.translation.truncate() + self.direction() * self.half_length
    }
}

/// Per-tick rotation input, written by the client (or a test script)
/// every frame: +1 raises the barrel, -1 lowers it, 0 holds.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CannonInput {
    pub rotation: f32,
}

pub struct CannonPlugin;

impl Plugin for CannonPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_cannon_at_config_pivot)
            .add_systems(
                FixedUpdate,
                apply_cannon_input.before(PhysicsSet::SyncBackend),
            );
    }
}

fn spawn_cannon_at_config_pivot(mut commands: Commands, config: Res<GameConfig>) {
    spawn_cannon(&mut commands, &config);
}

/// Spawn the cannon body with its full component set.
pub fn spawn_cannon(commands: &mut Commands, config: &GameConfig) -> Entity {
    let entity = commands
        .spawn((
            Transform::from_translation(config.cannon.pivot_vec().extend(0.0)),
            Cannon {
                angle: 0.0,
                half_length: config.cannon.half_length,
            },
            CannonInput::default(),
            RigidBody::KinematicPositionBased,
            Collider::cuboid(config.cannon.half_length, config.cannon.half_height),
        ))
        .id();

    logger::log_info(&format!(
        "Cannon spawned at {:?}",
        config.cannon.pivot_vec()
    ));
    entity
}

/// Advance the elevation angle from the current input and mirror it into
/// the transform. Runs before the rapier sync so the physics step sees
/// the fresh pose.
pub fn apply_cannon_input(
    mut cannons: Query<(&mut Cannon, &CannonInput, &mut Transform)>,
    config: Res<GameConfig>,
) {
    for (mut cannon, input, mut transform) in cannons.iter_mut() {
        if input.rotation != 0.0 {
            cannon.angle += config.cannon.rotation_step * input.rotation.signum();
        }
        transform.rotation = Quat::from_rotation_z(cannon.angle);
    }
}
