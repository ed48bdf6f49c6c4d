//! Projectile lifecycle: fire intent -> dynamic body -> off-screen prune.
//!
//! A projectile entity IS the handle to its rapier body: despawning the
//! entity destroys the body in the same tick. Nothing here integrates
//! motion — the impulse is applied once and rapier owns the rest.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::arena::WorldBounds;
use crate::cannon::{apply_cannon_input, Cannon};
use crate::config::GameConfig;
use crate::logger;

#[derive(Component, Debug, Default)]
pub struct Projectile;

/// One event = one shot. Edge detection (no autofire while the key is
/// held) is the event producer's job.
#[derive(Event, Debug, Clone, Copy)]
pub struct FireIntent {
    pub cannon: Entity,
}

pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        // Fire after the barrel pose is updated for this tick, so a shot
        // arriving together with a rotation uses the fresh angle.
        app.add_event::<FireIntent>().add_systems(
            FixedUpdate,
            (fire_projectiles, despawn_offscreen)
                .chain()
                .after(apply_cannon_input)
                .before(PhysicsSet::SyncBackend),
        );
    }
}

/// Spawn a dynamic ball at the muzzle for every pending intent and kick
/// it along the barrel direction.
pub fn fire_projectiles(
    mut commands: Commands,
    mut intents: EventReader<FireIntent>,
    cannons: Query<(&Cannon, &Transform)>,
    config: Res<GameConfig>,
) {
    for intent in intents.read() {
        let Ok((cannon, transform)) = cannons.get(intent.cannon) else {
            logger::log_warning(&format!(
                "FireIntent for {:?} ignored: no such cannon",
                intent.cannon
            ));
            continue;
        };

        let muzzle = cannon.muzzle_point(transform);
        let direction = cannon.direction();

        commands.spawn((
            Projectile,
            Transform::from_translation(muzzle.extend(0.0)),
            RigidBody::Dynamic,
            Collider::ball(config.projectile.radius),
            ColliderMassProperties::Density(config.projectile.density),
            Friction::coefficient(config.projectile.friction),
            Restitution::coefficient(config.projectile.restitution),
            Velocity::zero(),
            ExternalImpulse {
                impulse: direction * config.projectile.impulse,
                torque_impulse: 0.0,
            },
            ActiveEvents::COLLISION_EVENTS,
        ));

        logger::log(&format!(
            "Fired projectile from ({:.1}, {:.1}) at angle {:.2}",
            muzzle.x, muzzle.y, cannon.angle
        ));
    }
}

/// Linear scan over live projectiles; anything outside the play field is
/// destroyed this tick. Invariant: an out-of-bounds projectile never
/// survives a full tick.
pub fn despawn_offscreen(
    mut commands: Commands,
    bounds: Res<WorldBounds>,
    projectiles: Query<(Entity, &Transform), With<Projectile>>,
) {
    for (entity, transform) in projectiles.iter() {
        let position = transform.translation.truncate();
        if !bounds.contains(position) {
            commands.entity(entity).despawn();
            logger::log(&format!(
                "Projectile {:?} left the field at ({:.1}, {:.1})",
                entity, position.x, position.y
            ));
        }
    }
}
