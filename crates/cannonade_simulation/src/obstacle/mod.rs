//! Static triangular obstacles dropped at the cursor.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;
use crate::logger;

#[derive(Component, Debug)]
pub struct Obstacle;

/// Request to place an obstacle at a world position. Produced by the
/// client from a mouse click; obstacles are never pruned.
#[derive(Event, Debug, Clone, Copy)]
pub struct SpawnObstacleIntent {
    pub position: Vec2,
}

/// Apex-up isosceles triangle around the local origin.
pub fn triangle_vertices(half_size: f32) -> [Vec2; 3] {
    [
        Vec2::new(0.0, half_size),
        Vec2::new(-half_size, -half_size),
        Vec2::new(half_size, -half_size),
    ]
}

pub struct ObstaclePlugin;

impl Plugin for ObstaclePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnObstacleIntent>().add_systems(
            FixedUpdate,
            spawn_obstacles.before(PhysicsSet::SyncBackend),
        );
    }
}

pub fn spawn_obstacles(
    mut commands: Commands,
    mut intents: EventReader<SpawnObstacleIntent>,
    config: Res<GameConfig>,
) {
    for intent in intents.read() {
        let [a, b, c] = triangle_vertices(config.obstacle.half_size);
        commands.spawn((
            Obstacle,
            Transform::from_translation(intent.position.extend(0.0)),
            RigidBody::Fixed,
            Collider::triangle(a, b, c),
        ));

        logger::log(&format!(
            "Obstacle placed at ({:.1}, {:.1})",
            intent.position.x, intent.position.y
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_apex_up_and_symmetric() {
        let [a, b, c] = triangle_vertices(5.0);
        assert_eq!(a, Vec2::new(0.0, 5.0));
        assert_eq!(b.y, c.y);
        assert_eq!(b.x, -c.x);
        assert!(a.y > b.y);
    }

    #[test]
    fn triangle_scales_with_half_size() {
        let [a, _, c] = triangle_vertices(2.5);
        assert_eq!(a.y, 2.5);
        assert_eq!(c, Vec2::new(2.5, -2.5));
    }
}
