//! Static arena bodies: ground and side walls.
//!
//! All of them are fixed rapier bodies spawned once at startup. The
//! right wall sits past the play-field bounds on purpose: shots that
//! clear the field to the right leave the bounds rectangle and get
//! pruned instead of bouncing back into view.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;
use crate::logger;

/// Ground slab geometry (full extents / center, world units).
pub const GROUND_SIZE: Vec2 = Vec2::new(100.0, 10.0);
pub const GROUND_CENTER: Vec2 = Vec2::new(50.0, 0.0);

/// Side wall geometry.
pub const WALL_SIZE: Vec2 = Vec2::new(10.0, 100.0);
pub const LEFT_WALL_CENTER: Vec2 = Vec2::new(0.0, 50.0);
pub const RIGHT_WALL_CENTER: Vec2 = Vec2::new(150.0, 50.0);

#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug)]
pub struct Wall;

/// Play-field rectangle. A projectile whose position leaves it is
/// destroyed on the next prune pass.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    /// Inclusive on all edges: a projectile sitting exactly on the
    /// boundary is still alive.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl From<&GameConfig> for WorldBounds {
    fn from(config: &GameConfig) -> Self {
        Self {
            min: Vec2::from_array(config.world.bounds_min),
            max: Vec2::from_array(config.world.bounds_max),
        }
    }
}

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

fn spawn_arena(mut commands: Commands) {
    spawn_fixed_box(&mut commands, GROUND_CENTER, GROUND_SIZE).insert(Ground);
    spawn_fixed_box(&mut commands, LEFT_WALL_CENTER, WALL_SIZE).insert(Wall);
    spawn_fixed_box(&mut commands, RIGHT_WALL_CENTER, WALL_SIZE).insert(Wall);

    logger::log_info("Arena spawned: ground + 2 walls");
}

fn spawn_fixed_box<'a>(
    commands: &'a mut Commands,
    center: Vec2,
    size: Vec2,
) -> bevy::ecs::system::EntityCommands<'a> {
    commands.spawn((
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(size.x * 0.5, size.y * 0.5),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive_on_edges() {
        let bounds = WorldBounds {
            min: Vec2::ZERO,
            max: Vec2::splat(100.0),
        };
        assert!(bounds.contains(Vec2::new(0.0, 0.0)));
        assert!(bounds.contains(Vec2::new(100.0, 100.0)));
        assert!(bounds.contains(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn bounds_reject_outside_points() {
        let bounds = WorldBounds {
            min: Vec2::ZERO,
            max: Vec2::splat(100.0),
        };
        assert!(!bounds.contains(Vec2::new(-0.1, 50.0)));
        assert!(!bounds.contains(Vec2::new(100.1, 50.0)));
        assert!(!bounds.contains(Vec2::new(50.0, -0.1)));
        assert!(!bounds.contains(Vec2::new(50.0, 100.1)));
    }

    #[test]
    fn bounds_derive_from_config() {
        let config = GameConfig::default();
        let bounds = WorldBounds::from(&config);
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::splat(100.0));
    }

    #[test]
    fn right_wall_sits_outside_default_bounds() {
        let bounds = WorldBounds::from(&GameConfig::default());
        assert!(!bounds.contains(RIGHT_WALL_CENTER));
    }
}
