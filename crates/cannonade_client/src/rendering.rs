//! Visual entities mirroring simulation bodies.
//!
//! Simulation entities carry no meshes. When one appears, a visual
//! entity with a Mesh2d shape is spawned and linked to it; every frame
//! the visual copies x/y/rotation from the simulation transform and
//! keeps its own z-layer. Visuals whose simulation entity is gone are
//! despawned.

use bevy::prelude::*;
use cannonade_simulation::obstacle::triangle_vertices;
use cannonade_simulation::{
    arena, Cannon, GameConfig, Ground, Obstacle, Projectile, Wall,
};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_arena_visuals,
                spawn_cannon_visuals,
                spawn_projectile_visuals,
                spawn_obstacle_visuals,
                sync_transforms,
                despawn_orphaned_visuals,
            )
                .chain(),
        );
    }
}

/// Link: visual entity -> simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Link: simulation entity -> visual entity
#[derive(Component)]
pub struct HasVisual(pub Entity);

const GROUND_COLOR: Color = Color::srgb(0.9, 0.1, 0.1); // Red
const WALL_COLOR: Color = Color::srgb(0.1, 0.9, 0.9); // Cyan
const CANNON_COLOR: Color = Color::srgb(0.9, 0.1, 0.9); // Magenta
const PROJECTILE_COLOR: Color = Color::srgb(0.9, 0.9, 0.1); // Yellow
const OBSTACLE_COLOR: Color = Color::WHITE;

// Draw order, back to front
const Z_ARENA: f32 = 0.0;
const Z_CANNON: f32 = 1.0;
const Z_OBSTACLE: f32 = 1.5;
const Z_PROJECTILE: f32 = 2.0;

fn spawn_arena_visuals(
    mut commands: Commands,
    grounds: Query<(Entity, &Transform), Added<Ground>>,
    walls: Query<(Entity, &Transform), Added<Wall>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (sim_entity, transform) in grounds.iter() {
        link_visual(
            &mut commands,
            sim_entity,
            transform,
            Mesh2d(meshes.add(Rectangle::new(arena::GROUND_SIZE.x, arena::GROUND_SIZE.y))),
            MeshMaterial2d(materials.add(GROUND_COLOR)),
            Z_ARENA,
        );
    }
    for (sim_entity, transform) in walls.iter() {
        link_visual(
            &mut commands,
            sim_entity,
            transform,
            Mesh2d(meshes.add(Rectangle::new(arena::WALL_SIZE.x, arena::WALL_SIZE.y))),
            MeshMaterial2d(materials.add(WALL_COLOR)),
            Z_ARENA,
        );
    }
}

fn spawn_cannon_visuals(
    mut commands: Commands,
    cannons: Query<(Entity, &Transform), Added<Cannon>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    for (sim_entity, transform) in cannons.iter() {
        link_visual(
            &mut commands,
            sim_entity,
            transform,
            Mesh2d(meshes.add(Rectangle::new(
                config.cannon.half_length * 2.0,
                config.cannon.half_height * 2.0,
            ))),
            MeshMaterial2d(materials.add(CANNON_COLOR)),
            Z_CANNON,
        );
    }
}

fn spawn_projectile_visuals(
    mut commands: Commands,
    projectiles: Query<(Entity, &Transform), Added<Projectile>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    for (sim_entity, transform) in projectiles.iter() {
        link_visual(
            &mut commands,
            sim_entity,
            transform,
            Mesh2d(meshes.add(Circle::new(config.projectile.radius))),
            MeshMaterial2d(materials.add(PROJECTILE_COLOR)),
            Z_PROJECTILE,
        );
    }
}

fn spawn_obstacle_visuals(
    mut commands: Commands,
    obstacles: Query<(Entity, &Transform), Added<Obstacle>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    for (sim_entity, transform) in obstacles.iter() {
        let [a, b, c] = triangle_vertices(config.obstacle.half_size);
        link_visual(
            &mut commands,
            sim_entity,
            transform,
            Mesh2d(meshes.add(Triangle2d::new(a, b, c))),
            MeshMaterial2d(materials.add(OBSTACLE_COLOR)),
            Z_OBSTACLE,
        );
    }
}

/// Spawn the visual entity at the simulation pose and wire the links
/// both ways.
fn link_visual(
    commands: &mut Commands,
    sim_entity: Entity,
    sim_transform: &Transform,
    mesh: Mesh2d,
    material: MeshMaterial2d<ColorMaterial>,
    z_layer: f32,
) {
    let mut transform =
        Transform::from_translation(sim_transform.translation.truncate().extend(z_layer));
    transform.rotation = sim_transform.rotation;

    let visual = commands
        .spawn((mesh, material, transform, VisualOf(sim_entity)))
        .id();

    commands.entity(sim_entity).insert(HasVisual(visual));
}

/// Copy simulation poses onto the linked visuals, preserving z-layer.
fn sync_transforms(
    sim_query: Query<(&Transform, &HasVisual), (Changed<Transform>, Without<VisualOf>)>,
    mut visual_query: Query<&mut Transform, With<VisualOf>>,
) {
    for (sim_transform, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            let z = visual_transform.translation.z;
            visual_transform.translation = sim_transform.translation.truncate().extend(z);
            visual_transform.rotation = sim_transform.rotation;
        }
    }
}

/// Drop visuals whose simulation entity has despawned (pruned
/// projectiles, mostly).
fn despawn_orphaned_visuals(
    mut commands: Commands,
    visuals: Query<(Entity, &VisualOf)>,
    sim_entities: Query<(), With<HasVisual>>,
) {
    for (visual, target) in visuals.iter() {
        if sim_entities.get(target.0).is_err() {
            commands.entity(visual).despawn();
        }
    }
}
