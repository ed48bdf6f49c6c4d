//! Headless integration tests for firing and off-screen pruning.
//!
//! One `app.update()` equals exactly one simulation tick (manual time
//! advance), so "within one tick" is literally one update call.

use bevy::prelude::*;
use cannonade_simulation::{
    create_headless_app, Cannon, CannonInput, FireIntent, GameConfig, Obstacle, Projectile,
    SpawnObstacleIntent,
};

fn cannon_entity(app: &mut App) -> Entity {
    let world = app.world_mut();
    let mut cannons = world.query_filtered::<Entity, With<Cannon>>();
    cannons.single(world).expect("cannon spawned at startup")
}

fn projectile_count(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut projectiles = world.query_filtered::<Entity, With<Projectile>>();
    projectiles.iter(world).count()
}

#[test]
fn one_intent_spawns_one_projectile() {
    let mut app = create_headless_app(GameConfig::default());
    app.update(); // Startup

    let cannon = cannon_entity(&mut app);
    app.world_mut().send_event(FireIntent { cannon });
    app.update();

    assert_eq!(projectile_count(&mut app), 1);
}

#[test]
fn each_intent_spawns_its_own_projectile() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    let cannon = cannon_entity(&mut app);
    app.world_mut().send_event(FireIntent { cannon });
    app.world_mut().send_event(FireIntent { cannon });
    app.update();
    assert_eq!(projectile_count(&mut app), 2);

    app.world_mut().send_event(FireIntent { cannon });
    app.update();
    assert_eq!(projectile_count(&mut app), 3);
}

#[test]
fn intent_for_unknown_cannon_is_ignored() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    let bogus = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(FireIntent { cannon: bogus });
    app.update();

    assert_eq!(projectile_count(&mut app), 0);
}

#[test]
fn projectile_inside_bounds_survives() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    let cannon = cannon_entity(&mut app);
    app.world_mut().send_event(FireIntent { cannon });
    for _ in 0..5 {
        app.update();
    }

    // Fired from (25, 50) along +X with gravity pulling down: after a
    // handful of ticks it is still well inside the 100x100 field.
    assert_eq!(projectile_count(&mut app), 1);
}

#[test]
fn projectile_leaving_bounds_is_despawned_within_one_tick() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    let cannon = cannon_entity(&mut app);
    app.world_mut().send_event(FireIntent { cannon });
    app.update();
    assert_eq!(projectile_count(&mut app), 1);

    // Teleport it past the right edge.
    let world = app.world_mut();
    let mut transforms = world.query_filtered::<&mut Transform, With<Projectile>>();
    for mut transform in transforms.iter_mut(world) {
        transform.translation.x = 250.0;
    }

    app.update();
    assert_eq!(projectile_count(&mut app), 0);
}

#[test]
fn shot_arriving_with_a_rotation_uses_the_fresh_angle() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    let cannon = cannon_entity(&mut app);

    // Raise the barrel and fire in the same tick. The shot must leave
    // from the post-rotation muzzle (elevation 0.05 rad lifts it to
    // y ~= 50.6), not from the flat barrel at y = 50.
    let world = app.world_mut();
    let mut inputs = world.query::<&mut CannonInput>();
    for mut input in inputs.iter_mut(world) {
        input.rotation = 1.0;
    }
    app.world_mut().send_event(FireIntent { cannon });
    app.update();

    let world = app.world_mut();
    let mut transforms = world.query_filtered::<&Transform, With<Projectile>>();
    let transform = transforms.single(world).expect("one projectile");
    assert!(
        transform.translation.y > 50.3,
        "projectile at y = {}, spawned from the stale barrel pose",
        transform.translation.y
    );
}

#[test]
fn obstacle_intent_spawns_a_fixed_obstacle_at_the_position() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    let position = Vec2::new(60.0, 30.0);
    app.world_mut().send_event(SpawnObstacleIntent { position });
    app.update();

    let world = app.world_mut();
    let mut obstacles = world.query_filtered::<&Transform, With<Obstacle>>();
    let transform = obstacles.single(world).expect("one obstacle");
    assert!((transform.translation.truncate() - position).length() < 1e-5);
}

#[test]
fn obstacles_are_never_pruned() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    // Even outside the play-field bounds: pruning is projectiles-only.
    app.world_mut().send_event(SpawnObstacleIntent {
        position: Vec2::new(150.0, 150.0),
    });
    for _ in 0..10 {
        app.update();
    }

    let world = app.world_mut();
    let mut obstacles = world.query_filtered::<Entity, With<Obstacle>>();
    assert_eq!(obstacles.iter(world).count(), 1);
}

#[test]
fn prune_is_per_projectile_not_all_or_nothing() {
    let mut app = create_headless_app(GameConfig::default());
    app.update();

    let cannon = cannon_entity(&mut app);
    app.world_mut().send_event(FireIntent { cannon });
    app.world_mut().send_event(FireIntent { cannon });
    app.update();
    assert_eq!(projectile_count(&mut app), 2);

    // Push exactly one of them below the floor bound.
    let world = app.world_mut();
    let mut transforms = world.query_filtered::<&mut Transform, With<Projectile>>();
    let mut pushed = false;
    for mut transform in transforms.iter_mut(world) {
        if !pushed {
            transform.translation.y = -50.0;
            pushed = true;
        }
    }

    app.update();
    assert_eq!(projectile_count(&mut app), 1);
}
