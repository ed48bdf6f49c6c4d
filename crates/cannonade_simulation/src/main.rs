//! Headless scripted run.
//!
//! Sweeps the barrel up then down, fires every half second, and prints
//! the live projectile count. Useful for eyeballing the prune behavior
//! without a window.

use bevy::prelude::*;
use cannonade_simulation::{
    create_headless_app, logger, Cannon, CannonInput, FireIntent, GameConfig, Projectile,
};

const TICKS: u64 = 600;
const FIRE_EVERY: u64 = 30;

fn main() {
    logger::init_logger();
    let config = GameConfig::load_or_default("cannonade.json");
    let mut app = create_headless_app(config);

    // First update runs Startup: arena + cannon get spawned.
    app.update();

    for tick in 0..TICKS {
        let rotation = if tick < TICKS / 2 { 1.0 } else { -1.0 };

        let world = app.world_mut();
        let mut inputs = world.query::<&mut CannonInput>();
        for mut input in inputs.iter_mut(world) {
            input.rotation = rotation;
        }

        if tick % FIRE_EVERY == 0 {
            let world = app.world_mut();
            let mut cannons = world.query_filtered::<Entity, With<Cannon>>();
            if let Ok(cannon) = cannons.single(world) {
                world.send_event(FireIntent { cannon });
            }
        }

        app.update();

        if tick % 60 == 0 {
            let world = app.world_mut();
            let mut projectiles = world.query_filtered::<Entity, With<Projectile>>();
            let count = projectiles.iter(world).count();
            println!("Tick {}: {} live projectiles", tick, count);
        }
    }

    println!("Run complete");
}
