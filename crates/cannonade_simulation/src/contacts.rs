//! Contact observation.
//!
//! Collision response is entirely rapier's job; this module only drains
//! the contact event stream and logs it. Gameplay never reacts to hits.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::logger;

pub fn log_collision_events(mut events: EventReader<CollisionEvent>) {
    for event in events.read() {
        match event {
            CollisionEvent::Started(a, b, _) => {
                logger::log(&format!("Contact started: {:?} <-> {:?}", a, b));
            }
            CollisionEvent::Stopped(a, b, _) => {
                logger::log(&format!("Contact stopped: {:?} <-> {:?}", a, b));
            }
        }
    }
}
