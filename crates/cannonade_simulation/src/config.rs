//! Game configuration.
//!
//! One JSON file, no CLI flags, no env vars. A missing or broken file
//! falls back to defaults (which reproduce the classic 800x600 window
//! with a 100x100 world-unit play field).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logger;

/// Top-level config resource. Every knob the simulation and the client
/// read lives here, so headless runs and tests share one source of truth.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub cannon: CannonConfig,
    pub projectile: ProjectileConfig,
    pub obstacle: ObstacleConfig,
}

impl GameConfig {
    /// Read config from a JSON file. Any failure degrades to defaults;
    /// a parse error is worth a warning, a missing file is not.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    logger::log_info(&format!("Loaded config from {}", path.display()));
                    config
                }
                Err(err) => {
                    logger::log_warning(&format!(
                        "Config {} is invalid ({}), using defaults",
                        path.display(),
                        err
                    ));
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Cannonade".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Simulation tick rate (FixedUpdate frequency).
    pub tick_hz: f64,
    /// Gravity vector, world units per second squared (y-up).
    pub gravity: [f32; 2],
    /// Visible view in world units (the window stretches to this).
    pub view_size: [f32; 2],
    /// Projectiles outside this rectangle are destroyed.
    pub bounds_min: [f32; 2],
    pub bounds_max: [f32; 2],
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            gravity: [0.0, -9.8],
            view_size: [100.0, 100.0],
            bounds_min: [0.0, 0.0],
            bounds_max: [100.0, 100.0],
        }
    }
}

impl WorldConfig {
    pub fn gravity_vec(&self) -> Vec2 {
        Vec2::from_array(self.gravity)
    }

    pub fn view_size_vec(&self) -> Vec2 {
        Vec2::from_array(self.view_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannonConfig {
    /// Barrel center, world units. The barrel rotates around this point.
    pub pivot: [f32; 2],
    /// Half the barrel length; the muzzle sits at +half_length local X.
    pub half_length: f32,
    /// Half the barrel thickness.
    pub half_height: f32,
    /// Elevation change per simulation tick while a rotate key is held (radians).
    pub rotation_step: f32,
}

impl Default for CannonConfig {
    fn default() -> Self {
        Self {
            pivot: [12.5, 50.0],
            half_length: 12.5,
            half_height: 2.5,
            rotation_step: 0.05,
        }
    }
}

impl CannonConfig {
    pub fn pivot_vec(&self) -> Vec2 {
        Vec2::from_array(self.pivot)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub radius: f32,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    /// Impulse magnitude applied along the barrel direction on fire.
    pub impulse: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            density: 1.0,
            friction: 0.1,
            restitution: 0.0,
            impulse: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Half-size of the triangular obstacle dropped on mouse click.
    pub half_size: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self { half_size: 5.0 }
    }
}
