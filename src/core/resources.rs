use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Running score. Glass penalties may push it below zero.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Deref, DerefMut)]
pub struct Score(pub i32);

/// Values the debug panel edits live.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Tunables {
    pub gravity_y: f32,
    pub spawn_rate: f32,
}

impl Tunables {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            gravity_y: cfg.gravity.y,
            spawn_rate: cfg.spawner.rate_per_sec,
        }
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
