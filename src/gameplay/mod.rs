pub mod arena;
pub mod basket;
pub mod cleanup;
pub mod scoring;
pub mod spawn;

use bevy::prelude::*;

/// Ground, basket, spawner, collision scoring and removal.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            arena::ArenaPlugin,
            basket::BasketPlugin,
            spawn::BallSpawnPlugin,
            scoring::ScoringPlugin,
            cleanup::CleanupPlugin,
        ));
    }
}
