use bevy::prelude::*;

use crate::app::state::GameplayState;
use crate::core::components::{Ball, Expiring};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;

pub struct CleanupPlugin;

impl Plugin for CleanupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                tick_expiring.run_if(in_state(GameplayState::Playing)),
                prune_fallen_balls,
            )
                .chain()
                .in_set(PostPhysicsAdjustSet),
        );
    }
}

/// Despawn entities whose removal delay elapsed.
pub fn tick_expiring(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Expiring)>,
) {
    for (e, mut expiring) in &mut q {
        if expiring.tick(time.delta()).finished() {
            commands.entity(e).try_despawn();
        }
    }
}

/// Balls that slipped past the ground are removed outright, pending removal delay or not.
pub fn prune_fallen_balls(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    q: Query<(Entity, &Transform), With<Ball>>,
) {
    let floor = cfg.world.delete_below_y;
    for (e, tf) in &q {
        if tf.translation.y < floor {
            debug!(target: "cleanup", "ball {e:?} below {floor}, removing");
            commands.entity(e).try_despawn();
        }
    }
}
