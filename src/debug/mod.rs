//! Debug tooling. The tuning panel is always available (it can be switched off
//! in config or with `--no-panel`); stats and periodic logging only build with
//! `--features debug`.

pub mod panel;
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use crate::core::system::system_order::PostPhysicsAdjustSet;
        use logging::{debug_logging_system, DebugLogTimer};
        use stats::{debug_stats_collect_system, DebugStats};

        app.init_resource::<DebugStats>()
            .init_resource::<DebugLogTimer>()
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(PostPhysicsAdjustSet),
            );
    }
}
