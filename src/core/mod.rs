pub mod components;
pub mod config;
pub mod events;
pub mod resources;
pub mod system;

use bevy::prelude::*;

use config::{ConfigWarnings, GameConfig};
use events::{BallScored, GlassShattered};
use resources::{Score, Tunables};
use system::system_order::{InputSet, PostPhysicsAdjustSet, PrePhysicsSet, ScoringSet};

/// Shared resources, events and the ordering contract every other plugin relies on.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.init_resource::<GameConfig>();
        }
        let tunables = Tunables::from_config(app.world().resource::<GameConfig>());
        app.insert_resource(tunables)
            .init_resource::<Score>()
            .init_resource::<ConfigWarnings>()
            .add_event::<BallScored>()
            .add_event::<GlassShattered>()
            .configure_sets(
                Update,
                (InputSet, PrePhysicsSet, ScoringSet, PostPhysicsAdjustSet).chain(),
            )
            .add_systems(Startup, log_config_warnings);
    }
}

fn log_config_warnings(cfg: Res<GameConfig>, warnings: Res<ConfigWarnings>) {
    for w in warnings.0.iter() {
        warn!(target: "config", "{w}");
    }
    for w in cfg.validate() {
        warn!(target: "config", "validation: {w}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tunables_seeded_from_inserted_config() {
        let mut cfg = GameConfig::default();
        cfg.gravity.y = -20.0;
        cfg.spawner.rate_per_sec = 2.5;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(cfg);
        app.add_plugins(CorePlugin);
        let t = app.world().resource::<Tunables>();
        assert_eq!(t.gravity_y, -20.0);
        assert_eq!(t.spawn_rate, 2.5);
        assert_eq!(app.world().resource::<Score>().0, 0);
    }
}
