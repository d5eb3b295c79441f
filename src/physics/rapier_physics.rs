use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::app::state::GameplayState;
use crate::core::config::GameConfig;
use crate::core::resources::Tunables;
use crate::core::system::system_order::PrePhysicsSet;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & the world

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let debug_render = app
            .world()
            .get_resource::<GameConfig>()
            .is_some_and(|c| c.rapier_debug);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());
        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
        add_world_control_systems(app);
    }
}

/// Gravity + pause wiring, split out so tests can run it without the Rapier plugin.
pub fn add_world_control_systems(app: &mut App) {
    app.add_systems(
        Update,
        apply_gravity_tunable
            .in_set(PrePhysicsSet)
            .run_if(resource_changed::<Tunables>),
    )
    .add_systems(OnEnter(GameplayState::Paused), suspend_pipeline)
    .add_systems(OnExit(GameplayState::Paused), resume_pipeline);
}

pub fn apply_gravity_tunable(tunables: Res<Tunables>, mut q: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q {
        let g = Vect::new(0.0, tunables.gravity_y, 0.0);
        if cfg.gravity != g {
            cfg.gravity = g;
            info!(target: "physics", "gravity set to {:.2}", tunables.gravity_y);
        }
    }
}

fn suspend_pipeline(mut q: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q {
        cfg.physics_pipeline_active = false;
    }
}

fn resume_pipeline(mut q: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q {
        cfg.physics_pipeline_active = true;
    }
}
