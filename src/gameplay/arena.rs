use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::Ground;
use crate::core::config::GameConfig;
use crate::rendering::materials::materials::GroundAssets;

/// Thickness of the ground slab collider.
const GROUND_HALF_THICKNESS: f32 = 0.5;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ground);
    }
}

/// Fixed ground slab; its top face sits at `world.ground_y`.
pub fn spawn_ground(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<GroundAssets>>,
) {
    let w = &cfg.world;
    let half = w.ground_size * 0.5;
    let mut ground = commands.spawn((
        Ground,
        Name::new("Ground"),
        Transform::from_xyz(0.0, w.ground_y - GROUND_HALF_THICKNESS, 0.0),
        Visibility::default(),
        RigidBody::Fixed,
        Collider::cuboid(half, GROUND_HALF_THICKNESS, half),
        Friction::coefficient(0.8),
    ));
    if let Some(assets) = assets {
        ground.with_children(|parent| {
            parent.spawn((
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                Transform::from_xyz(0.0, GROUND_HALF_THICKNESS, 0.0),
            ));
        });
    }
    info!(target: "arena", "ground at y={} size={}", w.ground_y, w.ground_size);
}
