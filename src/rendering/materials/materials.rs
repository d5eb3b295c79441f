use bevy::prelude::*;

use crate::assets::{load_game_assets, GameAssets};
use crate::core::components::BallKind;
use crate::core::config::GameConfig;
use crate::rendering::palette::palette::{color_for_kind, BASKET, GROUND};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MaterialsInitSet;

/// Shared sphere mesh + one material per ball kind.
#[derive(Resource, Debug, Clone)]
pub struct BallAssets {
    pub mesh: Handle<Mesh>,
    pub normal: Handle<StandardMaterial>,
    pub golden: Handle<StandardMaterial>,
    pub glass: Handle<StandardMaterial>,
}

impl BallAssets {
    pub fn material(&self, kind: BallKind) -> Handle<StandardMaterial> {
        match kind {
            BallKind::Normal => self.normal.clone(),
            BallKind::Golden => self.golden.clone(),
            BallKind::Glass => self.glass.clone(),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct BasketAssets {
    pub base_mesh: Handle<Mesh>,
    pub wall_mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

#[derive(Resource, Debug, Clone)]
pub struct GroundAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Fragment mesh + per-kind shard materials used by particle bursts.
#[derive(Resource, Debug, Clone)]
pub struct EffectAssets {
    pub shard_mesh: Handle<Mesh>,
    pub shards: [Handle<StandardMaterial>; 3],
}

impl EffectAssets {
    pub fn shard_material(&self, kind: BallKind) -> Handle<StandardMaterial> {
        let idx = match kind {
            BallKind::Normal => 0,
            BallKind::Golden => 1,
            BallKind::Glass => 2,
        };
        self.shards[idx].clone()
    }
}

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreStartup,
            setup_materials
                .in_set(MaterialsInitSet)
                .after(load_game_assets),
        );
    }
}

fn setup_materials(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
    game_assets: Option<Res<GameAssets>>,
) {
    let ball_mesh = meshes.add(Sphere::new(cfg.balls.radius).mesh().ico(4).unwrap_or_else(|_| {
        Sphere::new(cfg.balls.radius).mesh().uv(32, 18)
    }));
    let normal = materials.add(StandardMaterial {
        base_color: color_for_kind(BallKind::Normal),
        perceptual_roughness: 0.1,
        metallic: 0.9,
        ..default()
    });
    let golden = materials.add(StandardMaterial {
        base_color: color_for_kind(BallKind::Golden),
        perceptual_roughness: 0.1,
        metallic: 1.0,
        emissive: LinearRgba::rgb(0.2, 0.2, 0.0),
        ..default()
    });
    let glass = materials.add(StandardMaterial {
        base_color: color_for_kind(BallKind::Glass),
        perceptual_roughness: 0.05,
        metallic: 0.0,
        reflectance: 0.9,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    commands.insert_resource(BallAssets { mesh: ball_mesh, normal, golden, glass });

    let b = &cfg.basket;
    let basket_tex = game_assets.as_ref().map(|a| a.basket_texture.clone());
    let ground_tex = game_assets.as_ref().map(|a| a.ground_texture.clone());
    commands.insert_resource(BasketAssets {
        base_mesh: meshes.add(Cuboid::from_size(Vec3::from_array(b.base_half_extents) * 2.0)),
        wall_mesh: meshes.add(Cuboid::from_size(Vec3::from_array(b.wall_half_extents) * 2.0)),
        material: materials.add(StandardMaterial {
            base_color: BASKET,
            base_color_texture: basket_tex,
            ..default()
        }),
    });

    let size = cfg.world.ground_size;
    commands.insert_resource(GroundAssets {
        mesh: meshes.add(Plane3d::default().mesh().size(size, size)),
        material: materials.add(StandardMaterial {
            base_color: GROUND,
            base_color_texture: ground_tex,
            perceptual_roughness: 0.9,
            ..default()
        }),
    });

    let shard_mesh = meshes.add(Cuboid::from_length(1.0));
    let shards = [BallKind::Normal, BallKind::Golden, BallKind::Glass].map(|kind| {
        materials.add(StandardMaterial {
            base_color: color_for_kind(kind),
            emissive: color_for_kind(kind).to_linear() * 0.6,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })
    });
    commands.insert_resource(EffectAssets { shard_mesh, shards });
}
