use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::core::components::Basket;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;

#[derive(Component, Debug)]
pub struct GameCamera;

#[derive(Component, Debug)]
pub struct Scenery;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_lighting, spawn_scenery))
            .add_systems(
                Update,
                camera_follow_basket.after(PostPhysicsAdjustSet),
            );
    }
}

fn background_color(cfg: &GameConfig) -> Color {
    let [r, g, b] = cfg.world.background;
    Color::srgb(r, g, b)
}

pub fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    let c = &cfg.camera;
    let bg = background_color(&cfg);
    commands.insert_resource(ClearColor(bg));
    commands.spawn((
        GameCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: c.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(Vec3::from_array(c.position))
            .looking_at(Vec3::new(c.position[0], 0.0, 0.0), Vec3::Y),
        DistanceFog {
            color: bg,
            falloff: FogFalloff::Linear {
                start: cfg.world.fog_start,
                end: cfg.world.fog_end,
            },
            ..default()
        },
    ));
}

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 30.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Decorative backdrop model. A failed load is reported by the asset tracker; the
/// entity simply renders nothing.
fn spawn_scenery(mut commands: Commands, assets: Option<Res<GameAssets>>, cfg: Res<GameConfig>) {
    let Some(assets) = assets else {
        return;
    };
    commands.spawn((
        Scenery,
        Name::new("Scenery"),
        SceneRoot(assets.scenery.clone()),
        Transform::from_xyz(0.0, cfg.world.ground_y, -10.0),
    ));
}

/// Next camera x: eased toward the basket, never past `limit`.
pub fn camera_follow_x(camera_x: f32, basket_x: f32, limit: f32, lerp_rate: f32, dt: f32) -> f32 {
    let limit = limit.abs();
    let goal = basket_x.clamp(-limit, limit);
    let t = (lerp_rate * dt).clamp(0.0, 1.0);
    (camera_x + (goal - camera_x) * t).clamp(-limit, limit)
}

pub fn camera_follow_basket(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    basket: Query<&Transform, (With<Basket>, Without<GameCamera>)>,
    mut camera: Query<&mut Transform, With<GameCamera>>,
) {
    let Some(basket_tf) = basket.iter().next() else {
        return;
    };
    let Ok(mut cam_tf) = camera.single_mut() else {
        return;
    };
    let c = &cfg.camera;
    let x = camera_follow_x(
        cam_tf.translation.x,
        basket_tf.translation.x,
        c.follow_x_limit,
        c.follow_lerp,
        time.delta_secs(),
    );
    cam_tf.translation.x = x;
    cam_tf.look_at(Vec3::new(x, 0.0, 0.0), Vec3::Y);
}
