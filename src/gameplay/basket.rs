use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::app::state::GameplayState;
use crate::core::components::{Basket, BasketPart};
use crate::core::config::{BasketConfig, GameConfig};
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::rendering::materials::materials::BasketAssets;

/// World-space x the basket is steering toward (already clamped).
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct BasketTarget(pub f32);

pub struct BasketPlugin;

impl Plugin for BasketPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BasketTarget>()
            .add_systems(Startup, spawn_basket)
            .add_systems(
                Update,
                drive_basket
                    .in_set(PrePhysicsSet)
                    .run_if(in_state(GameplayState::Playing)),
            )
            .add_systems(Update, clamp_basket_position.in_set(PostPhysicsAdjustSet))
            .add_systems(OnEnter(GameplayState::Paused), halt_basket);
    }
}

#[inline]
pub fn clamp_target_x(x: f32, limit: f32) -> f32 {
    let limit = limit.abs();
    x.clamp(-limit, limit)
}

/// Proportional follow velocity. Never faster than `max_speed` and never
/// further than the remaining distance within one step of `dt`.
pub fn follow_velocity(current: f32, target: f32, gain: f32, max_speed: f32, dt: f32) -> f32 {
    let delta = target - current;
    let mut v = (delta * gain).clamp(-max_speed, max_speed);
    if dt > 0.0 && (v * dt).abs() > delta.abs() {
        v = delta / dt;
    }
    v
}

/// Compound collider: base plus two side walls.
pub fn basket_collider(cfg: &BasketConfig) -> Collider {
    let [bx, by, bz] = cfg.base_half_extents;
    let [wx, wy, wz] = cfg.wall_half_extents;
    Collider::compound(vec![
        (Vec3::ZERO, Quat::IDENTITY, Collider::cuboid(bx, by, bz)),
        (
            Vec3::new(-cfg.wall_offset_x, cfg.wall_offset_y, 0.0),
            Quat::IDENTITY,
            Collider::cuboid(wx, wy, wz),
        ),
        (
            Vec3::new(cfg.wall_offset_x, cfg.wall_offset_y, 0.0),
            Quat::IDENTITY,
            Collider::cuboid(wx, wy, wz),
        ),
    ])
}

pub fn spawn_basket(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<BasketAssets>>,
) {
    let b = &cfg.basket;
    let mut basket = commands.spawn((
        Basket,
        Name::new("Basket"),
        Transform::from_xyz(0.0, b.y, 0.0),
        Visibility::default(),
        RigidBody::KinematicVelocityBased,
        basket_collider(b),
        Velocity::zero(),
    ));
    if let Some(assets) = assets {
        basket.with_children(|parent| {
            parent.spawn((
                BasketPart,
                Mesh3d(assets.base_mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                Transform::IDENTITY,
            ));
            for side in [-1.0, 1.0] {
                parent.spawn((
                    BasketPart,
                    Mesh3d(assets.wall_mesh.clone()),
                    MeshMaterial3d(assets.material.clone()),
                    Transform::from_xyz(side * b.wall_offset_x, b.wall_offset_y, 0.0),
                ));
            }
        });
    }
    info!(target: "basket", "basket spawned at y={} limit=±{}", b.y, b.x_limit);
}

pub fn drive_basket(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    target: Res<BasketTarget>,
    mut q: Query<(&Transform, &mut Velocity), With<Basket>>,
) {
    let b = &cfg.basket;
    let goal = clamp_target_x(target.0, b.x_limit);
    let dt = time.delta_secs();
    for (tf, mut vel) in &mut q {
        let vx = follow_velocity(tf.translation.x, goal, b.follow_gain, b.max_speed, dt);
        vel.linvel = Vec3::new(vx, 0.0, 0.0);
        vel.angvel = Vec3::ZERO;
    }
}

pub fn clamp_basket_position(
    cfg: Res<GameConfig>,
    mut q: Query<(&mut Transform, &mut Velocity), With<Basket>>,
) {
    let limit = cfg.basket.x_limit.abs();
    for (mut tf, mut vel) in &mut q {
        let x = tf.translation.x;
        if x.abs() > limit {
            tf.translation.x = x.clamp(-limit, limit);
            // do not keep pushing past the wall
            if vel.linvel.x.signum() == x.signum() {
                vel.linvel.x = 0.0;
            }
        }
    }
}

fn halt_basket(mut q: Query<&mut Velocity, With<Basket>>) {
    for mut vel in &mut q {
        *vel = Velocity::zero();
    }
}
