//! Short-lived shard bursts at scoring and shattering positions.

use bevy::prelude::*;
use rand::Rng;

use crate::app::state::GameplayState;
use crate::core::components::BallKind;
use crate::core::config::{GameConfig, ParticleConfig};
use crate::core::events::{BallScored, GlassShattered};
use crate::core::system::system_order::ScoringSet;
use crate::rendering::materials::materials::EffectAssets;

/// Downward pull applied to shards, independent of the physics world.
const SHARD_GRAVITY: f32 = -12.0;

#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub velocity: Vec3,
    pub remaining: f32,
    pub lifetime: f32,
    /// Scale at spawn; shrinks linearly with remaining life.
    pub size: f32,
}

impl Particle {
    /// Remaining life as a fraction in [0, 1].
    pub fn life_fraction(&self) -> f32 {
        if self.lifetime <= 0.0 {
            0.0
        } else {
            (self.remaining / self.lifetime).clamp(0.0, 1.0)
        }
    }
}

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_bursts.after(ScoringSet),
                update_particles.run_if(in_state(GameplayState::Playing)),
            )
                .chain(),
        );
    }
}

/// Random outward velocities for one burst. Always `count` entries.
pub fn burst_velocities(rng: &mut impl Rng, cfg: &ParticleConfig) -> Vec<Vec3> {
    (0..cfg.count)
        .map(|_| {
            let dir = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(0.2..1.0),
                rng.gen_range(-1.0..1.0),
            )
            .normalize_or(Vec3::Y);
            dir * cfg.speed * rng.gen_range(0.5..1.0)
        })
        .collect()
}

fn spawn_burst(
    commands: &mut Commands,
    origin: Vec3,
    kind: BallKind,
    cfg: &ParticleConfig,
    assets: Option<&EffectAssets>,
) {
    let mut rng = rand::thread_rng();
    for velocity in burst_velocities(&mut rng, cfg) {
        let mut e = commands.spawn((
            Particle {
                velocity,
                remaining: cfg.lifetime,
                lifetime: cfg.lifetime,
                size: cfg.size,
            },
            Transform::from_translation(origin).with_scale(Vec3::splat(cfg.size)),
            Visibility::default(),
        ));
        if let Some(a) = assets {
            e.insert((Mesh3d(a.shard_mesh.clone()), MeshMaterial3d(a.shard_material(kind))));
        }
    }
}

pub fn spawn_bursts(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Option<Res<EffectAssets>>,
    mut scored: EventReader<BallScored>,
    mut shattered: EventReader<GlassShattered>,
) {
    let p = &cfg.particles;
    for ev in scored.read() {
        spawn_burst(&mut commands, ev.position, ev.kind, p, assets.as_deref());
    }
    for ev in shattered.read() {
        spawn_burst(&mut commands, ev.position, BallKind::Glass, p, assets.as_deref());
    }
}

pub fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Particle, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (e, mut p, mut tf) in &mut q {
        p.remaining -= dt;
        if p.remaining <= 0.0 {
            commands.entity(e).try_despawn();
            continue;
        }
        p.velocity.y += SHARD_GRAVITY * dt;
        tf.translation += p.velocity * dt;
        tf.scale = Vec3::splat(p.size * p.life_fraction());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn burst_has_configured_count_and_bounded_speed() {
        let cfg = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let v = burst_velocities(&mut rng, &cfg);
        assert_eq!(v.len(), cfg.count);
        for vel in v {
            assert!(vel.length() <= cfg.speed + 1e-4);
            assert!(vel.y > 0.0);
        }
    }

    #[test]
    fn life_fraction_handles_zero_lifetime() {
        let p = Particle { velocity: Vec3::ZERO, remaining: 0.0, lifetime: 0.0, size: 1.0 };
        assert_eq!(p.life_fraction(), 0.0);
    }
}
