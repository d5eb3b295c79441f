//! Timer-driven ball spawner.
//!
//! One ball per timer tick at the top of the play field. The timer interval is
//! `1000 / rate` ms; changing the rate through `Tunables` replaces the timer,
//! and resuming from pause recreates it from scratch.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::app::state::GameplayState;
use crate::core::components::{Ball, BallKind};
use crate::core::config::GameConfig;
use crate::core::resources::Tunables;
use crate::core::system::system_order::PrePhysicsSet;
use crate::rendering::materials::materials::BallAssets;

/// Lowest rate accepted; guards the 1000/rate division.
pub const MIN_SPAWN_RATE: f32 = 0.01;

#[derive(Resource, Debug, Clone)]
pub struct SpawnTimer {
    pub timer: Timer,
    pub rate: f32,
}

impl SpawnTimer {
    pub fn from_rate(rate: f32) -> Self {
        Self {
            timer: Timer::new(spawn_interval(rate), TimerMode::Repeating),
            rate,
        }
    }
}

/// Spawn interval for a rate in balls per second: 1000 / rate milliseconds.
pub fn spawn_interval(rate: f32) -> Duration {
    let ms = 1000.0 / f64::from(rate.max(MIN_SPAWN_RATE));
    Duration::from_secs_f64(ms / 1000.0)
}

/// Dedicated RNG so seeded runs spawn the same sequence.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

pub struct BallSpawnPlugin;

impl Plugin for BallSpawnPlugin {
    fn build(&self, app: &mut App) {
        let (rate, seed) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| (c.spawner.rate_per_sec, c.rng_seed))
            .unwrap_or((1.0, None));
        app.insert_resource(SpawnTimer::from_rate(rate))
            .insert_resource(SpawnRng::new(seed))
            .add_systems(
                Update,
                (
                    apply_spawn_rate.run_if(resource_changed::<Tunables>),
                    spawn_balls_on_timer.run_if(in_state(GameplayState::Playing)),
                )
                    .chain()
                    .in_set(PrePhysicsSet),
            )
            .add_systems(OnExit(GameplayState::Paused), recreate_spawn_timer);
    }
}

/// Replace the timer when the live rate differs from the one it was built for.
pub fn apply_spawn_rate(tunables: Res<Tunables>, mut timer: ResMut<SpawnTimer>) {
    if (tunables.spawn_rate - timer.rate).abs() <= f32::EPSILON {
        return;
    }
    *timer = SpawnTimer::from_rate(tunables.spawn_rate);
    info!(
        target: "spawn",
        "spawn rate {:.2}/s -> interval {:.0} ms",
        tunables.spawn_rate,
        timer.timer.duration().as_secs_f64() * 1000.0
    );
}

fn recreate_spawn_timer(tunables: Res<Tunables>, mut timer: ResMut<SpawnTimer>) {
    *timer = SpawnTimer::from_rate(tunables.spawn_rate);
}

pub fn spawn_balls_on_timer(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<SpawnRng>,
    assets: Option<Res<BallAssets>>,
) {
    timer.timer.tick(time.delta());
    let due = timer.timer.times_finished_this_tick();
    for _ in 0..due {
        let b = &cfg.balls;
        let kind = BallKind::from_roll(rng.0.gen::<f32>(), b);
        let half = (b.x_spread * 0.5).abs();
        let x = if half > 0.0 { rng.0.gen_range(-half..half) } else { 0.0 };
        let position = Vec3::new(x, b.spawn_y, 0.0);
        let e = spawn_ball_entity(&mut commands, &cfg, position, kind, assets.as_deref());
        debug!(target: "spawn", "ball {e:?} {kind:?} at x={x:.2}");
    }
}

/// Spawn one ball entity carrying both its rigid body and (when available) its mesh.
pub fn spawn_ball_entity(
    commands: &mut Commands,
    cfg: &GameConfig,
    position: Vec3,
    kind: BallKind,
    assets: Option<&BallAssets>,
) -> Entity {
    let b = &cfg.balls;
    let mut ec = commands.spawn((
        Ball::new(kind, b),
        Name::new("Ball"),
        Transform::from_translation(position),
        Visibility::default(),
        RigidBody::Dynamic,
        Collider::ball(b.radius),
        Restitution::coefficient(b.restitution),
        ActiveEvents::COLLISION_EVENTS,
        Ccd::enabled(),
    ));
    if let Some(assets) = assets {
        ec.insert((Mesh3d(assets.mesh.clone()), MeshMaterial3d(assets.material(kind))));
    }
    ec.id()
}
