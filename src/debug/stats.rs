use bevy::prelude::*;

use crate::core::components::Ball;
use crate::core::resources::Score;
use crate::rendering::particles::Particle;

#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub frame: u64,
    pub fps: f32,
    pub frame_time_ms: f32,
    pub ball_count: usize,
    pub particle_count: usize,
    pub score: i32,
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    balls: Query<(), With<Ball>>,
    particles: Query<(), With<Particle>>,
    score: Res<Score>,
) {
    stats.frame += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    let inst_ms = dt * 1000.0;
    // exponential smoothing
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
        stats.frame_time_ms = inst_ms;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.ball_count = balls.iter().count();
    stats.particle_count = particles.iter().count();
    stats.score = score.0;
}
