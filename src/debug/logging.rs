use bevy::prelude::*;

use super::stats::DebugStats;

#[derive(Resource, Debug)]
pub struct DebugLogTimer(pub Timer);

impl Default for DebugLogTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

pub fn debug_logging_system(
    time: Res<Time<Real>>,
    mut timer: ResMut<DebugLogTimer>,
    stats: Res<DebugStats>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    info!(
        target: "sim",
        "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} balls={} particles={} score={}",
        stats.frame,
        time.elapsed_secs(),
        stats.fps,
        stats.frame_time_ms,
        stats.ball_count,
        stats.particle_count,
        stats.score
    );
}
