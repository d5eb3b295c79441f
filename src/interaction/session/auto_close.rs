use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Exits the app after `window.autoClose` seconds (0 disables). Used for smoke runs.
#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(pub Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close)
            .add_systems(Update, check_auto_close.run_if(resource_exists::<AutoCloseTimer>));
    }
}

fn arm_auto_close(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", seconds = secs, "auto-close armed");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_auto_close(
    time: Res<Time<Real>>,
    mut timer: ResMut<AutoCloseTimer>,
    mut exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).just_finished() {
        info!(target: "session", "auto-close timer finished, exiting");
        exit.write(AppExit::Success);
    }
}
