use bevy::prelude::*;

use crate::core::system::system_order::InputSet;

/// Gameplay sub-state toggled by the pause key.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameplayState {
    #[default]
    Playing,
    Paused,
}

pub const PAUSE_KEY: KeyCode = KeyCode::KeyP;

pub struct PausePlugin;

impl Plugin for PausePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameplayState>()
            .add_systems(Update, toggle_pause.in_set(InputSet))
            .add_systems(OnEnter(GameplayState::Paused), log_paused)
            .add_systems(OnExit(GameplayState::Paused), log_resumed);
    }
}

pub fn toggle_pause(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    state: Res<State<GameplayState>>,
    mut next: ResMut<NextState<GameplayState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if !keys.just_pressed(PAUSE_KEY) {
        return;
    }
    next.set(match state.get() {
        GameplayState::Playing => GameplayState::Paused,
        GameplayState::Paused => GameplayState::Playing,
    });
}

fn log_paused() {
    info!(target: "state", "paused");
}

fn log_resumed() {
    info!(target: "state", "resumed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn press_and_settle(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(PAUSE_KEY);
        app.update();
        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release(PAUSE_KEY);
            keys.clear();
        }
        // transition is applied at the start of the next frame
        app.update();
    }

    #[test]
    fn p_toggles_between_playing_and_paused() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.add_plugins(PausePlugin);
        app.update();
        assert_eq!(
            *app.world().resource::<State<GameplayState>>().get(),
            GameplayState::Playing
        );

        press_and_settle(&mut app);
        assert_eq!(
            *app.world().resource::<State<GameplayState>>().get(),
            GameplayState::Paused
        );

        press_and_settle(&mut app);
        assert_eq!(
            *app.world().resource::<State<GameplayState>>().get(),
            GameplayState::Playing
        );
    }
}
