//! Background music and one-shot effects. Missing sound files only produce a
//! load error from the asset tracker; playback entities then stay silent.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::core::events::{BallScored, GlassShattered};
use crate::core::system::system_order::ScoringSet;

#[derive(Component, Debug)]
pub struct BackgroundMusic;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_music)
            .add_systems(Update, play_event_sounds.after(ScoringSet));
    }
}

fn start_music(mut commands: Commands, assets: Option<Res<GameAssets>>) {
    let Some(assets) = assets else {
        return;
    };
    commands.spawn((
        BackgroundMusic,
        AudioPlayer::new(assets.music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(0.4)),
    ));
}

fn play_event_sounds(
    mut commands: Commands,
    assets: Option<Res<GameAssets>>,
    mut scored: EventReader<BallScored>,
    mut shattered: EventReader<GlassShattered>,
) {
    let Some(assets) = assets else {
        scored.clear();
        shattered.clear();
        return;
    };
    for _ in scored.read() {
        commands.spawn((AudioPlayer::new(assets.score_sound.clone()), PlaybackSettings::DESPAWN));
    }
    for _ in shattered.read() {
        commands.spawn((AudioPlayer::new(assets.shatter_sound.clone()), PlaybackSettings::DESPAWN));
    }
}
