use bevy::prelude::*;

use crate::app::state::GameplayState;
use crate::core::resources::Score;

#[derive(Component, Debug)]
pub struct ScoreText;

#[derive(Component, Debug)]
pub struct PauseOverlay;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, update_score_text.run_if(resource_changed::<Score>))
            .add_systems(OnEnter(GameplayState::Paused), show_pause_overlay)
            .add_systems(OnExit(GameplayState::Paused), hide_pause_overlay);
    }
}

pub fn score_label(score: i32) -> String {
    format!("Score: {score}")
}

fn spawn_hud(mut commands: Commands, score: Res<Score>) {
    commands.spawn((
        ScoreText,
        Text::new(score_label(score.0)),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(16.0),
            ..default()
        },
    ));
    commands
        .spawn((
            PauseOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn update_score_text(score: Res<Score>, mut q: Query<&mut Text, With<ScoreText>>) {
    for mut text in &mut q {
        **text = score_label(score.0);
    }
}

fn show_pause_overlay(mut q: Query<&mut Visibility, With<PauseOverlay>>) {
    for mut v in &mut q {
        *v = Visibility::Visible;
    }
}

fn hide_pause_overlay(mut q: Query<&mut Visibility, With<PauseOverlay>>) {
    for mut v in &mut q {
        *v = Visibility::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_negative_scores() {
        assert_eq!(score_label(12), "Score: 12");
        assert_eq!(score_label(-3), "Score: -3");
    }
}
