use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use basket_catch::app::state::PausePlugin;
use basket_catch::core::components::BallKind;
use basket_catch::core::config::GameConfig;
use basket_catch::core::events::{BallScored, GlassShattered};
use basket_catch::core::resources::Score;
use basket_catch::core::CorePlugin;
use basket_catch::rendering::hud::{HudPlugin, ScoreText};
use basket_catch::rendering::particles::{Particle, ParticlesPlugin};

fn app_with(plugin: impl Plugin) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.insert_resource(GameConfig::default());
    app.add_plugins((CorePlugin, PausePlugin));
    app.add_plugins(plugin);
    app.update();
    app
}

fn particle_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<Particle>>()
        .iter(app.world())
        .count()
}

#[test]
fn burst_spawns_then_expires() {
    let mut app = app_with(ParticlesPlugin);
    let per_burst = GameConfig::default().particles.count;
    app.world_mut().send_event(BallScored {
        ball: Entity::PLACEHOLDER,
        position: Vec3::new(1.0, -11.0, 0.0),
        kind: BallKind::Golden,
        points: 5,
    });
    app.world_mut().send_event(GlassShattered {
        ball: Entity::PLACEHOLDER,
        position: Vec3::new(-3.0, -15.0, 0.0),
        penalty: 1,
    });
    app.update();
    assert_eq!(particle_count(&mut app), per_burst * 2);

    // 0.8 s lifetime
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(particle_count(&mut app), 0);
}

#[test]
fn score_text_tracks_score() {
    let mut app = app_with(HudPlugin);
    app.world_mut().resource_mut::<Score>().0 = -2;
    app.update();
    let mut q = app.world_mut().query_filtered::<&Text, With<ScoreText>>();
    let text = q.single(app.world()).expect("score text");
    assert_eq!(text.0, "Score: -2");
}
