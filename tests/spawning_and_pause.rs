use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use basket_catch::app::state::{GameplayState, PausePlugin};
use basket_catch::core::components::Ball;
use basket_catch::core::config::GameConfig;
use basket_catch::core::resources::Tunables;
use basket_catch::core::CorePlugin;
use basket_catch::gameplay::spawn::{spawn_interval, BallSpawnPlugin, SpawnTimer};

fn spawn_app(rate: f32) -> App {
    let mut cfg = GameConfig::default();
    cfg.spawner.rate_per_sec = rate;
    cfg.rng_seed = Some(42);
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.insert_resource(cfg);
    app.add_plugins((CorePlugin, PausePlugin, BallSpawnPlugin));
    app
}

fn ball_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<Ball>>()
        .iter(app.world())
        .count()
}

#[test]
fn spawner_emits_one_ball_per_interval() {
    let mut app = spawn_app(2.0);
    for _ in 0..21 {
        app.update();
    }
    // ~2.1 s at 2 balls/s
    let n = ball_count(&mut app);
    assert!((4..=5).contains(&n), "expected 4..=5 balls, got {n}");
}

#[test]
fn rate_change_replaces_timer_interval() {
    let mut app = spawn_app(1.0);
    app.update();
    app.world_mut().resource_mut::<Tunables>().spawn_rate = 4.0;
    app.update();
    let timer = app.world().resource::<SpawnTimer>();
    assert_eq!(timer.rate, 4.0);
    assert_eq!(timer.timer.duration(), spawn_interval(4.0));
    assert!((timer.timer.duration().as_secs_f64() - 0.25).abs() < 1e-6);
}

#[test]
fn paused_game_spawns_nothing_and_resumes_with_fresh_timer() {
    let mut app = spawn_app(5.0);
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameplayState>>()
        .set(GameplayState::Paused);
    app.update();
    let before = ball_count(&mut app);
    for _ in 0..20 {
        app.update();
    }
    assert_eq!(ball_count(&mut app), before);

    app.world_mut()
        .resource_mut::<NextState<GameplayState>>()
        .set(GameplayState::Playing);
    app.update();
    assert_eq!(
        app.world().resource::<SpawnTimer>().timer.elapsed(),
        Duration::from_millis(100),
        "timer restarted on resume and ticked once"
    );
    for _ in 0..10 {
        app.update();
    }
    assert!(ball_count(&mut app) > before);
}
