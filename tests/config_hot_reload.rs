#![cfg(not(target_arch = "wasm32"))]

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use basket_catch::core::config::{ConfigOverrides, GameConfig};
use basket_catch::core::resources::Tunables;
use basket_catch::core::CorePlugin;
use basket_catch::interaction::session::config_hot_reload::{
    ConfigHotReloadPlugin, ConfigReloadSettings,
};

fn reload_app(cfg: GameConfig, settings: Option<ConfigReloadSettings>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.insert_resource(cfg);
    if let Some(s) = settings {
        app.insert_resource(s);
    }
    app.add_plugins((CorePlugin, ConfigHotReloadPlugin));
    app
}

fn touch_later(path: &Path) {
    let file = fs::File::options().write(true).open(path).expect("open layer");
    file.set_modified(SystemTime::now() + Duration::from_secs(60))
        .expect("set mtime");
}

#[test]
fn startup_config_survives_the_first_polls() {
    // stands in for a config assembled from extra layers and --seed
    let mut cfg = GameConfig::default();
    cfg.spawner.rate_per_sec = 3.0;
    cfg.rng_seed = Some(7);
    let mut app = reload_app(cfg.clone(), None);

    // several poll intervals; the shipped base layer is present but unchanged
    for _ in 0..15 {
        app.update();
    }
    assert_eq!(app.world().resource::<Tunables>().spawn_rate, 3.0);
    assert_eq!(*app.world().resource::<GameConfig>(), cfg);
}

#[test]
fn edited_layer_reloads_full_stack_and_keeps_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let extra = dir.path().join("extra.ron");
    fs::write(&base, "(gravity: (y: -12.0), spawner: (rate_per_sec: 2.0))").expect("write base");
    fs::write(&extra, "(spawner: (rate_per_sec: 3.0))").expect("write extra");

    let overrides = ConfigOverrides {
        rng_seed: Some(7),
        auto_close: None,
    };
    let (mut cfg, _, errors) = GameConfig::load_layered([&base, &extra]);
    assert!(errors.is_empty(), "{errors:?}");
    overrides.apply(&mut cfg);

    let settings = ConfigReloadSettings {
        paths: vec![base.clone(), extra.clone()],
        overrides,
        ..Default::default()
    };
    let mut app = reload_app(cfg, Some(settings));
    for _ in 0..8 {
        app.update();
    }
    assert_eq!(app.world().resource::<Tunables>().spawn_rate, 3.0);

    fs::write(&extra, "(spawner: (rate_per_sec: 4.0))").expect("rewrite extra");
    touch_later(&extra);
    for _ in 0..8 {
        app.update();
    }

    let t = *app.world().resource::<Tunables>();
    assert_eq!(t.spawn_rate, 4.0);
    assert_eq!(t.gravity_y, -12.0);
    assert_eq!(app.world().resource::<GameConfig>().rng_seed, Some(7));
}
