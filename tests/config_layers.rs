use std::fs;

use basket_catch::core::config::GameConfig;

#[test]
fn later_layers_override_earlier_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(
            gravity: (y: -12.0),
            spawner: (rate_per_sec: 1.5),
            balls: (golden_chance: 0.2, glass_chance: 0.1),
        )"#,
    )
    .expect("write base");
    fs::write(&local, "(spawner: (rate_per_sec: 3.0))").expect("write local");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.gravity.y, -12.0);
    assert_eq!(cfg.spawner.rate_per_sec, 3.0);
    assert_eq!(cfg.balls.golden_chance, 0.2);
    assert_eq!(cfg.balls.radius, GameConfig::default().balls.radius);
}

#[test]
fn missing_and_broken_layers_are_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(spawner: (rate_per_sec: ").expect("write broken");
    let missing = dir.path().join("nope.ron");

    let (cfg, used, errors) = GameConfig::load_layered([&missing, &broken]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 2);
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn shipped_config_parses_and_validates() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");
    let cfg = GameConfig::load_from_file(path).expect("shipped config parses");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg, GameConfig::default());
}
