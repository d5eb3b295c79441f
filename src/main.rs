use std::path::PathBuf;

use anyhow::Result;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use basket_catch::core::config::ConfigOverrides;
#[cfg(not(target_arch = "wasm32"))]
use basket_catch::interaction::session::config_hot_reload::ConfigReloadSettings;
use basket_catch::{ConfigWarnings, GameConfig, GamePlugin};

#[cfg(not(target_arch = "wasm32"))]
const BASE_CONFIG: &str = "assets/config/game.ron";
#[cfg(not(target_arch = "wasm32"))]
const LOCAL_CONFIG: &str = "assets/config/game.local.ron";

#[derive(Parser, Debug, Default)]
#[command(name = "basket_catch", version, about = "Catch the falling balls")]
struct Cli {
    /// Extra RON config layers, applied after the defaults in order
    #[arg(long = "config", short)]
    config: Vec<PathBuf>,
    /// Fixed RNG seed for ball spawning
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds (0 keeps running)
    #[arg(long)]
    auto_close: Option<f32>,
    /// Hide the tuning panel
    #[arg(long)]
    no_panel: bool,
}

/// Config layers in merge order: base, optional local file, then `--config` paths.
#[cfg(not(target_arch = "wasm32"))]
fn config_layers(cli: &Cli) -> Vec<PathBuf> {
    let mut layers = vec![PathBuf::from(BASE_CONFIG), PathBuf::from(LOCAL_CONFIG)];
    layers.extend(cli.config.iter().cloned());
    layers
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(layers: &[PathBuf]) -> (GameConfig, Vec<String>) {
    let local = PathBuf::from(LOCAL_CONFIG);
    // the local layer is optional; only report it when it exists but fails
    let present = layers.iter().filter(|p| **p != local || p.exists());
    let (cfg, used, mut notes) = GameConfig::load_layered(present);
    if used.is_empty() {
        notes.push("no config layers loaded; using built-in defaults".into());
    }
    (cfg, notes)
}

#[cfg(target_arch = "wasm32")]
fn load_embedded_config() -> (GameConfig, Vec<String>) {
    match GameConfig::from_ron_str(include_str!("../assets/config/game.ron")) {
        Ok(cfg) => (cfg, Vec::new()),
        Err(e) => (GameConfig::default(), vec![format!("embedded config: {e}")]),
    }
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    let cli = Cli::default();
    #[cfg(not(target_arch = "wasm32"))]
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        rng_seed: cli.seed,
        auto_close: cli.auto_close,
    };
    #[cfg(not(target_arch = "wasm32"))]
    let layers = config_layers(&cli);
    #[cfg(not(target_arch = "wasm32"))]
    let (mut cfg, notes) = load_config(&layers);
    #[cfg(target_arch = "wasm32")]
    let (mut cfg, notes) = load_embedded_config();
    overrides.apply(&mut cfg);
    let panel = cfg.panel.enabled && !cli.no_panel;

    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(ConfigWarnings(notes))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                canvas: Some("#bevy".into()),
                fit_canvas_to_parent: true,
                prevent_default_event_handling: true,
                resizable: true,
                ..default()
            }),
            ..default()
        }));
    #[cfg(not(target_arch = "wasm32"))]
    app.insert_resource(ConfigReloadSettings {
        paths: layers,
        overrides,
        ..default()
    });
    if panel {
        app.add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        });
    }
    app.add_plugins(GamePlugin { panel });

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {code}"),
    }
}
