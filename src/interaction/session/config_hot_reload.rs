//! Native-only polling of the layered config files. A changed file reloads the
//! whole layer stack (command-line overrides re-applied on top); gravity and
//! spawn rate flow back into `Tunables` so the running world picks them up.

use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use bevy::prelude::*;

use crate::core::config::{ConfigOverrides, GameConfig};
use crate::core::resources::Tunables;

/// Layers to watch, in merge order. `main` replaces the default with the exact
/// stack it loaded at startup.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
    pub overrides: ConfigOverrides,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
            overrides: ConfigOverrides::default(),
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    /// Startup mtimes recorded; until then nothing counts as a change.
    primed: bool,
    timer: Timer,
}

impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            primed: false,
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = app;
    }
}

/// Fold a reloaded config into the live tunables; returns true when anything changed.
pub fn apply_reloaded_tunables(new_cfg: &GameConfig, tunables: &mut Tunables) -> bool {
    let next = Tunables::from_config(new_cfg);
    if *tunables == next {
        return false;
    }
    *tunables = next;
    true
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn files_changed(settings: &ConfigReloadSettings, state: &mut ConfigReloadState) -> bool {
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        match state.last_mod.get(path) {
            Some(seen) if modified <= *seen => {}
            _ => {
                state.last_mod.insert(path.clone(), modified);
                dirty = true;
            }
        }
    }
    dirty
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn poll_and_reload_config(
    time: Res<Time<Real>>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg: ResMut<GameConfig>,
    mut tunables: ResMut<Tunables>,
    mut windows: Query<&mut Window>,
) {
    if !state.primed {
        // the running config already reflects these files
        files_changed(&settings, &mut state);
        state.primed = true;
        return;
    }
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).just_finished() {
        return;
    }
    if !files_changed(&settings, &mut state) {
        return;
    }
    let layers = settings.paths.iter().filter(|p| p.exists());
    let (mut new_cfg, _used, errors) = GameConfig::load_layered(layers);
    for e in errors {
        warn!(target: "config", "hot-reload: {e}");
    }
    settings.overrides.apply(&mut new_cfg);
    if *cfg == new_cfg {
        return;
    }
    info!(target: "config", "hot-reload applied");
    for w in new_cfg.validate() {
        warn!(target: "config", "validation: {w}");
    }
    if let Ok(mut window) = windows.single_mut() {
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    if apply_reloaded_tunables(&new_cfg, &mut tunables) {
        info!(
            target: "config",
            "tunables now gravity={:.2} rate={:.2}",
            tunables.gravity_y,
            tunables.spawn_rate
        );
    }
    *cfg = new_cfg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_updates_tunables_only_on_change() {
        let mut cfg = GameConfig::default();
        let mut t = Tunables::from_config(&cfg);
        assert!(!apply_reloaded_tunables(&cfg, &mut t));
        cfg.spawner.rate_per_sec = 3.0;
        cfg.gravity.y = -15.0;
        assert!(apply_reloaded_tunables(&cfg, &mut t));
        assert_eq!(t.spawn_rate, 3.0);
        assert_eq!(t.gravity_y, -15.0);
    }

    #[test]
    fn first_look_at_files_only_records_them() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("game.ron");
        std::fs::write(&path, "()").expect("write");
        let settings = ConfigReloadSettings {
            paths: vec![path.clone(), dir.path().join("missing.ron")],
            ..Default::default()
        };
        let mut state = ConfigReloadState::default();
        assert!(files_changed(&settings, &mut state));
        assert!(!files_changed(&settings, &mut state));
        assert!(state.last_mod.contains_key(&path));
    }
}
