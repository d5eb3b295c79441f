use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Basket Catch".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -9.82 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub ground_y: f32,
    pub ground_size: f32,
    /// Balls below this height are despawned.
    pub delete_below_y: f32,
    /// sRGB clear colour.
    pub background: [f32; 3],
    pub fog_start: f32,
    pub fog_end: f32,
}
impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_y: -15.0,
            ground_size: 100.0,
            delete_below_y: -20.0,
            background: [0.067, 0.067, 0.067],
            fog_start: 40.0,
            fog_end: 120.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BasketConfig {
    pub y: f32,
    /// Horizontal clamp: basket x stays within [-x_limit, x_limit].
    pub x_limit: f32,
    pub follow_gain: f32,
    pub max_speed: f32,
    pub base_half_extents: [f32; 3],
    pub wall_half_extents: [f32; 3],
    pub wall_offset_x: f32,
    pub wall_offset_y: f32,
}
impl Default for BasketConfig {
    fn default() -> Self {
        Self {
            y: -12.0,
            x_limit: 25.0,
            follow_gain: 12.0,
            max_speed: 80.0,
            base_half_extents: [5.0, 0.5, 2.5],
            wall_half_extents: [0.5, 2.0, 2.5],
            wall_offset_x: 4.5,
            wall_offset_y: 2.5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub spawn_y: f32,
    /// Total width of the spawn band centred on x = 0.
    pub x_spread: f32,
    pub restitution: f32,
    pub golden_chance: f32,
    pub glass_chance: f32,
    pub normal_points: u32,
    pub golden_points: u32,
    pub glass_points: u32,
    pub glass_ground_penalty: u32,
    pub score_removal_delay: f32,
    pub ground_removal_delay: f32,
    pub glass_removal_delay: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            spawn_y: 25.0,
            x_spread: 40.0,
            restitution: 0.3,
            golden_chance: 0.1,
            glass_chance: 0.08,
            normal_points: 1,
            golden_points: 5,
            glass_points: 2,
            glass_ground_penalty: 1,
            score_removal_delay: 1.0,
            ground_removal_delay: 2.0,
            glass_removal_delay: 0.15,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnerConfig {
    pub rate_per_sec: f32,
}
impl Default for SpawnerConfig {
    fn default() -> Self {
        Self { rate_per_sec: 1.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub lifetime: f32,
    pub speed: f32,
    pub size: f32,
}
impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 14,
            lifetime: 0.8,
            speed: 9.0,
            size: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fov_degrees: f32,
    /// Camera x follows the basket but never leaves [-follow_x_limit, follow_x_limit].
    pub follow_x_limit: f32,
    pub follow_lerp: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 35.0],
            fov_degrees: 75.0,
            follow_x_limit: 6.0,
            follow_lerp: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    pub enabled: bool,
    pub gravity_min: f32,
    pub gravity_max: f32,
    pub gravity_step: f32,
    pub rate_min: f32,
    pub rate_max: f32,
    pub rate_step: f32,
}
impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gravity_min: -30.0,
            gravity_max: -1.0,
            gravity_step: 0.1,
            rate_min: 0.1,
            rate_max: 5.0,
            rate_step: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub model: String,
    pub ground_texture: String,
    pub basket_texture: String,
    pub music: String,
    pub score_sound: String,
    pub shatter_sound: String,
}
impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            model: "models/scenery.glb".into(),
            ground_texture: "textures/ground.png".into(),
            basket_texture: "textures/basket.png".into(),
            music: "audio/music.ogg".into(),
            score_sound: "audio/score.ogg".into(),
            shatter_sound: "audio/shatter.ogg".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub world: WorldConfig,
    pub basket: BasketConfig,
    pub balls: BallConfig,
    pub spawner: SpawnerConfig,
    pub particles: ParticleConfig,
    pub camera: CameraConfig,
    pub panel: PanelConfig,
    pub assets: AssetPaths,
    pub rapier_debug: bool,
    /// Fixed seed for ball spawning; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        Self::from_ron_str(&data)
    }

    pub fn from_ron_str(data: &str) -> Result<Self, String> {
        ron::from_str(data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge every readable layer in order (later layers override earlier ones field-by-field).
    /// Returns the config, the layers actually used, and any non-fatal errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y >= 0.0 {
            w.push(format!(
                "gravity.y is {} ; balls will not fall toward the basket",
                self.gravity.y
            ));
        }
        if self.world.delete_below_y >= self.world.ground_y {
            w.push(format!(
                "world.delete_below_y {} is not below ground_y {}; balls vanish before landing",
                self.world.delete_below_y, self.world.ground_y
            ));
        }
        if self.world.fog_start > self.world.fog_end {
            w.push("world.fog_start greater than fog_end".into());
        }
        if self.basket.x_limit <= 0.0 {
            w.push("basket.x_limit must be > 0".into());
        }
        if self.basket.follow_gain <= 0.0 {
            w.push("basket.follow_gain must be > 0; basket will not move".into());
        }
        if self.basket.y <= self.world.ground_y {
            w.push("basket.y at or below ground".into());
        }
        let b = &self.balls;
        if b.radius <= 0.0 {
            w.push("balls.radius must be > 0".into());
        }
        if b.spawn_y <= self.basket.y {
            w.push("balls.spawn_y should be above the basket".into());
        }
        for (label, p) in [("golden_chance", b.golden_chance), ("glass_chance", b.glass_chance)] {
            if !(0.0..=1.0).contains(&p) {
                w.push(format!("balls.{label} {p} outside 0..1"));
            }
        }
        if b.golden_chance + b.glass_chance > 1.0 {
            w.push(format!(
                "balls.golden_chance + glass_chance = {} > 1; normal balls never spawn",
                b.golden_chance + b.glass_chance
            ));
        }
        if !(0.0..=1.5).contains(&b.restitution) {
            w.push(format!("balls.restitution {} outside recommended 0..1.5", b.restitution));
        }
        for (label, d) in [
            ("score_removal_delay", b.score_removal_delay),
            ("ground_removal_delay", b.ground_removal_delay),
            ("glass_removal_delay", b.glass_removal_delay),
        ] {
            if d < 0.0 {
                w.push(format!("balls.{label} negative"));
            }
        }
        if self.spawner.rate_per_sec <= 0.0 {
            w.push(format!(
                "spawner.rate_per_sec {} must be > 0",
                self.spawner.rate_per_sec
            ));
        }
        if self.particles.lifetime <= 0.0 {
            w.push("particles.lifetime must be > 0".into());
        }
        let p = &self.panel;
        if p.gravity_min > p.gravity_max {
            w.push("panel.gravity_min greater than gravity_max".into());
        }
        if p.rate_min > p.rate_max {
            w.push("panel.rate_min greater than rate_max".into());
        }
        if p.rate_min <= 0.0 {
            w.push("panel.rate_min must be > 0 (spawn interval is 1000/rate ms)".into());
        }
        if p.enabled && !(p.gravity_min..=p.gravity_max).contains(&self.gravity.y) {
            w.push(format!(
                "gravity.y {} outside panel range {}..{}; the panel will clamp it",
                self.gravity.y, p.gravity_min, p.gravity_max
            ));
        }
        if p.enabled && !(p.rate_min..=p.rate_max).contains(&self.spawner.rate_per_sec) {
            w.push(format!(
                "spawner.rate_per_sec {} outside panel range {}..{}; the panel will clamp it",
                self.spawner.rate_per_sec, p.rate_min, p.rate_max
            ));
        }
        if self.camera.fov_degrees <= 0.0 || self.camera.fov_degrees >= 180.0 {
            w.push(format!("camera.fov_degrees {} outside 0..180", self.camera.fov_degrees));
        }
        w
    }
}

/// Command-line values that sit above every config layer, including after a hot reload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub rng_seed: Option<u64>,
    pub auto_close: Option<f32>,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut GameConfig) {
        if let Some(seed) = self.rng_seed {
            cfg.rng_seed = Some(seed);
        }
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
    }
}

/// Warnings collected while loading config before logging is up; logged once at startup.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigWarnings(pub Vec<String>);
