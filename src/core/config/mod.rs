pub mod config;

pub use config::{
    AssetPaths, BallConfig, BasketConfig, CameraConfig, ConfigOverrides, ConfigWarnings,
    GameConfig, GravityConfig, PanelConfig, ParticleConfig, SpawnerConfig, WindowConfig,
    WorldConfig,
};
