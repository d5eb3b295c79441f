pub mod app;
pub mod assets;
pub mod audio;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::state::GameplayState;
pub use core::components::{Ball, BallKind, Basket, Ground};
pub use core::config::{ConfigWarnings, GameConfig, WindowConfig};
pub use core::resources::{Score, Tunables};
