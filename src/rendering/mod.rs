pub mod hud;
pub mod materials;
pub mod palette;
pub mod particles;
pub mod scene;

use bevy::prelude::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            materials::materials::MaterialsPlugin,
            scene::ScenePlugin,
            particles::ParticlesPlugin,
            hud::HudPlugin,
        ));
    }
}
