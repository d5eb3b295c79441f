pub mod input;
pub mod session;

use bevy::prelude::*;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            input::basket_input::BasketInputPlugin,
            session::auto_close::AutoClosePlugin,
            session::config_hot_reload::ConfigHotReloadPlugin,
        ));
    }
}
