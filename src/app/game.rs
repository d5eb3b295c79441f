// This file is part of Basket Catch.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::state::PausePlugin;
use crate::assets::GameAssetsPlugin;
use crate::audio::GameAudioPlugin;
use crate::core::CorePlugin;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::debug::panel::TuningPanelPlugin;
use crate::gameplay::GameplayPlugin;
use crate::interaction::InteractionPlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::RenderingPlugin;

/// Everything below the window: expects `DefaultPlugins` (and `EguiPlugin` when
/// the panel is enabled) to be added by the caller.
pub struct GamePlugin {
    pub panel: bool,
}

impl Default for GamePlugin {
    fn default() -> Self {
        Self { panel: true }
    }
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CorePlugin,
            PausePlugin,
            GameAssetsPlugin,
            RenderingPlugin,
            PhysicsSetupPlugin,
            GameplayPlugin,
            InteractionPlugin,
            GameAudioPlugin,
        ));
        if self.panel {
            app.add_plugins(TuningPanelPlugin);
        }
        #[cfg(feature = "debug")]
        app.add_plugins(DebugPlugin);
    }
}
