//! Centralized asset handles (model, textures, audio) plus load tracking.
//! Failed loads are logged once; the scene carries on without the asset.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use crate::core::config::{AssetPaths, GameConfig};

#[derive(Resource, Debug, Clone, Default)]
pub struct GameAssets {
    pub scenery: Handle<Scene>,
    pub ground_texture: Handle<Image>,
    pub basket_texture: Handle<Image>,
    pub music: Handle<AudioSource>,
    pub score_sound: Handle<AudioSource>,
    pub shatter_sound: Handle<AudioSource>,
}

/// Loads still waiting for a terminal state.
#[derive(Resource, Debug, Default)]
pub struct PendingAssetLoads(pub Vec<PendingLoad>);

#[derive(Debug, Clone)]
pub struct PendingLoad {
    pub label: &'static str,
    pub path: String,
    pub id: UntypedAssetId,
}

pub struct GameAssetsPlugin;

impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameAssets>()
            .init_resource::<PendingAssetLoads>()
            .add_systems(PreStartup, load_game_assets)
            .add_systems(
                Update,
                report_asset_loads.run_if(|p: Res<PendingAssetLoads>| !p.0.is_empty()),
            );
    }
}

/// One tracking entry per requested asset, labelled for the load log.
pub fn pending_loads(paths: &AssetPaths, assets: &GameAssets) -> Vec<PendingLoad> {
    let requested = [
        ("model", &paths.model, assets.scenery.id().untyped()),
        ("ground texture", &paths.ground_texture, assets.ground_texture.id().untyped()),
        ("basket texture", &paths.basket_texture, assets.basket_texture.id().untyped()),
        ("music", &paths.music, assets.music.id().untyped()),
        ("score sound", &paths.score_sound, assets.score_sound.id().untyped()),
        ("shatter sound", &paths.shatter_sound, assets.shatter_sound.id().untyped()),
    ];
    requested
        .into_iter()
        .map(|(label, path, id)| PendingLoad {
            label,
            path: path.clone(),
            id,
        })
        .collect()
}

pub fn load_game_assets(
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
    mut assets: ResMut<GameAssets>,
    mut pending: ResMut<PendingAssetLoads>,
) {
    let paths = &cfg.assets;
    assets.scenery = asset_server.load(GltfAssetLabel::Scene(0).from_asset(paths.model.clone()));
    assets.ground_texture = asset_server.load(paths.ground_texture.clone());
    assets.basket_texture = asset_server.load(paths.basket_texture.clone());
    assets.music = asset_server.load(paths.music.clone());
    assets.score_sound = asset_server.load(paths.score_sound.clone());
    assets.shatter_sound = asset_server.load(paths.shatter_sound.clone());

    pending.0 = pending_loads(paths, &assets);
    info!(target: "assets", "requested {} assets", pending.0.len());
}

fn report_asset_loads(asset_server: Res<AssetServer>, mut pending: ResMut<PendingAssetLoads>) {
    pending.0.retain(|load| match asset_server.get_load_state(load.id) {
        Some(LoadState::Loaded) => {
            info!(target: "assets", "{} loaded ({})", load.label, load.path);
            false
        }
        Some(LoadState::Failed(err)) => {
            error!(
                target: "assets",
                "{} failed to load ({}): {err}; continuing without it",
                load.label,
                load.path
            );
            false
        }
        _ => true,
    });
}
