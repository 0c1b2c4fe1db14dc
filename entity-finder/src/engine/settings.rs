use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Asset path of the persisted settings file, relative to the assets root.
pub const SETTINGS_ASSET_PATH: &str = "config/finder.settings.json";

/// The persisted finder configuration. A single enabled toggle; everything
/// else is session-only.
#[derive(Asset, TypePath, Serialize, Deserialize, Clone)]
pub struct FinderConfig {
    pub enabled: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Runtime view of the persisted configuration.
#[derive(Resource)]
pub struct FinderState {
    pub enabled: bool,
    handle: Option<Handle<FinderConfig>>,
    loaded: bool,
}

impl Default for FinderState {
    fn default() -> Self {
        Self {
            enabled: true,
            handle: None,
            loaded: false,
        }
    }
}

/// Load the settings JSON once the asset server delivers it.
pub fn load_finder_config(
    mut state: ResMut<FinderState>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<FinderConfig>>,
) {
    if state.handle.is_none() {
        info!("loading finder settings from: {SETTINGS_ASSET_PATH}");
        state.handle = Some(asset_server.load(SETTINGS_ASSET_PATH));
        return;
    }

    if !state.loaded {
        if let Some(config) = state.handle.as_ref().and_then(|h| configs.get(h)) {
            state.enabled = config.enabled;
            state.loaded = true;
            info!("finder settings loaded, enabled: {}", config.enabled);
        }
    }
}

/// F2 flips the enabled toggle and writes it back to disk.
pub fn toggle_enabled(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<FinderState>) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }
    state.enabled = !state.enabled;
    info!("entity finder {}", if state.enabled { "enabled" } else { "disabled" });
    persist_config(&FinderConfig {
        enabled: state.enabled,
    });
}

fn persist_config(config: &FinderConfig) {
    let path = Path::new("assets").join(SETTINGS_ASSET_PATH);
    let payload = match serde_json::to_string_pretty(config) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("failed to serialize finder settings: {err}");
            return;
        }
    };
    if let Some(dir) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(dir) {
            warn!("failed to create settings directory: {err}");
            return;
        }
    }
    if let Err(err) = std::fs::write(&path, payload) {
        warn!("failed to save finder settings: {err}");
    }
}
