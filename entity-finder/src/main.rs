use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

use entity_finder::engine::camera::{ViewportCamera, camera_controller};
use entity_finder::engine::scene::{player_movement, spawn_world};
use entity_finder::engine::settings::{FinderConfig, FinderState, load_finder_config, toggle_enabled};
use entity_finder::finder::FinderPlugin;

fn main() {
    create_app().run();
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<FinderConfig>::new(&["settings.json"]))
        .add_plugins(FinderPlugin)
        .init_resource::<ViewportCamera>()
        .init_resource::<FinderState>()
        .add_systems(Startup, spawn_world)
        .add_systems(
            Update,
            (
                load_finder_config,
                toggle_enabled,
                camera_controller,
                player_movement,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(Window {
            title: "Entity Finder".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
