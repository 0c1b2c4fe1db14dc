use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::scene::{EntityPath, Player};
use crate::engine::settings::FinderState;

use super::search::{self, SearchMode, SearchSettings};

/// Resource holding the finder's current search state.
#[derive(Resource, Default)]
pub struct FinderTool {
    pub settings: SearchSettings,
}

/// Entities that passed this frame's filter. Rebuilt from scratch every
/// scan; nothing carries across frames.
#[derive(Resource, Default)]
pub struct MatchSet {
    pub paths: Vec<String>,
}

/// Per-frame tick: snapshot the player, cursor, and camera projection, then
/// run a linear scan over every tracked entity.
///
/// Missing scene state (no cursor in the window, no player, no camera) yields
/// an empty match set for the frame instead of a fault.
pub fn scan_entities(
    finder: Res<FinderTool>,
    state: Res<FinderState>,
    mut match_set: ResMut<MatchSet>,
    tracked: Query<(&EntityPath, &GlobalTransform)>,
    players: Query<&GlobalTransform, With<Player>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if !state.enabled {
        clear_matches(&mut match_set);
        return;
    }

    let Ok(window) = windows.single() else {
        clear_matches(&mut match_set);
        return;
    };
    let Ok(player_transform) = players.single() else {
        clear_matches(&mut match_set);
        return;
    };
    let Ok((cam_transform, camera)) = cameras.single() else {
        clear_matches(&mut match_set);
        return;
    };

    let cursor = window.cursor_position();
    if finder.settings.mode == SearchMode::NearMouse && cursor.is_none() {
        // Cursor is outside the window, nothing can be near it.
        clear_matches(&mut match_set);
        return;
    }
    let mouse_pos = cursor.unwrap_or_default();
    let player_pos = player_transform.translation();
    let project = |world: Vec3| camera.world_to_viewport(cam_transform, world).ok();

    let mut next = Vec::new();
    for (path, transform) in &tracked {
        if search::accepts(
            &finder.settings,
            &path.0,
            transform.translation(),
            player_pos,
            mouse_pos,
            &project,
        ) {
            next.push(path.0.clone());
        }
    }
    // Stable display order regardless of ECS iteration order.
    next.sort_unstable();

    if match_set.as_ref().paths != next {
        debug!("scan complete, {} match(es)", next.len());
        match_set.paths = next;
    }
}

fn clear_matches(match_set: &mut ResMut<MatchSet>) {
    if !match_set.as_ref().paths.is_empty() {
        match_set.paths.clear();
    }
}
