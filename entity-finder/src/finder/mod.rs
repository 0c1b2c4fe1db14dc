//! The entity finder tool.
//!
//! Once per frame the finder clears its previous match set, builds a
//! case-insensitive substring pattern from the user's filter text (implicit
//! prefix/suffix wildcards, empty text matches everything), and linearly
//! scans every tracked entity in the scene. Entities passing the text stage
//! go through exactly one of two proximity filters:
//!
//! - **Near-character**: ground-plane distance to the player, vertical axis
//!   ignored, accepted strictly below `threshold x 20` world units.
//! - **Near-mouse**: the entity's world position projected to the viewport,
//!   accepted strictly below `threshold x 20` screen pixels from the cursor.
//!
//! Matches render in an overlay panel with a Copy button per row that places
//! the exact path string on the system clipboard. The clipboard write runs
//! on a dedicated single-use thread and blocks until it completes.

use bevy::prelude::*;

/// Blocking clipboard writes on a dedicated thread.
pub mod clipboard;

/// Scan state, match set, and the per-frame scan system.
pub mod finder_tool;

/// Pure, scene-agnostic search predicates.
pub mod search;

/// Overlay panel: filter field, mode toggle, threshold slider, results list.
pub mod ui;

pub struct FinderPlugin;

impl Plugin for FinderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<finder_tool::FinderTool>()
            .init_resource::<finder_tool::MatchSet>()
            .init_resource::<ui::FinderUiState>()
            .add_systems(Startup, ui::spawn_finder_ui)
            .add_systems(
                Update,
                (
                    ui::text_field_interaction,
                    ui::filter_text_input,
                    ui::mode_toggle_interaction,
                    ui::threshold_slider_interaction,
                    finder_tool::scan_entities,
                    ui::rebuild_results_list,
                    ui::copy_button_interaction,
                    ui::reflect_filter_text,
                    ui::reflect_mode_checkbox,
                    ui::reflect_threshold_slider,
                    ui::reflect_panel_visibility,
                )
                    .chain(),
            );
    }
}
