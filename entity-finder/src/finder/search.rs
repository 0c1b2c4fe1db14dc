use bevy::math::{Vec2, Vec3};
use constants::finder::{
    CHARACTER_THRESHOLD_RANGE, DEFAULT_CHARACTER_THRESHOLD, DEFAULT_MOUSE_THRESHOLD,
    DISTANCE_UNIT_SCALE, MOUSE_THRESHOLD_RANGE,
};

/// Which proximity filter applies to entities that pass the text stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Ground-plane distance between the entity and the player character.
    #[default]
    NearCharacter,
    /// Screen-space distance between the projected entity and the cursor.
    NearMouse,
}

/// Session-only search state, mutated by UI input and read by the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub filter_text: String,
    pub mode: SearchMode,
    /// Near-mouse threshold in distance units.
    pub mouse_threshold: f32,
    /// Near-character threshold in distance units.
    pub character_threshold: f32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            mode: SearchMode::default(),
            mouse_threshold: DEFAULT_MOUSE_THRESHOLD,
            character_threshold: DEFAULT_CHARACTER_THRESHOLD,
        }
    }
}

impl SearchSettings {
    /// Threshold in effect for the current mode, in distance units.
    pub fn active_threshold(&self) -> f32 {
        match self.mode {
            SearchMode::NearCharacter => self.character_threshold,
            SearchMode::NearMouse => self.mouse_threshold,
        }
    }

    /// Slider range for the current mode, in distance units.
    pub fn threshold_range(&self) -> (f32, f32) {
        match self.mode {
            SearchMode::NearCharacter => CHARACTER_THRESHOLD_RANGE,
            SearchMode::NearMouse => MOUSE_THRESHOLD_RANGE,
        }
    }
}

/// Case-insensitive substring match with implicit prefix/suffix wildcards.
///
/// A blank filter matches every path. Otherwise only the `*` markers are
/// trimmed before matching; interior and padding whitespace stay part of
/// the needle. This is containment only, not a glob.
pub fn matches_path(path: &str, filter: &str) -> bool {
    if filter.trim().is_empty() {
        return true;
    }
    let needle = filter.trim_matches('*');
    path.to_lowercase().contains(&needle.to_lowercase())
}

fn ground_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x, a.z).distance(Vec2::new(b.x, b.z))
}

/// Accept entities strictly closer to the player than `threshold` distance
/// units on the ground plane (the vertical axis is ignored).
pub fn within_character_range(entity_pos: Vec3, player_pos: Vec3, threshold: f32) -> bool {
    ground_distance(entity_pos, player_pos) < threshold * DISTANCE_UNIT_SCALE
}

/// Accept entities whose projected position is strictly closer to the cursor
/// than `threshold` distance units in screen pixels.
pub fn within_mouse_range(screen_pos: Vec2, mouse_pos: Vec2, threshold: f32) -> bool {
    screen_pos.distance(mouse_pos) < threshold * DISTANCE_UNIT_SCALE
}

/// Full per-entity predicate: text stage first, then exactly one proximity
/// stage selected by the mode.
///
/// `project` is the injected world-to-screen capability; in near-mouse mode
/// an entity whose position does not project (behind the camera, off the
/// viewport) is rejected.
pub fn accepts(
    settings: &SearchSettings,
    path: &str,
    position: Vec3,
    player_pos: Vec3,
    mouse_pos: Vec2,
    project: impl Fn(Vec3) -> Option<Vec2>,
) -> bool {
    if !matches_path(path, &settings.filter_text) {
        return false;
    }
    match settings.mode {
        SearchMode::NearCharacter => {
            within_character_range(position, player_pos, settings.character_threshold)
        }
        SearchMode::NearMouse => match project(position) {
            Some(screen_pos) => {
                within_mouse_range(screen_pos, mouse_pos, settings.mouse_threshold)
            }
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches_path("Metadata/Monster/Goblin", ""));
        assert!(matches_path("Metadata/Monster/Goblin", "   "));
        assert!(matches_path("Metadata/Monster/Goblin", "**"));
    }

    #[test]
    fn matching_is_case_insensitive_containment() {
        assert!(matches_path("Metadata/Monster/Goblin", "GOB"));
        assert!(matches_path("Metadata/Monster/Goblin", "monster/gob"));
        assert!(!matches_path("Metadata/Monster/Goblin", "skeleton"));
    }

    #[test]
    fn whitespace_in_filter_is_significant() {
        // A padded filter keeps its spaces; it is not silently trimmed.
        assert!(!matches_path("Metadata/Monster/Goblin", " gob "));
        assert!(matches_path("Metadata/Signs/old gob stone", " gob "));
        // Whitespace-only filters still match everything.
        assert!(matches_path("Metadata/Monster/Goblin", "  "));
    }

    #[test]
    fn wildcard_markers_are_stripped_not_interpreted() {
        assert!(matches_path("Metadata/Monster/Goblin", "*gob*"));
        // A `*` in the middle is part of the needle, not a glob.
        assert!(!matches_path("Metadata/Monster/Goblin", "mon*gob"));
    }

    #[test]
    fn goblin_paths_pass_text_stage() {
        let paths = [
            "Metadata/Monster/Goblin",
            "Metadata/Chest/Goblin",
            "Metadata/Monster/Skeleton",
        ];
        let hits: Vec<_> = paths.iter().filter(|p| matches_path(p, "gob")).collect();
        assert_eq!(
            hits,
            ["Metadata/Monster/Goblin", "Metadata/Chest/Goblin"]
                .iter()
                .collect::<Vec<_>>()
        );
        assert_eq!(paths.iter().filter(|p| matches_path(p, "")).count(), 3);
    }

    #[test]
    fn character_range_ignores_vertical_axis() {
        let player = Vec3::new(0.0, 0.0, 0.0);
        // 100 units straight up is still at ground distance zero.
        assert!(within_character_range(
            Vec3::new(0.0, 100.0, 0.0),
            player,
            5.0
        ));
        assert!(!within_character_range(
            Vec3::new(101.0, 0.0, 0.0),
            player,
            5.0
        ));
    }

    #[test]
    fn boundary_distance_is_rejected() {
        // threshold 5.0 -> cutoff exactly 100.0; strict less-than.
        let player = Vec3::ZERO;
        assert!(!within_character_range(
            Vec3::new(100.0, 0.0, 0.0),
            player,
            5.0
        ));
        assert!(within_character_range(
            Vec3::new(99.9, 0.0, 0.0),
            player,
            5.0
        ));

        let mouse = Vec2::ZERO;
        assert!(!within_mouse_range(Vec2::new(50.0, 0.0), mouse, 2.5));
        assert!(within_mouse_range(Vec2::new(49.9, 0.0), mouse, 2.5));
    }

    #[test]
    fn mode_switch_changes_only_proximity_stage() {
        let mut settings = SearchSettings {
            filter_text: "gob".into(),
            ..Default::default()
        };
        let position = Vec3::new(10.0, 0.0, 0.0);
        let player = Vec3::ZERO;
        let mouse = Vec2::new(400.0, 300.0);
        // Projection lands far from the cursor.
        let project = |_: Vec3| Some(Vec2::ZERO);

        assert!(accepts(
            &settings,
            "Metadata/Monster/Goblin",
            position,
            player,
            mouse,
            project
        ));

        settings.mode = SearchMode::NearMouse;
        assert!(!accepts(
            &settings,
            "Metadata/Monster/Goblin",
            position,
            player,
            mouse,
            project
        ));
        // Text stage result is unaffected by the mode.
        assert!(!accepts(
            &settings,
            "Metadata/Monster/Skeleton",
            position,
            player,
            mouse,
            project
        ));
    }

    #[test]
    fn unprojectable_entity_is_rejected_in_mouse_mode() {
        let settings = SearchSettings {
            mode: SearchMode::NearMouse,
            ..Default::default()
        };
        assert!(!accepts(
            &settings,
            "Metadata/Monster/Goblin",
            Vec3::ZERO,
            Vec3::ZERO,
            Vec2::ZERO,
            |_| None
        ));
    }
}
