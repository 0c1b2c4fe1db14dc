//! End-to-end filtering over a fake scene snapshot: the search predicates
//! driven with injected positions and a stub projection, no running app.

use bevy::math::{Vec2, Vec3};
use entity_finder::finder::search::{SearchMode, SearchSettings, accepts, matches_path};

struct Snapshot {
    entities: Vec<(&'static str, Vec3)>,
    player: Vec3,
    mouse: Vec2,
}

impl Snapshot {
    fn scan(&self, settings: &SearchSettings, project: impl Fn(Vec3) -> Option<Vec2>) -> Vec<&str> {
        self.entities
            .iter()
            .filter(|(path, position)| {
                accepts(settings, path, *position, self.player, self.mouse, &project)
            })
            .map(|(path, _)| *path)
            .collect()
    }
}

fn goblin_snapshot() -> Snapshot {
    Snapshot {
        entities: vec![
            ("Metadata/Monster/Goblin", Vec3::new(10.0, 0.0, 0.0)),
            ("Metadata/Chest/Goblin", Vec3::new(0.0, 0.0, 2000.0)),
            ("Metadata/Monster/Skeleton", Vec3::new(5.0, 0.0, 5.0)),
        ],
        player: Vec3::ZERO,
        mouse: Vec2::new(400.0, 300.0),
    }
}

// Screen position is just the XZ world position; good enough to steer
// distances in the tests.
fn flat_projection(world: Vec3) -> Option<Vec2> {
    Some(Vec2::new(world.x, world.z))
}

#[test]
fn text_stage_matches_goblin_paths() {
    let snapshot = goblin_snapshot();
    let hits: Vec<_> = snapshot
        .entities
        .iter()
        .filter(|(path, _)| matches_path(path, "gob"))
        .map(|(path, _)| *path)
        .collect();
    assert_eq!(hits, vec!["Metadata/Monster/Goblin", "Metadata/Chest/Goblin"]);

    let all: Vec<_> = snapshot
        .entities
        .iter()
        .filter(|(path, _)| matches_path(path, ""))
        .collect();
    assert_eq!(all.len(), 3);
}

#[test]
fn near_character_mode_drops_distant_goblin() {
    let snapshot = goblin_snapshot();
    let settings = SearchSettings {
        filter_text: "gob".into(),
        mode: SearchMode::NearCharacter,
        character_threshold: 5.0, // cutoff at 100 world units
        ..Default::default()
    };
    // The chest goblin sits 2000 units away; only the monster survives.
    let hits = snapshot.scan(&settings, flat_projection);
    assert_eq!(hits, vec!["Metadata/Monster/Goblin"]);
}

#[test]
fn near_mouse_mode_uses_projected_distance() {
    let mut snapshot = goblin_snapshot();
    snapshot.mouse = Vec2::new(10.0, 0.0); // right on the monster goblin
    let settings = SearchSettings {
        filter_text: "gob".into(),
        mode: SearchMode::NearMouse,
        mouse_threshold: 0.5, // cutoff at 10 screen pixels
        ..Default::default()
    };
    let hits = snapshot.scan(&settings, flat_projection);
    assert_eq!(hits, vec!["Metadata/Monster/Goblin"]);
}

#[test]
fn near_mouse_mode_rejects_unprojectable_entities() {
    let snapshot = goblin_snapshot();
    let settings = SearchSettings {
        filter_text: "".into(),
        mode: SearchMode::NearMouse,
        mouse_threshold: 25.0,
        ..Default::default()
    };
    let hits = snapshot.scan(&settings, |_| None);
    assert!(hits.is_empty());
}

#[test]
fn threshold_boundary_is_exclusive_end_to_end() {
    let snapshot = Snapshot {
        entities: vec![("Metadata/Props/Barrel", Vec3::new(100.0, 0.0, 0.0))],
        player: Vec3::ZERO,
        mouse: Vec2::ZERO,
    };
    let mut settings = SearchSettings {
        mode: SearchMode::NearCharacter,
        character_threshold: 5.0, // cutoff exactly at the barrel
        ..Default::default()
    };
    assert!(snapshot.scan(&settings, flat_projection).is_empty());

    settings.character_threshold = 5.1;
    assert_eq!(
        snapshot.scan(&settings, flat_projection),
        vec!["Metadata/Props/Barrel"]
    );
}
