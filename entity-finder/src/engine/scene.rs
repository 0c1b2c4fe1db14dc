use bevy::prelude::*;

use crate::finder::ui::FinderUiState;

/// The player character entity; proximity in near-character mode is measured
/// against its position.
#[derive(Component)]
pub struct Player;

/// Hierarchical path name of a tracked entity. Entities carrying this
/// component are what the finder scans.
#[derive(Component)]
pub struct EntityPath(pub String);

const PLAYER_SPEED: f32 = 20.0;

// Demo population with path names in the host's hierarchical style.
const TRACKED_ENTITIES: &[(&str, Vec3)] = &[
    ("Metadata/Monsters/Goblin/GoblinWarrior", Vec3::new(12.0, 0.5, 6.0)),
    ("Metadata/Monsters/Goblin/GoblinShaman", Vec3::new(18.0, 0.5, -9.0)),
    ("Metadata/Monsters/Goblin/GoblinScout", Vec3::new(-25.0, 0.5, 14.0)),
    ("Metadata/Monsters/Skeleton/SkeletonArcher", Vec3::new(-8.0, 0.5, -20.0)),
    ("Metadata/Monsters/Skeleton/SkeletonMage", Vec3::new(35.0, 0.5, 22.0)),
    ("Metadata/Monsters/Spider/CaveSpider", Vec3::new(-40.0, 0.5, -5.0)),
    ("Metadata/Chests/GoblinStash", Vec3::new(7.0, 0.5, -15.0)),
    ("Metadata/Chests/AncientUrn", Vec3::new(-18.0, 0.5, 30.0)),
    ("Metadata/NPC/Villager/Blacksmith", Vec3::new(2.0, 0.5, 25.0)),
    ("Metadata/NPC/Villager/Herbalist", Vec3::new(-5.0, 0.5, 8.0)),
    ("Metadata/Props/Barrel", Vec3::new(28.0, 0.5, -28.0)),
    ("Metadata/Props/Wagon", Vec3::new(-33.0, 0.5, -24.0)),
    ("Metadata/Effects/Waypoint", Vec3::new(0.0, 0.5, -35.0)),
    ("Metadata/Terrain/Doodads/MossyRock", Vec3::new(44.0, 0.5, 2.0)),
];

/// Spawn the camera, lighting, ground plane, player, and the tracked
/// entities the finder scans.
pub fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 60.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(120.0, 120.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.18, 0.20, 0.18),
            perceptual_roughness: 1.0,
            ..default()
        })),
    ));

    commands.spawn((
        Player,
        Name::new("Player"),
        Mesh3d(meshes.add(Capsule3d::new(0.5, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.8, 0.2),
            ..default()
        })),
        Transform::from_xyz(0.0, 1.0, 0.0),
    ));

    let marker_mesh = meshes.add(Sphere::new(0.5));
    for (index, (path, position)) in TRACKED_ENTITIES.iter().enumerate() {
        let hue = (index as f32 / TRACKED_ENTITIES.len() as f32) * 330.0;
        commands.spawn((
            EntityPath(path.to_string()),
            Name::new(*path),
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::hsv(hue, 0.7, 0.9),
                ..default()
            })),
            Transform::from_translation(*position),
        ));
    }
}

// Arrow keys move the player on the ground plane.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    ui_state: Res<FinderUiState>,
    time: Res<Time>,
    mut players: Query<&mut Transform, With<Player>>,
) {
    if ui_state.text_focused {
        return;
    }
    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::ArrowUp) {
        direction.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        direction.z += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }
    if direction == Vec3::ZERO {
        return;
    }
    let Ok(mut transform) = players.single_mut() else {
        return;
    };
    transform.translation += direction.normalize() * PLAYER_SPEED * time.delta_secs();
}
