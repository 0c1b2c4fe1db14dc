use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::finder::ui::FinderUiState;

#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub height: f32,
    pub yaw: f32,
    pub last_mouse_pos: Vec2,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            height: 60.0,
            yaw: 0.0,
            last_mouse_pos: Vec2::ZERO,
        }
    }
}

impl ViewportCamera {
    /// Intersect the cursor ray with the flat ground plane at y = 0.
    pub fn mouse_to_ground_plane(
        &self,
        cursor_pos: Vec2,
        camera: &Camera,
        camera_transform: &GlobalTransform,
    ) -> Option<Vec3> {
        let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
        if ray.direction.y.abs() < 0.001 {
            return None;
        }
        let t = -ray.origin.y / ray.direction.y;
        if t > 0.0 {
            Some(ray.origin + ray.direction * t)
        } else {
            None
        }
    }
}

pub fn camera_controller(
    mut camera_query: Query<(&mut Transform, &GlobalTransform, &Camera), With<Camera3d>>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut cursor_moved: EventReader<CursorMoved>,
    keyboard: Res<ButtonInput<KeyCode>>,
    ui_state: Res<FinderUiState>,
    time: Res<Time>,
) {
    let Ok((mut camera_transform, global_transform, camera)) = camera_query.single_mut() else {
        return;
    };

    for cursor in cursor_moved.read() {
        viewport_camera.last_mouse_pos = cursor.position;
    }

    // Scroll wheel zoom.
    for scroll in scroll_events.read() {
        let zoom_factor = if scroll.y > 0.0 { 0.9 } else { 1.1 };
        viewport_camera.height = (viewport_camera.height * zoom_factor).clamp(5.0, 500.0);
    }

    let total_motion: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    // Middle-drag pans the focus point on the ground plane.
    if mouse_button.pressed(MouseButton::Middle) && total_motion != Vec2::ZERO {
        let sensitivity = viewport_camera.height * 0.001;
        let yaw_rot = Quat::from_rotation_y(viewport_camera.yaw);
        let right = yaw_rot * Vec3::X;
        let forward = yaw_rot * Vec3::Z;
        viewport_camera.focus_point += right * -total_motion.x * sensitivity;
        viewport_camera.focus_point += forward * -total_motion.y * sensitivity;
    }

    // A/D rotate the view, unless the finder's text field owns the keyboard.
    if !ui_state.text_focused {
        let mut rotation_input = 0.0;
        if keyboard.pressed(KeyCode::KeyA) {
            rotation_input -= 1.0;
        }
        if keyboard.pressed(KeyCode::KeyD) {
            rotation_input += 1.0;
        }
        if rotation_input != 0.0 {
            viewport_camera.yaw += rotation_input * time.delta_secs();
        }
    }

    // Right-drag eases the focus toward the point under the cursor.
    if mouse_button.pressed(MouseButton::Right) {
        if let Some(pivot_point) = viewport_camera.mouse_to_ground_plane(
            viewport_camera.last_mouse_pos,
            camera,
            global_transform,
        ) {
            let movement_speed = 2.0 * time.delta_secs();
            viewport_camera.focus_point =
                viewport_camera.focus_point.lerp(pivot_point, movement_speed);
        }
    }

    let yaw_rot = Quat::from_rotation_y(viewport_camera.yaw);
    let horizontal_offset = yaw_rot * Vec3::new(0.0, 0.0, viewport_camera.height * 0.5);
    let target_pos = viewport_camera.focus_point
        + Vec3::new(
            horizontal_offset.x,
            viewport_camera.height,
            horizontal_offset.z,
        );
    let target_transform =
        Transform::from_translation(target_pos).looking_at(viewport_camera.focus_point, Vec3::Y);

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_transform.translation, lerp_speed);
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_transform.rotation, lerp_speed);
}
