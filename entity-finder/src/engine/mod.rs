/// Orbiting viewport camera with flat ground-plane cursor raycasts.
pub mod camera;

/// Demo world: ground plane, lighting, player character, tracked entities.
pub mod scene;

/// Persisted finder settings (the single enabled toggle).
pub mod settings;
