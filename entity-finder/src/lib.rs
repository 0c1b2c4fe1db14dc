//! Entity finder overlay for a 3D scene.
//!
//! Scans the live set of tracked entities every frame, filters them by
//! hierarchical path name and by proximity to the player character or the
//! mouse cursor, and renders the matches in an overlay panel with a
//! copy-to-clipboard action per result.

/// Scene scaffolding: viewport camera, demo world, and persisted settings.
pub mod engine;

/// The finder tool: per-frame scan, search predicates, overlay UI, clipboard.
pub mod finder;
