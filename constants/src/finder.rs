/// Scale factor converting a user-facing "distance unit" slider value into
/// the units used by the underlying screen and world coordinates.
pub const DISTANCE_UNIT_SCALE: f32 = 20.0;

/// Slider range for the near-mouse threshold, in distance units.
pub const MOUSE_THRESHOLD_RANGE: (f32, f32) = (0.5, 25.0);

/// Slider range for the near-character threshold, in distance units.
pub const CHARACTER_THRESHOLD_RANGE: (f32, f32) = (5.0, 100.0);

pub const DEFAULT_MOUSE_THRESHOLD: f32 = 2.5;
pub const DEFAULT_CHARACTER_THRESHOLD: f32 = 50.0;

/// Maximum length of the filter text accepted from keyboard input.
pub const MAX_FILTER_TEXT_LEN: usize = 256;

pub const FINDER_PANEL_WIDTH: f32 = 320.0;
pub const FINDER_RESULT_ROW_HEIGHT: f32 = 26.0;
