use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::finder::{FINDER_PANEL_WIDTH, FINDER_RESULT_ROW_HEIGHT, MAX_FILTER_TEXT_LEN};

use crate::engine::settings::FinderState;

use super::clipboard;
use super::finder_tool::{FinderTool, MatchSet};
use super::search::SearchMode;

// Resources
#[derive(Resource, Default)]
pub struct FinderUiState {
    /// While true, keyboard input feeds the filter text field.
    pub text_focused: bool,
}

// Components
#[derive(Component)]
pub struct FinderPanelRoot;
#[derive(Component)]
pub struct FilterTextField;
#[derive(Component)]
pub struct FilterTextLabel;
#[derive(Component)]
pub struct ModeToggleButton;
#[derive(Component)]
pub struct ModeCheckLabel;
#[derive(Component)]
pub struct ThresholdSlider;
#[derive(Component)]
pub struct ThresholdFill;
#[derive(Component)]
pub struct ThresholdTitleLabel;
#[derive(Component)]
pub struct ThresholdValueLabel;
#[derive(Component)]
pub struct ResultsContainer;
#[derive(Component)]
pub struct ResultRow;

/// Copy button carrying the exact path string it places on the clipboard.
#[derive(Component)]
pub struct CopyButton {
    pub path: String,
}

// Spawns the finder overlay panel: filter field, mode toggle, threshold
// slider, and the results list container.
pub fn spawn_finder_ui(mut commands: Commands) {
    commands
        .spawn((
            FinderPanelRoot,
            Name::new("FinderPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(FINDER_PANEL_WIDTH),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("Header"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(12.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        Text::new("Entity Finder"),
                        TextFont { font_size: 18.0, ..default() },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                    header.spawn((
                        Text::new("[F2] on/off"),
                        TextFont { font_size: 12.0, ..default() },
                        TextColor(Color::srgb(0.6, 0.62, 0.66)),
                    ));
                });

            parent
                .spawn((
                    Name::new("Body"),
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        row_gap: Val::Px(8.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    body.spawn((
                        Text::new("Enter search text:"),
                        TextFont { font_size: 14.0, ..default() },
                        TextColor(Color::srgb(0.85, 0.87, 0.90)),
                    ));

                    body.spawn((
                        FilterTextField,
                        Button,
                        Name::new("FilterTextField"),
                        BackgroundColor(Color::srgb(0.16, 0.17, 0.20)),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(30.0),
                            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|field| {
                        field.spawn((
                            FilterTextLabel,
                            Text::new(""),
                            TextFont { font_size: 14.0, ..default() },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                    });

                    body.spawn((
                        ModeToggleButton,
                        Button,
                        Name::new("ModeToggle"),
                        BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(28.0),
                            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            column_gap: Val::Px(8.0),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|row| {
                        row.spawn((
                            ModeCheckLabel,
                            Text::new("[ ]"),
                            TextFont { font_size: 14.0, ..default() },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                        row.spawn((
                            Text::new("Search Near Mouse"),
                            TextFont { font_size: 14.0, ..default() },
                            TextColor(Color::srgb(0.85, 0.87, 0.90)),
                        ));
                    });

                    body.spawn((
                        ThresholdTitleLabel,
                        Text::new("Distance from Character:"),
                        TextFont { font_size: 14.0, ..default() },
                        TextColor(Color::srgb(0.85, 0.87, 0.90)),
                    ));

                    body.spawn((
                        ThresholdSlider,
                        Button,
                        Name::new("ThresholdSlider"),
                        BackgroundColor(Color::srgb(0.16, 0.17, 0.20)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(18.0),
                            display: Display::Flex,
                            align_items: AlignItems::Stretch,
                            overflow: Overflow::clip(),
                            ..default()
                        },
                    ))
                    .with_children(|track| {
                        track.spawn((
                            ThresholdFill,
                            BackgroundColor(Color::srgb(0.30, 0.44, 0.68)),
                            Node {
                                width: Val::Percent(50.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                        ));
                    });

                    body.spawn((
                        ThresholdValueLabel,
                        Text::new(""),
                        TextFont { font_size: 13.0, ..default() },
                        TextColor(Color::srgb(0.6, 0.62, 0.66)),
                    ));

                    body.spawn((
                        Text::new("Search Results:"),
                        TextFont { font_size: 14.0, ..default() },
                        TextColor(Color::srgb(0.85, 0.87, 0.90)),
                    ));

                    body.spawn((
                        ResultsContainer,
                        Name::new("Results"),
                        Node {
                            width: Val::Percent(100.0),
                            display: Display::Flex,
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(4.0),
                            flex_grow: 1.0,
                            overflow: Overflow::clip_y(),
                            ..default()
                        },
                    ));
                });
        });
}

// Clicking the text field grabs keyboard focus for filter editing.
pub fn text_field_interaction(
    mut q: Query<&Interaction, (Changed<Interaction>, With<Button>, With<FilterTextField>)>,
    mut ui_state: ResMut<FinderUiState>,
) {
    for interaction in &mut q {
        if *interaction == Interaction::Pressed {
            ui_state.text_focused = true;
        }
    }
}

// Feeds keyboard input into the filter text while the field is focused.
// Escape drops focus, Backspace deletes.
pub fn filter_text_input(
    mut ui_state: ResMut<FinderUiState>,
    mut finder: ResMut<FinderTool>,
    mut events: EventReader<KeyboardInput>,
) {
    if !ui_state.text_focused {
        events.clear();
        return;
    }
    for event in events.read() {
        if !event.state.is_pressed() {
            continue;
        }
        match &event.logical_key {
            Key::Character(input) => {
                for ch in input.chars().filter(|c| !c.is_control()) {
                    push_filter_char(&mut finder.settings.filter_text, ch);
                }
            }
            Key::Space => {
                push_filter_char(&mut finder.settings.filter_text, ' ');
            }
            Key::Backspace => {
                finder.settings.filter_text.pop();
            }
            Key::Escape => {
                ui_state.text_focused = false;
            }
            _ => {}
        }
    }
}

// The cap is in bytes; a character is rejected outright if its UTF-8 length
// would overshoot it.
fn push_filter_char(filter_text: &mut String, ch: char) {
    if filter_text.len() + ch.len_utf8() <= MAX_FILTER_TEXT_LEN {
        filter_text.push(ch);
    }
}

// "Search Near Mouse" checkbox toggles the proximity mode.
pub fn mode_toggle_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<ModeToggleButton>),
    >,
    mut finder: ResMut<FinderTool>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                finder.settings.mode = match finder.settings.mode {
                    SearchMode::NearCharacter => SearchMode::NearMouse,
                    SearchMode::NearMouse => SearchMode::NearCharacter,
                };
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Click or drag on the slider track sets the active threshold from the
// cursor's horizontal position within the track.
pub fn threshold_slider_interaction(
    mut finder: ResMut<FinderTool>,
    windows: Query<&Window, With<PrimaryWindow>>,
    track: Query<(&Interaction, &ComputedNode, &GlobalTransform), With<ThresholdSlider>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    for (interaction, node, transform) in &track {
        if *interaction != Interaction::Pressed {
            continue;
        }
        // ComputedNode reports physical pixels, cursor position logical ones.
        let scale = node.inverse_scale_factor();
        let size = node.size() * scale;
        if size.x <= 0.0 {
            continue;
        }
        let center = transform.translation().truncate() * scale;
        let left = center.x - size.x * 0.5;
        let fraction = ((cursor.x - left) / size.x).clamp(0.0, 1.0);
        let (min, max) = finder.settings.threshold_range();
        let value = min + fraction * (max - min);
        match finder.settings.mode {
            SearchMode::NearMouse => finder.settings.mouse_threshold = value,
            SearchMode::NearCharacter => finder.settings.character_threshold = value,
        }
    }
}

// Copy buttons place the row's exact path string on the clipboard.
pub fn copy_button_interaction(
    mut q: Query<
        (&Interaction, &CopyButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, copy, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                clipboard::set_clipboard_text(&copy.path);
                info!("copied to clipboard: {}", copy.path);
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Mirrors the filter text into the field label, with a trailing caret while
// the field has focus.
pub fn reflect_filter_text(
    finder: Res<FinderTool>,
    ui_state: Res<FinderUiState>,
    mut labels: Query<&mut Text, With<FilterTextLabel>>,
    mut fields: Query<&mut BackgroundColor, With<FilterTextField>>,
) {
    let label = if ui_state.text_focused {
        format!("{}_", finder.settings.filter_text)
    } else {
        finder.settings.filter_text.clone()
    };
    if let Ok(mut text) = labels.single_mut() {
        if text.0 != label {
            *text = Text::new(label);
        }
    }
    if ui_state.is_changed() {
        if let Ok(mut bg) = fields.single_mut() {
            *bg = BackgroundColor(if ui_state.text_focused {
                Color::srgb(0.20, 0.22, 0.27)
            } else {
                Color::srgb(0.16, 0.17, 0.20)
            });
        }
    }
}

pub fn reflect_mode_checkbox(
    finder: Res<FinderTool>,
    mut checks: Query<&mut Text, With<ModeCheckLabel>>,
) {
    if !finder.is_changed() {
        return;
    }
    let mark = match finder.settings.mode {
        SearchMode::NearMouse => "[x]",
        SearchMode::NearCharacter => "[ ]",
    };
    for mut text in &mut checks {
        if text.0 != mark {
            *text = Text::new(mark);
        }
    }
}

// Slider title, fill bar, and value label track whichever threshold the
// current mode uses.
pub fn reflect_threshold_slider(
    finder: Res<FinderTool>,
    mut titles: Query<&mut Text, With<ThresholdTitleLabel>>,
    mut values: Query<&mut Text, (With<ThresholdValueLabel>, Without<ThresholdTitleLabel>)>,
    mut fills: Query<&mut Node, With<ThresholdFill>>,
) {
    if !finder.is_changed() {
        return;
    }
    let title = match finder.settings.mode {
        SearchMode::NearMouse => "Distance from Mouse Cursor:",
        SearchMode::NearCharacter => "Distance from Character:",
    };
    if let Ok(mut text) = titles.single_mut() {
        if text.0 != title {
            *text = Text::new(title);
        }
    }

    let value = finder.settings.active_threshold();
    let label = format!("{value:.1} distance");
    if let Ok(mut text) = values.single_mut() {
        if text.0 != label {
            *text = Text::new(label);
        }
    }

    let (min, max) = finder.settings.threshold_range();
    let fraction = ((value - min) / (max - min)).clamp(0.0, 1.0);
    if let Ok(mut node) = fills.single_mut() {
        node.width = Val::Percent(fraction * 100.0);
    }
}

// Whole panel hides while the tool is disabled.
pub fn reflect_panel_visibility(
    state: Res<FinderState>,
    mut roots: Query<&mut Node, With<FinderPanelRoot>>,
) {
    if !state.is_changed() {
        return;
    }
    if let Ok(mut node) = roots.single_mut() {
        node.display = if state.enabled { Display::Flex } else { Display::None };
    }
}

// Rebuilds the result rows whenever the match set changes.
pub fn rebuild_results_list(
    mut commands: Commands,
    match_set: Res<MatchSet>,
    containers: Query<Entity, With<ResultsContainer>>,
    existing_rows: Query<Entity, With<ResultRow>>,
) {
    if !match_set.is_changed() {
        return;
    }
    let Ok(container) = containers.single() else {
        return;
    };
    for row in &existing_rows {
        commands.entity(row).despawn();
    }

    commands.entity(container).with_children(|list| {
        if match_set.paths.is_empty() {
            list.spawn((
                ResultRow,
                Text::new("No matches found."),
                TextFont { font_size: 13.0, ..default() },
                TextColor(Color::srgb(0.6, 0.62, 0.66)),
            ));
            return;
        }
        for path in &match_set.paths {
            list.spawn((
                ResultRow,
                Node {
                    width: Val::Percent(100.0),
                    min_height: Val::Px(FINDER_RESULT_ROW_HEIGHT),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(6.0),
                    ..default()
                },
            ))
            .with_children(|row| {
                row.spawn((
                    CopyButton { path: path.clone() },
                    Button,
                    BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("Copy"),
                        TextFont { font_size: 12.0, ..default() },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });
                row.spawn((
                    Text::new(path.clone()),
                    TextFont { font_size: 13.0, ..default() },
                    TextColor(Color::srgb(0.85, 0.87, 0.90)),
                ));
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_length_cap_is_exact_in_bytes() {
        let mut text = "a".repeat(MAX_FILTER_TEXT_LEN - 1);
        // A two-byte character at one byte below the cap would overshoot.
        push_filter_char(&mut text, 'é');
        assert_eq!(text.len(), MAX_FILTER_TEXT_LEN - 1);
        // A one-byte character still fits.
        push_filter_char(&mut text, 'b');
        assert_eq!(text.len(), MAX_FILTER_TEXT_LEN);
        // At the cap, nothing fits.
        push_filter_char(&mut text, 'c');
        assert_eq!(text.len(), MAX_FILTER_TEXT_LEN);
    }
}
