use crate::app::{AppCommand, AppIntent, AppState, EditMode};
use crate::core::BorderSide;

use super::map_intent_to_commands;

fn state_in_mode(mode: EditMode) -> AppState {
    let mut state = AppState::new();
    state.editor.mode = mode;
    state
}

#[test]
fn segment_click_in_select_mode_only_selects() {
    let state = state_in_mode(EditMode::Select);

    let commands = map_intent_to_commands(&state, AppIntent::SegmentClicked { segment_number: 4 });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SelectSegment { segment_number: 4 }
    ));
}

#[test]
fn segment_click_in_curve_mode_toggles_curve() {
    let state = state_in_mode(EditMode::Curve);

    let commands = map_intent_to_commands(&state, AppIntent::SegmentClicked { segment_number: 2 });

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[1],
        AppCommand::ToggleCurve { segment_number: 2 }
    ));
}

#[test]
fn segment_click_maps_per_mode() {
    let cases = [
        (EditMode::Kerb, "CycleKerb"),
        (EditMode::Number, "ToggleNumberSide"),
        (EditMode::Outline, "ToggleOutline"),
    ];
    for (mode, expected) in cases {
        let state = state_in_mode(mode);
        let commands =
            map_intent_to_commands(&state, AppIntent::SegmentClicked { segment_number: 1 });
        let name = format!("{:?}", commands[1]);
        assert!(name.starts_with(expected), "{mode:?} → {name}");
    }
}

#[test]
fn border_click_in_kerb_mode_sets_kerb_side() {
    let state = state_in_mode(EditMode::Kerb);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::BorderClicked {
            segment_number: 3,
            side: BorderSide::Right,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[1],
        AppCommand::SetKerbSide {
            segment_number: 3,
            side: BorderSide::Right
        }
    ));
}

#[test]
fn border_click_in_white_line_mode_toggles_white_line() {
    let state = state_in_mode(EditMode::WhiteLine);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::BorderClicked {
            segment_number: 5,
            side: BorderSide::Left,
        },
    );

    assert!(matches!(
        commands[1],
        AppCommand::ToggleWhiteLine {
            segment_number: 5,
            side: BorderSide::Left
        }
    ));
}

#[test]
fn border_click_in_curve_mode_acts_like_segment_click() {
    let state = state_in_mode(EditMode::Curve);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::BorderClicked {
            segment_number: 6,
            side: BorderSide::Left,
        },
    );

    assert!(matches!(
        commands[1],
        AppCommand::ToggleCurve { segment_number: 6 }
    ));
}

#[test]
fn undo_redo_map_directly() {
    let state = AppState::new();
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::UndoRequested)[0],
        AppCommand::Undo
    ));
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::RedoRequested)[0],
        AppCommand::Redo
    ));
}
