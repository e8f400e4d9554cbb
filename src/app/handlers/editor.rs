//! Handler für Editor-Zustand (Modus, Auswahl, Standardwerte).

use crate::app::{AppState, EditMode};

/// Wechselt den Bearbeitungsmodus.
pub fn set_mode(state: &mut AppState, mode: EditMode) {
    state.editor.mode = mode;
    state.set_status(format!("Modus: {mode:?}"));
    log::debug!("Bearbeitungsmodus: {:?}", mode);
}

/// Setzt das Tempolimit, mit dem neue Kurven markiert werden.
pub fn set_default_speed_limit(state: &mut AppState, limit: u32) {
    state.editor.default_speed_limit = limit;
    state.set_status(format!("Standard-Tempolimit: {limit}"));
}

/// Wählt ein Segment aus, sofern es im aktuellen Track existiert.
pub fn select_segment(state: &mut AppState, segment_number: u32) {
    let exists = state
        .track
        .as_deref()
        .is_some_and(|track| track.segment(segment_number).is_some());
    if exists {
        state.editor.selected_segment = Some(segment_number);
        state.set_status(format!("Segment {segment_number} ausgewählt"));
    } else {
        state.set_status(format!("Segment {segment_number} existiert nicht"));
        log::debug!("Auswahl ignoriert: Segment {} existiert nicht", segment_number);
    }
}
