//! Handler für Segment-Bearbeitung (Attribute und Struktur).
//!
//! Jede Bearbeitung arbeitet auf einer Kopie des Tracks. Erst wenn sie gelingt,
//! wird ein Undo-Snapshot aufgenommen und die Kopie installiert; bei Fehlern
//! bleibt der State unverändert und der Fehler landet in der Statuszeile.

use crate::app::AppState;
use crate::core::{BorderSide, KerbSide, TrackError, TrackModel};
use std::sync::Arc;

/// Führt `edit` auf einer Kopie des aktuellen Tracks aus und installiert sie bei Erfolg.
///
/// Gibt das Ergebnis der Bearbeitung zurück, `None` bei fehlendem Track oder Fehler.
fn apply_edit<T>(
    state: &mut AppState,
    action: &str,
    edit: impl FnOnce(&mut TrackModel) -> Result<T, TrackError>,
) -> Option<T> {
    let Some(current) = state.track.as_deref() else {
        log::debug!("{}: kein Track geladen", action);
        return None;
    };

    let mut track = current.clone();
    match edit(&mut track) {
        Ok(result) => {
            state.record_undo_snapshot();
            state.track = Some(Arc::new(track));
            Some(result)
        }
        Err(err) => {
            log::warn!("{} fehlgeschlagen: {}", action, err);
            state.set_status(format!("{action} fehlgeschlagen: {err}"));
            None
        }
    }
}

/// Schaltet die Kurven-Markierung eines Segments um.
pub fn toggle_curve(state: &mut AppState, segment_number: u32) {
    let limit = state.editor.default_speed_limit;
    if let Some(is_curve) = apply_edit(state, "Kurve umschalten", |track| {
        track.toggle_curve(segment_number, limit)
    }) {
        let text = if is_curve { "ist jetzt Kurve" } else { "ist keine Kurve mehr" };
        state.set_status(format!("Segment {segment_number} {text}"));
    }
}

/// Markiert einen Segmentbereich als Kurve.
pub fn mark_curve_range(state: &mut AppState, start: u32, end: u32, speed_limit: u32) {
    if let Some(count) = apply_edit(state, "Kurvenbereich markieren", |track| {
        track.mark_curve_range(start, end, speed_limit)
    }) {
        state.set_status(format!("{count} Segmente als Kurve markiert"));
    }
}

/// Setzt das Tempolimit einer Kurve.
pub fn set_speed_limit(state: &mut AppState, segment_number: u32, limit: u32) {
    if apply_edit(state, "Tempolimit setzen", |track| {
        track.set_speed_limit(segment_number, limit)
    })
    .is_some()
    {
        state.set_status(format!("Segment {segment_number}: Tempolimit {limit}"));
    }
}

/// Schaltet den Kerb-Zyklus eines Segments weiter.
pub fn cycle_kerb(state: &mut AppState, segment_number: u32) {
    if let Some(kerb) = apply_edit(state, "Kerb wechseln", |track| {
        track.cycle_kerb(segment_number)
    }) {
        set_kerb_status(state, segment_number, kerb);
    }
}

/// Setzt den Kerb über einen Klick auf eine Randseite.
pub fn set_kerb_side(state: &mut AppState, segment_number: u32, side: BorderSide) {
    if let Some(kerb) = apply_edit(state, "Kerb setzen", |track| {
        track.set_kerb_side(segment_number, side)
    }) {
        set_kerb_status(state, segment_number, kerb);
    }
}

fn set_kerb_status(state: &mut AppState, segment_number: u32, kerb: Option<KerbSide>) {
    let text = match kerb {
        None => "kein Kerb".to_string(),
        Some(side) => format!("Kerb {side:?}"),
    };
    state.set_status(format!("Segment {segment_number}: {text}"));
}

/// Schaltet die weiße Linie auf einer Randseite um.
pub fn toggle_white_line(state: &mut AppState, segment_number: u32, side: BorderSide) {
    if let Some(line) = apply_edit(state, "Weiße Linie umschalten", |track| {
        track.toggle_white_line(segment_number, side)
    }) {
        let text = match line {
            None => "keine weiße Linie".to_string(),
            Some(side) => format!("weiße Linie {side:?}"),
        };
        state.set_status(format!("Segment {segment_number}: {text}"));
    }
}

/// Wechselt die Nummernseite der Kurven-Gruppe, zu der das Segment führt.
pub fn toggle_number_side(state: &mut AppState, segment_number: u32) {
    if let Some(side) = apply_edit(state, "Nummernseite wechseln", |track| {
        track.toggle_number_side(segment_number)
    }) {
        state.set_status(format!("Nummernseite: {side:?}"));
    }
}

/// Schaltet die Outline eines Segments um.
pub fn toggle_outline(state: &mut AppState, segment_number: u32) {
    if let Some(outline) = apply_edit(state, "Outline umschalten", |track| {
        track.toggle_outline(segment_number)
    }) {
        let text = if outline { "an" } else { "aus" };
        state.set_status(format!("Segment {segment_number}: Outline {text}"));
    }
}

/// Verschiebt ein Segment auf eine neue Bogenlänge; die Auswahl folgt dem Segment.
pub fn reposition_segment(state: &mut AppState, segment_number: u32, distance: f32) {
    if let Some(new_number) = apply_edit(state, "Segment verschieben", |track| {
        track.reposition_segment(segment_number, distance)
    }) {
        state.editor.selected_segment = Some(new_number);
        state.set_status(format!(
            "Segment {segment_number} verschoben, neue Nummer {new_number}"
        ));
    }
}

/// Fügt eine Segmentgrenze bei `distance` ein und wählt das neue Segment aus.
pub fn insert_segment(state: &mut AppState, distance: f32) {
    if let Some(new_number) = apply_edit(state, "Segment einfügen", |track| {
        track.insert_segment_at(distance)
    }) {
        state.editor.selected_segment = Some(new_number);
        state.set_status(format!("Segment {new_number} eingefügt"));
    }
}

/// Entfernt ein Segment; die Auswahl wird aufgehoben.
pub fn remove_segment(state: &mut AppState, segment_number: u32) {
    if apply_edit(state, "Segment entfernen", |track| {
        track.remove_segment(segment_number)
    })
    .is_some()
    {
        state.editor.selected_segment = None;
        state.set_status(format!("Segment {segment_number} entfernt"));
    }
}
