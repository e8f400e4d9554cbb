use super::super::state::EditMode;
use crate::core::BorderSide;
use crate::shared::TrackOptions;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// SVG-Datei mit Mittellinie gewählt
    SvgFileSelected { path: PathBuf },
    /// Track mit neuer Breite/Segmentlänge neu generieren
    GenerateRequested {
        track_width: f32,
        segment_length: f32,
    },
    /// Randversatz-Regler verändert
    BorderOffsetChanged { ratio: f32 },
    /// Bearbeitungsmodus gewechselt
    EditModeSelected { mode: EditMode },
    /// Standard-Tempolimit für neue Kurven geändert
    DefaultSpeedLimitChanged { limit: u32 },
    /// Klick auf die Fläche eines Segments
    SegmentClicked { segment_number: u32 },
    /// Klick auf den Randbereich eines Segments
    BorderClicked {
        segment_number: u32,
        side: BorderSide,
    },
    /// Bereich von Segmenten als Kurve markieren
    CurveRangeRequested {
        start: u32,
        end: u32,
        speed_limit: u32,
    },
    /// Tempolimit einer Kurve bearbeitet
    SpeedLimitEdited { segment_number: u32, limit: u32 },
    /// Segmentgrenze auf neue Bogenlänge gezogen
    SegmentDragged { segment_number: u32, distance: f32 },
    /// Neue Segmentgrenze einfügen
    SegmentInsertRequested { distance: f32 },
    /// Segment entfernen
    SegmentRemoveRequested { segment_number: u32 },
    /// Letzte Bearbeitung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Bearbeitung wiederholen
    RedoRequested,
    /// Track als JSON exportieren
    ExportRequested { path: PathBuf },
    /// Sitzung speichern
    SaveSessionRequested { path: PathBuf },
    /// Sitzung laden
    LoadSessionRequested { path: PathBuf },
    /// Optionen im Dialog übernommen
    OptionsChanged { options: Box<TrackOptions> },
}
