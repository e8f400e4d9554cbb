use super::super::state::EditMode;
use crate::core::BorderSide;
use crate::shared::TrackOptions;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Track-Lebenszyklus ===
    /// SVG laden und Track mit den aktuellen Optionen generieren
    LoadSvg { path: PathBuf },
    /// Track über derselben Mittellinie neu generieren (Attribute gehen verloren)
    RegenerateTrack {
        track_width: f32,
        segment_length: f32,
    },
    /// Ränder mit neuem Versatz-Verhältnis neu berechnen
    SetBorderOffsetRatio { ratio: f32 },

    // === Editor ===
    /// Bearbeitungsmodus wechseln
    SetEditMode { mode: EditMode },
    /// Standard-Tempolimit setzen
    SetDefaultSpeedLimit { limit: u32 },
    /// Segment auswählen
    SelectSegment { segment_number: u32 },

    // === Segment-Attribute ===
    /// Kurve umschalten
    ToggleCurve { segment_number: u32 },
    /// Segmentbereich als Kurve markieren
    MarkCurveRange {
        start: u32,
        end: u32,
        speed_limit: u32,
    },
    /// Tempolimit einer Kurve setzen
    SetSpeedLimit { segment_number: u32, limit: u32 },
    /// Kerb-Zyklus weiterschalten
    CycleKerb { segment_number: u32 },
    /// Kerb per Randklick setzen
    SetKerbSide {
        segment_number: u32,
        side: BorderSide,
    },
    /// Weiße Linie auf einer Seite umschalten
    ToggleWhiteLine {
        segment_number: u32,
        side: BorderSide,
    },
    /// Nummernseite der Ziel-Kurven-Gruppe wechseln
    ToggleNumberSide { segment_number: u32 },
    /// Outline umschalten
    ToggleOutline { segment_number: u32 },

    // === Struktur ===
    /// Segment auf neue Bogenlänge verschieben
    RepositionSegment { segment_number: u32, distance: f32 },
    /// Segmentgrenze einfügen
    InsertSegment { distance: f32 },
    /// Segment entfernen
    RemoveSegment { segment_number: u32 },

    // === History ===
    /// Undo
    Undo,
    /// Redo
    Redo,

    // === Datei-I/O ===
    /// Track als JSON schreiben
    ExportTrack { path: PathBuf },
    /// Sitzung schreiben
    SaveSession { path: PathBuf },
    /// Sitzung laden
    LoadSession { path: PathBuf },
    /// Optionen übernehmen
    ApplyOptions { options: Box<TrackOptions> },
}
