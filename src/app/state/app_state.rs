use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::TrackModel;
use crate::shared::TrackOptions;
use std::path::PathBuf;
use std::sync::Arc;

use super::EditorState;

/// Maximale Anzahl an Undo-Schritten.
const HISTORY_DEPTH: usize = 200;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Track-Modell (None = noch nichts generiert)
    pub track: Option<Arc<TrackModel>>,
    /// SVG-Datei, aus der die Mittellinie stammt
    pub source_path: Option<PathBuf>,
    /// Editor-State (Modus, Auswahl)
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Generierung, Darstellung)
    pub options: TrackOptions,
    /// Zieldatei für übernommene Optionen
    pub config_path: PathBuf,
    /// Statusnachricht des zuletzt verarbeiteten Commands
    pub status: Option<String>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(TrackOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen
    pub fn with_options(options: TrackOptions) -> Self {
        let mut editor = EditorState::new();
        editor.default_speed_limit = options.default_speed_limit;
        Self {
            track: None,
            source_path: None,
            editor,
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options,
            config_path: TrackOptions::config_path(),
            status: None,
        }
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.track.as_ref().map_or(0, |t| t.segment_count())
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Setzt die Statusnachricht.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
