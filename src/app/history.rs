use crate::core::TrackModel;
use crate::shared::TrackOptions;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone: Das Erstellen eines Snapshots ist O(1). Mutationen
/// installieren immer ein neues `Arc`, ältere Snapshots bleiben unberührt.
#[derive(Clone)]
pub struct Snapshot {
    /// Optionales Track-Modell (Arc-Klon für O(1)-Snapshot)
    pub track: Option<Arc<TrackModel>>,
    /// Ausgewähltes Segment zum Zeitpunkt des Snapshots
    pub selected_segment: Option<u32>,
    /// Generierungs-Parameter, mit denen der Track erzeugt wurde
    pub generation: GenerationParams,
}

/// Die Optionen, die Form und Segmentierung des Tracks bestimmen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub track_width: f32,
    pub segment_length: f32,
    pub border_offset_ratio: f32,
}

impl GenerationParams {
    fn from_options(options: &TrackOptions) -> Self {
        Self {
            track_width: options.track_width,
            segment_length: options.segment_length,
            border_offset_ratio: options.border_offset_ratio,
        }
    }

    fn apply_to(self, options: &mut TrackOptions) {
        options.track_width = self.track_width;
        options.segment_length = self.segment_length;
        options.border_offset_ratio = self.border_offset_ratio;
    }
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            track: state.track.clone(),
            selected_segment: state.editor.selected_segment,
            generation: GenerationParams::from_options(&state.options),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.track = self.track;
        state.editor.selected_segment = self.selected_segment;
        self.generation.apply_to(&mut state.options);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
