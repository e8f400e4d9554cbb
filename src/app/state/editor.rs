use crate::shared::DEFAULT_SPEED_LIMIT;

/// Aktiver Bearbeitungsmodus: bestimmt, was ein Klick auf ein Segment bewirkt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Segmente nur auswählen
    #[default]
    Select,
    /// Kurven-Markierung umschalten
    Curve,
    /// Kerbs setzen (Segment-Klick zyklisch, Rand-Klick seitenweise)
    Kerb,
    /// Weiße Linie auf der geklickten Randseite umschalten
    WhiteLine,
    /// Nummernseite der Ziel-Kurven-Gruppe wechseln
    Number,
    /// Rot/weiße Rand-Markierung umschalten
    Outline,
}

/// Zustand des Editors
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditMode,
    /// Tempolimit für neu markierte Kurven
    pub default_speed_limit: u32,
    /// Aktuell ausgewähltes Segment
    pub selected_segment: Option<u32>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (Select-Modus aktiv).
    pub fn new() -> Self {
        Self {
            mode: EditMode::Select,
            default_speed_limit: DEFAULT_SPEED_LIMIT,
            selected_segment: None,
        }
    }
}
