//! Segment-Datensatz und Seiten-Enums.

use serde::{Deserialize, Serialize};

/// Seite relativ zur Fahrtrichtung der Mittellinie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderSide {
    /// Linke Seite (Normale `(-ty, tx)`)
    #[default]
    Left,
    /// Rechte Seite (Normale `(ty, -tx)`)
    Right,
}

impl BorderSide {
    /// Liefert die jeweils andere Seite.
    pub fn opposite(self) -> Self {
        match self {
            BorderSide::Left => BorderSide::Right,
            BorderSide::Right => BorderSide::Left,
        }
    }

    /// Beide Seiten in fester Reihenfolge (links, rechts).
    pub const ALL: [BorderSide; 2] = [BorderSide::Left, BorderSide::Right];
}

/// Seite(n) eines Kerbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KerbSide {
    /// Nur links
    Left,
    /// Nur rechts
    Right,
    /// Beide Seiten (auch Standardwert bei ausgeschaltetem Kerb)
    #[default]
    Both,
}

impl KerbSide {
    /// Prüft, ob der Kerb die gegebene Randseite abdeckt.
    pub fn covers(self, side: BorderSide) -> bool {
        match self {
            KerbSide::Both => true,
            KerbSide::Left => side == BorderSide::Left,
            KerbSide::Right => side == BorderSide::Right,
        }
    }

    /// Zwei Kerb-Seiten überlappen, wenn eine davon `Both` ist oder beide gleich sind.
    pub fn overlaps(self, other: KerbSide) -> bool {
        self == KerbSide::Both || other == KerbSide::Both || self == other
    }
}

impl From<BorderSide> for KerbSide {
    fn from(side: BorderSide) -> Self {
        match side {
            BorderSide::Left => KerbSide::Left,
            BorderSide::Right => KerbSide::Right,
        }
    }
}

/// Exakte Position auf der Mittellinie: zwischen Punkt `centerline_index`
/// und `centerline_index + 1` mit Anteil `interpolation_t` ∈ [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPosition {
    /// Index des Startpunkts des Mittellinien-Intervalls
    pub centerline_index: usize,
    /// Interpolationsanteil innerhalb des Intervalls
    pub interpolation_t: f32,
}

/// Ein editierbares Strecken-Segment.
///
/// Speichert keine abgeleiteten Koordinaten; Mittelpunkt und Trennlinie
/// werden bei Bedarf aus `centerline_index` + `interpolation_t` berechnet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-basierte, lückenlose Segmentnummer
    pub segment_number: u32,
    /// Index des Mittellinien-Intervalls
    pub centerline_index: usize,
    /// Anteil innerhalb des Intervalls (0..1)
    pub interpolation_t: f32,
    /// Kumulierte Bogenlänge an dieser Position
    pub distance_along_track: f32,
    /// Segment ist als Kurve markiert
    #[serde(default)]
    pub is_curve: bool,
    /// Tempolimit (nur relevant wenn `is_curve`)
    #[serde(default)]
    pub speed_limit: u32,
    /// Kerb vorhanden
    #[serde(default)]
    pub has_kerb: bool,
    /// Kerb-Seite (bei `has_kerb == false` immer Standardwert)
    #[serde(default)]
    pub kerb_side: KerbSide,
    /// Weiße Linie vorhanden
    #[serde(default)]
    pub has_white_line: bool,
    /// Seite der weißen Linie (bei `has_white_line == false` immer Standardwert)
    #[serde(default)]
    pub white_line_side: BorderSide,
    /// Rot/weiß gestrichelte Rand-Markierung
    #[serde(default)]
    pub has_outline: bool,
    /// Seite, auf der die Segmentnummer gezeichnet wird
    #[serde(default)]
    pub number_side: BorderSide,
    /// Anzahl Segmente bis zur nächsten Kurve (abgeleitet)
    #[serde(default)]
    pub spaces_to_next_curve: Option<u32>,
    /// Segmentnummer der nächsten Kurve (abgeleitet)
    #[serde(default)]
    pub target_curve_id: Option<u32>,
}

impl Segment {
    /// Erstellt ein Segment mit Standard-Attributen an der gegebenen Position.
    pub fn new(segment_number: u32, position: TrackPosition, distance_along_track: f32) -> Self {
        Self {
            segment_number,
            centerline_index: position.centerline_index,
            interpolation_t: position.interpolation_t,
            distance_along_track,
            is_curve: false,
            speed_limit: 0,
            has_kerb: false,
            kerb_side: KerbSide::default(),
            has_white_line: false,
            white_line_side: BorderSide::default(),
            has_outline: false,
            number_side: BorderSide::default(),
            spaces_to_next_curve: None,
            target_curve_id: None,
        }
    }

    /// Position auf der Mittellinie
    pub fn position(&self) -> TrackPosition {
        TrackPosition {
            centerline_index: self.centerline_index,
            interpolation_t: self.interpolation_t,
        }
    }

    /// Setzt eine neue Position inkl. Bogenlänge.
    pub fn set_position(&mut self, position: TrackPosition, distance_along_track: f32) {
        self.centerline_index = position.centerline_index;
        self.interpolation_t = position.interpolation_t;
        self.distance_along_track = distance_along_track;
    }

    /// Aktive Kerb-Seite, `None` wenn kein Kerb gesetzt ist.
    pub fn kerb(&self) -> Option<KerbSide> {
        self.has_kerb.then_some(self.kerb_side)
    }

    /// Aktive Seite der weißen Linie, `None` wenn keine gesetzt ist.
    pub fn white_line(&self) -> Option<BorderSide> {
        self.has_white_line.then_some(self.white_line_side)
    }
}
