//! Fehler-Taxonomie des Track-Kerns.

use thiserror::Error;

/// Fehler bei Generierung, Abfrage und Bearbeitung eines Track-Modells.
///
/// Generierungsfehler brechen die ganze Operation ab (kein Teil-Modell).
/// Bearbeitungsfehler sind lokal: das Modell bleibt exakt wie vor dem Aufruf.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// Vorbedingung der Segmentierung verletzt (zu wenige Punkte, Länge/Breite ≤ 0)
    #[error("ungültige Eingabe: {reason}")]
    InvalidInput { reason: String },

    /// Keine verwertbare Pfad-Geometrie gefunden
    #[error("keine Pfad-Geometrie gefunden")]
    EmptyPath,

    /// Bogenlängen-Abfrage ohne mögliches Intervall
    #[error("Distanz {distance} liegt außerhalb der Streckenlänge {total}")]
    OutOfRange { distance: f32, total: f32 },

    /// Nummernseite umschalten ohne Kurve auf der Strecke
    #[error("Segment {segment} hat keine Ziel-Kurve")]
    NoTargetCurve { segment: u32 },

    /// Segmentnummer existiert nicht
    #[error("Segment {segment} existiert nicht")]
    SegmentNotFound { segment: u32 },
}

impl TrackError {
    /// Kurzform für `InvalidInput`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
