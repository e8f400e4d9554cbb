//! Reine Polyline-Geometrie: Normalisierung, Länge, Bounding-Box.
//!
//! Layer-neutral: wird von Offset, Bogenlängen-Index, Segmentierung und
//! Renderer gleichermaßen genutzt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unterhalb dieser Länge gilt ein Richtungsvektor als entartet.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Normalisiert einen Vektor; entartete Vektoren ergeben `(0, 0)` statt NaN.
pub fn safe_normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len <= DEGENERATE_EPSILON {
        Vec2::ZERO
    } else {
        v / len
    }
}

/// Prüft, ob ein Richtungsvektor zu kurz für eine Tangente ist.
pub fn is_degenerate(v: Vec2) -> bool {
    v.length() <= DEGENERATE_EPSILON
}

/// Summe der euklidischen Abstände aufeinanderfolgender Punkte.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Interpoliert zwischen Punkt `index` und `index + 1` mit Anteil `t`.
///
/// Liegt `index` am Ende der Polyline, wird der letzte Punkt geliefert.
pub fn point_on_polyline(points: &[Vec2], index: usize, t: f32) -> Option<Vec2> {
    let start = *points.get(index)?;
    match points.get(index + 1) {
        Some(end) => Some(start.lerp(*end, t)),
        None => Some(start),
    }
}

/// Achsenparallele Begrenzung in Track-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackBounds {
    /// Minimale Ecke (kleinstes x, kleinstes y)
    pub min: Vec2,
    /// Maximale Ecke (größtes x, größtes y)
    pub max: Vec2,
}

impl TrackBounds {
    /// Bildet die Bounds über alle übergebenen Polylines; `None` wenn alle leer sind.
    pub fn from_polylines<'a>(polylines: impl IntoIterator<Item = &'a [Vec2]>) -> Option<Self> {
        let mut points = polylines.into_iter().flatten();
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Breite und Höhe der Bounds
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Mittelpunkt der Bounds (für den initialen View-Fit)
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}
