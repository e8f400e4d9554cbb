//! Parallel-Kurven (Ränder, Kerbs, weiße Linien) per senkrechtem Versatz.

use super::geometry::{is_degenerate, safe_normalize};
use super::segment::BorderSide;
use glam::Vec2;

/// Berechnet eine parallele Polyline im Abstand `distance` zur gegebenen Seite.
///
/// Tangente je Punkt:
/// - erster Punkt: Richtung zu Punkt 1
/// - letzter Punkt: Richtung von Punkt `n - 2`
/// - sonst: Mittel aus normalisierter Eingangs- und Ausgangsrichtung
///
/// Das Mittel wird **nicht** renormalisiert: an scharfen Knicken ist `|t| < 1`,
/// der Versatz dort also kürzer als `distance`.
///
/// Entartete Tangenten (doppelte Nachbarpunkte, 180°-Wende) werden durch die
/// letzte gültige Tangente ersetzt, am Anfang durch die erste gültige danach.
/// Hat die gesamte Polyline keine gültige Richtung, gilt `(1, 0)`.
///
/// Läuft in O(n) und akzeptiert Ausschnitte ab 2 Punkten; kürzere Eingaben
/// werden unverändert zurückgegeben.
pub fn offset_polyline(points: &[Vec2], distance: f32, side: BorderSide) -> Vec<Vec2> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let tangents = fill_degenerate_tangents(raw_tangents(points));

    points
        .iter()
        .zip(tangents)
        .map(|(&p, t)| p + perpendicular(t, side) * distance)
        .collect()
}

/// Dreht eine Tangente um ±90° zur gewünschten Seite.
pub fn perpendicular(tangent: Vec2, side: BorderSide) -> Vec2 {
    match side {
        BorderSide::Left => Vec2::new(-tangent.y, tangent.x),
        BorderSide::Right => Vec2::new(tangent.y, -tangent.x),
    }
}

fn raw_tangents(points: &[Vec2]) -> Vec<Vec2> {
    let last = points.len() - 1;
    (0..=last)
        .map(|i| {
            if i == 0 {
                safe_normalize(points[1] - points[0])
            } else if i == last {
                safe_normalize(points[last] - points[last - 1])
            } else {
                let incoming = safe_normalize(points[i] - points[i - 1]);
                let outgoing = safe_normalize(points[i + 1] - points[i]);
                (incoming + outgoing) * 0.5
            }
        })
        .collect()
}

fn fill_degenerate_tangents(mut tangents: Vec<Vec2>) -> Vec<Vec2> {
    let Some(first_valid) = tangents.iter().copied().find(|t| !is_degenerate(*t)) else {
        log::warn!(
            "Offset: keine gültige Richtung in {} Punkten, verwende horizontale Tangente",
            tangents.len()
        );
        tangents.fill(Vec2::X);
        return tangents;
    };

    let mut previous = first_valid;
    let mut replaced = 0usize;
    for tangent in tangents.iter_mut() {
        if is_degenerate(*tangent) {
            *tangent = previous;
            replaced += 1;
        } else {
            previous = *tangent;
        }
    }

    if replaced > 0 {
        log::warn!(
            "Offset: {} entartete Tangente(n) durch Nachbar-Tangente ersetzt",
            replaced
        );
    }
    tangents
}
