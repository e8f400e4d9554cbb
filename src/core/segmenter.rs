//! Teilt die Mittellinie in Segmente fester Länge.

use super::arc_length::ArcLengthTable;
use super::attributes::{recompute_curve_distances, renumber};
use super::error::TrackError;
use super::geometry::{is_degenerate, point_on_polyline};
use super::segment::Segment;
use glam::Vec2;

/// Prüft die gemeinsamen Vorbedingungen von Segmentierung und Generierung.
pub fn validate_inputs(
    centerline: &[Vec2],
    segment_length: f32,
    track_width: f32,
) -> Result<(), TrackError> {
    if centerline.len() < 2 {
        return Err(TrackError::invalid(format!(
            "Mittellinie braucht mindestens 2 Punkte, hat {}",
            centerline.len()
        )));
    }
    if !(segment_length.is_finite() && segment_length > 0.0) {
        return Err(TrackError::invalid(format!(
            "Segmentlänge muss > 0 sein, ist {segment_length}"
        )));
    }
    if !(track_width.is_finite() && track_width > 0.0) {
        return Err(TrackError::invalid(format!(
            "Streckenbreite muss > 0 sein, ist {track_width}"
        )));
    }
    Ok(())
}

/// Teilt die Mittellinie in Segmente der Länge `segment_length`.
///
/// Ablauf:
/// 1. Bogenlängen-Tabelle; ist die Strecke kürzer als ein Segment → leere Liste
/// 2. `floor(L / S) + 1` Segmentgrenzen bei `i × S`, per Cursor lokalisiert
/// 3. Rundkurs: liegt die letzte Grenze näher als `S / 2` an der ersten, entfällt sie
/// 4. Nummerierung 1..N und Kurven-Distanzen neu berechnen
pub fn divide_into_segments(
    centerline: &[Vec2],
    segment_length: f32,
    track_width: f32,
) -> Result<Vec<Segment>, TrackError> {
    validate_inputs(centerline, segment_length, track_width)?;

    let table = ArcLengthTable::new(centerline);
    let total_length = table.total_length();
    if total_length < segment_length {
        log::info!(
            "Strecke zu kurz für ein Segment ({:.2} < {:.2})",
            total_length,
            segment_length
        );
        return Ok(Vec::new());
    }

    let num_segments = (total_length / segment_length).floor() as usize;
    log::info!(
        "Streckenlänge: {:.2}, erzeuge {} Segmente à {}",
        total_length,
        num_segments,
        segment_length
    );

    let mut cursor = table.cursor();
    let mut segments = Vec::with_capacity(num_segments + 1);
    for i in 0..=num_segments {
        let target = (i as f32 * segment_length).min(total_length);
        let position = cursor.locate(target)?;
        segments.push(Segment::new((i + 1) as u32, position, target));
    }

    trim_closed_loop(centerline, &mut segments, segment_length);
    renumber(&mut segments);
    recompute_curve_distances(&mut segments);

    log::info!("{} Segmentgrenzen erstellt", segments.len());
    Ok(segments)
}

/// Entfernt die letzte Segmentgrenze, wenn sie auf einem Rundkurs mit der ersten zusammenfällt.
fn trim_closed_loop(centerline: &[Vec2], segments: &mut Vec<Segment>, segment_length: f32) {
    if segments.len() < 2 {
        return;
    }
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return;
    };
    let (Some(first_center), Some(last_center)) = (
        point_on_polyline(centerline, first.centerline_index, first.interpolation_t),
        point_on_polyline(centerline, last.centerline_index, last.interpolation_t),
    ) else {
        return;
    };

    let gap = first_center.distance(last_center);
    if gap < 0.5 * segment_length {
        segments.pop();
        log::info!(
            "Letztes Segment entfernt (Rundkurs): Abstand zum ersten {:.2} < {:.2}",
            gap,
            0.5 * segment_length
        );
    }
}

/// Richtung des Mittellinien-Intervalls `[index, index + 1]`, normalisiert.
///
/// Entartete Intervalle fallen auf die horizontale Richtung `(1, 0)` zurück.
/// Das ist eine akzeptierte Näherung und wird nur protokolliert.
pub fn bracket_direction(centerline: &[Vec2], index: usize) -> Vec2 {
    let direction = match (centerline.get(index), centerline.get(index + 1)) {
        (Some(a), Some(b)) => *b - *a,
        (Some(_), None) if index > 0 => centerline[index] - centerline[index - 1],
        _ => Vec2::ZERO,
    };
    if is_degenerate(direction) {
        log::warn!(
            "Entartete Richtung an Mittellinien-Index {}, verwende horizontale Richtung",
            index
        );
        Vec2::X
    } else {
        direction.normalize()
    }
}

/// Senkrechte Trennlinie über die volle Breite an einer Mittellinien-Position.
///
/// Liefert `(start, end)`: `start` liegt rechts, `end` links der Fahrtrichtung.
pub fn divider_line(
    centerline: &[Vec2],
    index: usize,
    t: f32,
    half_width: f32,
) -> Option<(Vec2, Vec2)> {
    let center = point_on_polyline(centerline, index, t)?;
    let direction = bracket_direction(centerline, index);
    let normal = Vec2::new(-direction.y, direction.x);
    Some((center - normal * half_width, center + normal * half_width))
}
