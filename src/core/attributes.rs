//! Segment-Attribut-Engine: alle Nutzer-Mutationen an Segment-Attributen
//! plus die abgeleitete Buchführung über die gesamte Segmentliste.
//!
//! Jede Operation prüft zuerst und mutiert dann. Ein Fehler lässt die Liste
//! unverändert; nach einem erfolgreichen Aufruf gelten alle Invarianten
//! (lückenlose Nummern, einheitliche Nummernseite je Ziel-Kurve).

use super::error::TrackError;
use super::segment::{BorderSide, KerbSide, Segment};
use indexmap::IndexMap;

/// Index eines Segments anhand seiner Nummer.
pub fn find_index(segments: &[Segment], segment_number: u32) -> Result<usize, TrackError> {
    segments
        .iter()
        .position(|s| s.segment_number == segment_number)
        .ok_or(TrackError::SegmentNotFound {
            segment: segment_number,
        })
}

/// Vergibt die Nummern 1..N in Listenreihenfolge.
pub fn renumber(segments: &mut [Segment]) {
    for (i, segment) in segments.iter_mut().enumerate() {
        segment.segment_number = (i + 1) as u32;
    }
}

/// Schaltet die Kurven-Markierung um.
///
/// Beim Einschalten wird `default_speed_limit` gesetzt, falls noch kein
/// Tempolimit hinterlegt ist. Beim Ausschalten bleibt das Limit gespeichert.
/// Gibt den neuen Zustand zurück.
pub fn toggle_curve(
    segments: &mut [Segment],
    segment_number: u32,
    default_speed_limit: u32,
) -> Result<bool, TrackError> {
    let index = find_index(segments, segment_number)?;
    let segment = &mut segments[index];
    segment.is_curve = !segment.is_curve;
    if segment.is_curve && segment.speed_limit == 0 {
        segment.speed_limit = default_speed_limit;
    }
    let is_curve = segment.is_curve;
    recompute_curve_distances(segments);
    Ok(is_curve)
}

/// Markiert alle Segmente mit Nummer in `[start, end]` als Kurve mit Tempolimit.
pub fn mark_curve_range(
    segments: &mut [Segment],
    start: u32,
    end: u32,
    speed_limit: u32,
) -> Result<usize, TrackError> {
    if start > end {
        return Err(TrackError::invalid(format!(
            "Kurvenbereich {start}..{end} ist leer"
        )));
    }
    find_index(segments, start)?;
    find_index(segments, end)?;

    let mut marked = 0;
    for segment in segments
        .iter_mut()
        .filter(|s| (start..=end).contains(&s.segment_number))
    {
        segment.is_curve = true;
        segment.speed_limit = speed_limit;
        marked += 1;
    }
    recompute_curve_distances(segments);
    Ok(marked)
}

/// Ändert das Tempolimit einer bestehenden Kurve.
pub fn set_speed_limit(
    segments: &mut [Segment],
    segment_number: u32,
    speed_limit: u32,
) -> Result<(), TrackError> {
    let index = find_index(segments, segment_number)?;
    if !segments[index].is_curve {
        return Err(TrackError::invalid(format!(
            "Segment {segment_number} ist keine Kurve"
        )));
    }
    segments[index].speed_limit = speed_limit;
    Ok(())
}

/// Berechnet `spaces_to_next_curve` und `target_curve_id` für alle Segmente neu.
///
/// Für jedes Segment wird zirkulär vorwärts (nach dem letzten wieder ab dem
/// ersten) bis zur nächsten Kurve gesucht. Gezählt werden die Segmente
/// dazwischen, ohne die Kurve selbst. Ohne Kurve sind beide Werte `None`.
///
/// Danach erhalten alle Segmente mit gleicher Ziel-Kurve die Nummernseite des
/// ersten Segments dieser Gruppe.
pub fn recompute_curve_distances(segments: &mut [Segment]) {
    let n = segments.len();
    let curve_flags: Vec<bool> = segments.iter().map(|s| s.is_curve).collect();
    let numbers: Vec<u32> = segments.iter().map(|s| s.segment_number).collect();

    for (i, segment) in segments.iter_mut().enumerate() {
        let found = (1..=n).find(|k| curve_flags[(i + k) % n]);
        match found {
            Some(k) => {
                segment.spaces_to_next_curve = Some((k - 1) as u32);
                segment.target_curve_id = Some(numbers[(i + k) % n]);
            }
            None => {
                segment.spaces_to_next_curve = None;
                segment.target_curve_id = None;
            }
        }
    }

    normalize_number_sides(segments);
}

/// Erzwingt eine einheitliche Nummernseite je Ziel-Kurve (erster Treffer gewinnt).
fn normalize_number_sides(segments: &mut [Segment]) {
    let mut side_by_target: IndexMap<u32, BorderSide> = IndexMap::new();
    for segment in segments.iter() {
        if let Some(target) = segment.target_curve_id {
            side_by_target.entry(target).or_insert(segment.number_side);
        }
    }
    for segment in segments.iter_mut() {
        if let Some(side) = segment
            .target_curve_id
            .and_then(|target| side_by_target.get(&target))
        {
            segment.number_side = *side;
        }
    }
}

/// Wechselt die Nummernseite aller Segmente, die auf dieselbe Kurve zeigen.
///
/// Ohne Ziel-Kurve: `NoTargetCurve`, nichts wird verändert.
pub fn toggle_number_side(
    segments: &mut [Segment],
    segment_number: u32,
) -> Result<BorderSide, TrackError> {
    let index = find_index(segments, segment_number)?;
    let Some(target) = segments[index].target_curve_id else {
        return Err(TrackError::NoTargetCurve {
            segment: segment_number,
        });
    };

    let new_side = segments[index].number_side.opposite();
    for segment in segments
        .iter_mut()
        .filter(|s| s.target_curve_id == Some(target))
    {
        segment.number_side = new_side;
    }
    Ok(new_side)
}

/// Kerb-Zyklus: aus → beide → links → rechts → aus.
pub fn cycle_kerb(
    segments: &mut [Segment],
    segment_number: u32,
) -> Result<Option<KerbSide>, TrackError> {
    let index = find_index(segments, segment_number)?;
    let segment = &mut segments[index];
    let next = match segment.kerb() {
        None => Some(KerbSide::Both),
        Some(KerbSide::Both) => Some(KerbSide::Left),
        Some(KerbSide::Left) => Some(KerbSide::Right),
        Some(KerbSide::Right) => None,
    };
    apply_kerb(segment, next);
    Ok(next)
}

/// Kerb per Klick auf eine Randseite.
///
/// - kein Kerb → Kerb auf dieser Seite
/// - dieselbe Einzelseite → Kerb entfernen
/// - andere Einzelseite → beide
/// - beide → nur die geklickte Seite
pub fn set_kerb_side(
    segments: &mut [Segment],
    segment_number: u32,
    side: BorderSide,
) -> Result<Option<KerbSide>, TrackError> {
    let index = find_index(segments, segment_number)?;
    let segment = &mut segments[index];
    let clicked = KerbSide::from(side);
    let next = match segment.kerb() {
        None => Some(clicked),
        Some(KerbSide::Both) => Some(clicked),
        Some(active) if active == clicked => None,
        Some(_) => Some(KerbSide::Both),
    };
    apply_kerb(segment, next);
    Ok(next)
}

fn apply_kerb(segment: &mut Segment, kerb: Option<KerbSide>) {
    segment.has_kerb = kerb.is_some();
    segment.kerb_side = kerb.unwrap_or_default();
}

/// Weiße Linie per Klick: nur einseitig, Klick auf die aktive Seite entfernt sie.
pub fn toggle_white_line(
    segments: &mut [Segment],
    segment_number: u32,
    side: BorderSide,
) -> Result<Option<BorderSide>, TrackError> {
    let index = find_index(segments, segment_number)?;
    let segment = &mut segments[index];
    let next = match segment.white_line() {
        Some(active) if active == side => None,
        _ => Some(side),
    };
    segment.has_white_line = next.is_some();
    segment.white_line_side = next.unwrap_or_default();
    Ok(next)
}

/// Schaltet die rot/weiße Rand-Markierung um.
pub fn toggle_outline(segments: &mut [Segment], segment_number: u32) -> Result<bool, TrackError> {
    let index = find_index(segments, segment_number)?;
    let segment = &mut segments[index];
    segment.has_outline = !segment.has_outline;
    Ok(segment.has_outline)
}
