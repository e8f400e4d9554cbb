//! Zusammenhängende Läufe gleicher Attribute (Kerb, weiße Linie, Outline).
//!
//! Läufe werden als Ganzes gezeichnet. Einzelne Streifen je Segment erzeugen
//! sichtbare Nähte an den Segmentgrenzen.

use super::segment::{BorderSide, KerbSide, Segment};

/// Zusammenhängender Lauf von Segmenten mit kompatiblem Attribut.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGroup<S> {
    /// Segmentnummern des Laufs, aufsteigend und lückenlos
    pub segment_numbers: Vec<u32>,
    /// Attributwert je Segment (gleiche Reihenfolge wie `segment_numbers`)
    pub sides: Vec<S>,
}

impl<S: Copy> SegmentGroup<S> {
    fn start(number: u32, side: S) -> Self {
        Self {
            segment_numbers: vec![number],
            sides: vec![side],
        }
    }

    fn push(&mut self, number: u32, side: S) {
        self.segment_numbers.push(number);
        self.sides.push(side);
    }

    /// Erste Segmentnummer des Laufs
    pub fn first(&self) -> u32 {
        self.segment_numbers.first().copied().unwrap_or_default()
    }

    /// Letzte Segmentnummer des Laufs
    pub fn last(&self) -> u32 {
        self.segment_numbers.last().copied().unwrap_or_default()
    }

    /// Anzahl der Segmente im Lauf
    pub fn len(&self) -> usize {
        self.segment_numbers.len()
    }

    /// Gibt `true` zurück, wenn der Lauf leer ist.
    pub fn is_empty(&self) -> bool {
        self.segment_numbers.is_empty()
    }
}

/// Gruppiert Kerb-Segmente: Nummer genau +1 zum Vorgänger und überlappende Seiten.
pub fn group_contiguous_kerb_segments(segments: &[Segment]) -> Vec<SegmentGroup<KerbSide>> {
    group_contiguous(segments, Segment::kerb, |prev, next| prev.overlaps(next))
}

/// Gruppiert Segmente mit weißer Linie: Nummer genau +1 und exakt gleiche Seite.
pub fn group_contiguous_white_line_segments(
    segments: &[Segment],
) -> Vec<SegmentGroup<BorderSide>> {
    group_contiguous(segments, Segment::white_line, |prev, next| prev == next)
}

/// Gruppiert Outline-Segmente (beide Ränder) nach reiner Nummern-Nachbarschaft.
pub fn group_contiguous_outline_segments(segments: &[Segment]) -> Vec<SegmentGroup<()>> {
    group_contiguous(
        segments,
        |s| s.has_outline.then_some(()),
        |_, _| true,
    )
}

fn group_contiguous<S, F, C>(
    segments: &[Segment],
    attribute: F,
    compatible: C,
) -> Vec<SegmentGroup<S>>
where
    S: Copy,
    F: Fn(&Segment) -> Option<S>,
    C: Fn(S, S) -> bool,
{
    let mut marked: Vec<(u32, S)> = segments
        .iter()
        .filter_map(|s| attribute(s).map(|side| (s.segment_number, side)))
        .collect();
    marked.sort_by_key(|(number, _)| *number);

    let mut groups: Vec<SegmentGroup<S>> = Vec::new();
    for (number, side) in marked {
        match groups.last_mut() {
            Some(group)
                if group.last() + 1 == number
                    && group.sides.last().is_some_and(|prev| compatible(*prev, side)) =>
            {
                group.push(number, side);
            }
            _ => groups.push(SegmentGroup::start(number, side)),
        }
    }
    groups
}
