//! Das Track-Modell: Mittellinie, beide Ränder, Segmente, Breite, Segmentlänge.
//!
//! Die Geometrie (Mittellinie, Ränder) ist pro Generierung unveränderlich;
//! Segment-Attribute werden über die Attribut-Engine in-place mutiert.
//! Breite, Segmentlänge oder eine neue Mittellinie bauen das Modell komplett neu.

use super::arc_length::ArcLengthTable;
use super::attributes;
use super::error::TrackError;
use super::geometry::{point_on_polyline, polyline_length, TrackBounds};
use super::grouping::{
    group_contiguous_kerb_segments, group_contiguous_outline_segments,
    group_contiguous_white_line_segments, SegmentGroup,
};
use super::offset::offset_polyline;
use super::segment::{BorderSide, KerbSide, Segment};
use super::segmenter::{divide_into_segments, divider_line, validate_inputs};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Verhältnis des Randversatzes zur halben Streckenbreite.
pub const DEFAULT_BORDER_OFFSET_RATIO: f32 = 1.0;

fn default_border_offset_ratio() -> f32 {
    DEFAULT_BORDER_OFFSET_RATIO
}

/// Vollständiges Strecken-Modell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackModel {
    /// Abgetastete Mittellinie
    centerline: Vec<Vec2>,
    /// Linker Rand (gleiche Punktanzahl wie die Mittellinie)
    left_border: Vec<Vec2>,
    /// Rechter Rand (gleiche Punktanzahl wie die Mittellinie)
    right_border: Vec<Vec2>,
    /// Segmente in Streckenreihenfolge
    segments: Vec<Segment>,
    /// Streckenbreite
    track_width: f32,
    /// Segmentlänge (Bogenlänge)
    segment_length: f32,
    /// Randversatz relativ zur halben Breite
    #[serde(default = "default_border_offset_ratio")]
    border_offset_ratio: f32,
}

impl TrackModel {
    /// Generiert ein Modell aus Mittellinie, Breite und Segmentlänge.
    ///
    /// Fehler brechen ab, ohne ein Teil-Modell zu erzeugen.
    pub fn generate(
        centerline: Vec<Vec2>,
        track_width: f32,
        segment_length: f32,
    ) -> Result<Self, TrackError> {
        validate_inputs(&centerline, segment_length, track_width)?;

        let segments = divide_into_segments(&centerline, segment_length, track_width)?;
        let mut model = Self {
            centerline,
            left_border: Vec::new(),
            right_border: Vec::new(),
            segments,
            track_width,
            segment_length,
            border_offset_ratio: DEFAULT_BORDER_OFFSET_RATIO,
        };
        model.rebuild_borders();

        log::info!(
            "Track generiert: {} Mittellinien-Punkte, {} Segmente, Breite {}, Segmentlänge {}",
            model.centerline.len(),
            model.segments.len(),
            track_width,
            segment_length
        );
        Ok(model)
    }

    /// Baut das Modell mit neuer Breite/Segmentlänge über derselben Mittellinie neu.
    ///
    /// Segment-Attribute gehen dabei verloren; der Randversatz bleibt erhalten.
    pub fn regenerate(&self, track_width: f32, segment_length: f32) -> Result<Self, TrackError> {
        let mut model = Self::generate(self.centerline.clone(), track_width, segment_length)?;
        model.border_offset_ratio = self.border_offset_ratio;
        model.rebuild_borders();
        Ok(model)
    }

    /// Setzt das Randversatz-Verhältnis und baut beide Ränder neu.
    ///
    /// Segmente bleiben unverändert, da ihre Position über Index + Anteil
    /// auf der Mittellinie gespeichert ist.
    pub fn set_border_offset_ratio(&mut self, ratio: f32) -> Result<(), TrackError> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(TrackError::invalid(format!(
                "Randversatz-Verhältnis muss > 0 sein, ist {ratio}"
            )));
        }
        self.border_offset_ratio = ratio;
        self.rebuild_borders();
        Ok(())
    }

    fn rebuild_borders(&mut self) {
        let offset = self.border_offset();
        self.left_border = offset_polyline(&self.centerline, offset, BorderSide::Left);
        self.right_border = offset_polyline(&self.centerline, offset, BorderSide::Right);
    }

    /// Prüft die Struktur-Invarianten (z.B. nach dem Laden aus einer Datei).
    pub fn validate(&self) -> Result<(), TrackError> {
        validate_inputs(&self.centerline, self.segment_length, self.track_width)?;
        if self.left_border.len() != self.centerline.len()
            || self.right_border.len() != self.centerline.len()
        {
            return Err(TrackError::invalid(format!(
                "Randpunkte ({} / {}) passen nicht zur Mittellinie ({})",
                self.left_border.len(),
                self.right_border.len(),
                self.centerline.len()
            )));
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.segment_number != (i + 1) as u32 {
                return Err(TrackError::invalid(format!(
                    "Segmentnummer {} an Position {} ist nicht lückenlos",
                    segment.segment_number,
                    i + 1
                )));
            }
            if segment.centerline_index >= self.centerline.len() {
                return Err(TrackError::invalid(format!(
                    "Segment {} verweist auf Mittellinien-Index {}",
                    segment.segment_number, segment.centerline_index
                )));
            }
        }
        Ok(())
    }

    // ── Lesezugriff ────────────────────────────────────────────────

    /// Mittellinien-Punkte
    pub fn centerline(&self) -> &[Vec2] {
        &self.centerline
    }

    /// Punkte des linken Rands
    pub fn left_border(&self) -> &[Vec2] {
        &self.left_border
    }

    /// Punkte des rechten Rands
    pub fn right_border(&self) -> &[Vec2] {
        &self.right_border
    }

    /// Rand-Punkte der gewünschten Seite
    pub fn border(&self, side: BorderSide) -> &[Vec2] {
        match side {
            BorderSide::Left => &self.left_border,
            BorderSide::Right => &self.right_border,
        }
    }

    /// Alle Segmente in Streckenreihenfolge
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment anhand seiner Nummer
    pub fn segment(&self, segment_number: u32) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| s.segment_number == segment_number)
    }

    /// Anzahl der Segmente
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Streckenbreite
    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    /// Segmentlänge
    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// Randversatz-Verhältnis
    pub fn border_offset_ratio(&self) -> f32 {
        self.border_offset_ratio
    }

    /// Tatsächlicher Abstand der Ränder zur Mittellinie
    pub fn border_offset(&self) -> f32 {
        self.track_width / 2.0 * self.border_offset_ratio
    }

    // ── Abfragen ───────────────────────────────────────────────────

    /// Bounding-Box über Mittellinie und beide Ränder (für den View-Fit).
    pub fn bounds(&self) -> Option<TrackBounds> {
        TrackBounds::from_polylines([
            self.centerline.as_slice(),
            self.left_border.as_slice(),
            self.right_border.as_slice(),
        ])
    }

    /// Gesamtlänge der Mittellinie.
    pub fn total_length(&self) -> f32 {
        polyline_length(&self.centerline)
    }

    /// Ausschnitt eines Rands zwischen zwei Längenanteilen (0..1).
    ///
    /// Index-Bereich: `floor(start × (n−1)) ..= ceil(end × (n−1))`.
    /// Vertauschte Anteile werden sortiert, Werte außerhalb von [0, 1] geklemmt.
    pub fn border_slice(&self, side: BorderSide, start_ratio: f32, end_ratio: f32) -> &[Vec2] {
        ratio_slice(self.border(side), start_ratio, end_ratio)
    }

    /// Ausschnitt der Mittellinie, gleicher Index-Bereich wie [`Self::border_slice`].
    pub fn centerline_slice(&self, start_ratio: f32, end_ratio: f32) -> &[Vec2] {
        ratio_slice(&self.centerline, start_ratio, end_ratio)
    }

    /// Mittelpunkt eines Segments auf der Mittellinie.
    pub fn segment_center(&self, segment_number: u32) -> Option<Vec2> {
        let segment = self.segment(segment_number)?;
        point_on_polyline(
            &self.centerline,
            segment.centerline_index,
            segment.interpolation_t,
        )
    }

    /// Trennlinie eines Segments quer über die Strecke, `(rechts, links)`.
    pub fn segment_divider(&self, segment_number: u32) -> Option<(Vec2, Vec2)> {
        let segment = self.segment(segment_number)?;
        divider_line(
            &self.centerline,
            segment.centerline_index,
            segment.interpolation_t,
            self.border_offset(),
        )
    }

    /// Bogenlängen-Bereich `[start, end)` eines Segments.
    ///
    /// Ende ist die Position des nächsten Segments, beim letzten die Gesamtlänge.
    pub fn segment_span(&self, segment_number: u32) -> Option<(f32, f32)> {
        let index = attributes::find_index(&self.segments, segment_number).ok()?;
        let start = self.segments[index].distance_along_track;
        let end = self
            .segments
            .get(index + 1)
            .map(|s| s.distance_along_track)
            .unwrap_or_else(|| self.total_length());
        Some((start, end))
    }

    /// Bogenlängen-Bereich eines Laufs von Segment `first` bis `last`.
    pub fn run_span(&self, first: u32, last: u32) -> Option<(f32, f32)> {
        let (start, _) = self.segment_span(first)?;
        let (_, end) = self.segment_span(last)?;
        Some((start, end))
    }

    /// Kerb-Läufe zum Zeichnen
    pub fn kerb_groups(&self) -> Vec<SegmentGroup<KerbSide>> {
        group_contiguous_kerb_segments(&self.segments)
    }

    /// Läufe weißer Linien zum Zeichnen
    pub fn white_line_groups(&self) -> Vec<SegmentGroup<BorderSide>> {
        group_contiguous_white_line_segments(&self.segments)
    }

    /// Outline-Läufe zum Zeichnen
    pub fn outline_groups(&self) -> Vec<SegmentGroup<()>> {
        group_contiguous_outline_segments(&self.segments)
    }

    // ── Attribut-Mutationen ────────────────────────────────────────

    /// Kurve umschalten (siehe [`attributes::toggle_curve`]).
    pub fn toggle_curve(
        &mut self,
        segment_number: u32,
        default_speed_limit: u32,
    ) -> Result<bool, TrackError> {
        attributes::toggle_curve(&mut self.segments, segment_number, default_speed_limit)
    }

    /// Bereich als Kurve markieren (siehe [`attributes::mark_curve_range`]).
    pub fn mark_curve_range(
        &mut self,
        start: u32,
        end: u32,
        speed_limit: u32,
    ) -> Result<usize, TrackError> {
        attributes::mark_curve_range(&mut self.segments, start, end, speed_limit)
    }

    /// Tempolimit einer Kurve setzen.
    pub fn set_speed_limit(&mut self, segment_number: u32, limit: u32) -> Result<(), TrackError> {
        attributes::set_speed_limit(&mut self.segments, segment_number, limit)
    }

    /// Kurven-Distanzen neu berechnen.
    pub fn recompute_curve_distances(&mut self) {
        attributes::recompute_curve_distances(&mut self.segments);
    }

    /// Nummernseite der Ziel-Kurven-Gruppe wechseln.
    pub fn toggle_number_side(&mut self, segment_number: u32) -> Result<BorderSide, TrackError> {
        attributes::toggle_number_side(&mut self.segments, segment_number)
    }

    /// Kerb-Zyklus aus → beide → links → rechts → aus.
    pub fn cycle_kerb(&mut self, segment_number: u32) -> Result<Option<KerbSide>, TrackError> {
        attributes::cycle_kerb(&mut self.segments, segment_number)
    }

    /// Kerb per Klick auf eine Randseite.
    pub fn set_kerb_side(
        &mut self,
        segment_number: u32,
        side: BorderSide,
    ) -> Result<Option<KerbSide>, TrackError> {
        attributes::set_kerb_side(&mut self.segments, segment_number, side)
    }

    /// Weiße Linie per Klick auf eine Randseite.
    pub fn toggle_white_line(
        &mut self,
        segment_number: u32,
        side: BorderSide,
    ) -> Result<Option<BorderSide>, TrackError> {
        attributes::toggle_white_line(&mut self.segments, segment_number, side)
    }

    /// Outline umschalten.
    pub fn toggle_outline(&mut self, segment_number: u32) -> Result<bool, TrackError> {
        attributes::toggle_outline(&mut self.segments, segment_number)
    }

    // ── Struktur-Änderungen ────────────────────────────────────────

    /// Verschiebt ein Segment auf eine neue Bogenlänge.
    ///
    /// Danach werden die Segmente nach Distanz sortiert, neu nummeriert und die
    /// Kurven-Distanzen neu berechnet. Gibt die neue Segmentnummer zurück.
    pub fn reposition_segment(
        &mut self,
        segment_number: u32,
        distance: f32,
    ) -> Result<u32, TrackError> {
        let index = attributes::find_index(&self.segments, segment_number)?;
        let position = ArcLengthTable::new(&self.centerline).locate(distance)?;

        self.segments[index].set_position(position, distance);
        Ok(self.restructure(Some(segment_number)).unwrap_or(segment_number))
    }

    /// Fügt eine neue Segmentgrenze bei `distance` ein und gibt ihre Nummer zurück.
    pub fn insert_segment_at(&mut self, distance: f32) -> Result<u32, TrackError> {
        let position = ArcLengthTable::new(&self.centerline).locate(distance)?;
        // Platzhalter-Nummer außerhalb 1..N, wird beim Neunummerieren ersetzt
        let placeholder = u32::MAX;
        self.segments.push(Segment::new(placeholder, position, distance));
        Ok(self
            .restructure(Some(placeholder))
            .unwrap_or(self.segments.len() as u32))
    }

    /// Entfernt ein Segment; die übrigen werden lückenlos neu nummeriert.
    pub fn remove_segment(&mut self, segment_number: u32) -> Result<Segment, TrackError> {
        let index = attributes::find_index(&self.segments, segment_number)?;
        let removed = self.segments.remove(index);
        self.restructure(None);
        Ok(removed)
    }

    /// Sortiert, nummeriert neu, berechnet Kurven-Distanzen; liefert die neue
    /// Nummer des Segments, das vorher `tracked_number` trug.
    fn restructure(&mut self, tracked_number: Option<u32>) -> Option<u32> {
        self.segments
            .sort_by(|a, b| a.distance_along_track.total_cmp(&b.distance_along_track));
        let tracked_index = tracked_number.and_then(|number| {
            self.segments
                .iter()
                .position(|s| s.segment_number == number)
        });
        attributes::renumber(&mut self.segments);
        attributes::recompute_curve_distances(&mut self.segments);
        tracked_index.map(|i| (i + 1) as u32)
    }
}

fn ratio_slice(points: &[Vec2], start_ratio: f32, end_ratio: f32) -> &[Vec2] {
    if points.is_empty() {
        return points;
    }
    let last_index = points.len() - 1;
    // Nicht-endliche Anteile gelten als 0
    let to_index = |ratio: f32, round: fn(f32) -> f32| {
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        (round(ratio * last_index as f32) as usize).min(last_index)
    };
    let a = to_index(start_ratio, f32::floor);
    let b = to_index(end_ratio, f32::ceil);
    let (start, end) = if a <= b {
        (a, b)
    } else {
        (to_index(end_ratio, f32::floor), to_index(start_ratio, f32::ceil))
    };
    &points[start..=end]
}

#[cfg(test)]
mod tests;
