//! Abtastung einer Pfad-Geometrie in gleichen Bogenlängen-Schritten.

use super::parser::extract_first_path_data;
use super::path_data::{parse_path_data, PathSegment};
use crate::core::geometry::DEGENERATE_EPSILON;
use crate::core::{ArcLengthTable, TrackError};
use anyhow::{Context, Result};
use glam::Vec2;

/// Unterteilungen je Bézier-Stück beim Abflachen.
const CURVE_FLATTEN_STEPS: usize = 64;

/// Vertrag einer Pfad-Geometrie: Gesamtlänge und Punkt bei Bogenlänge.
pub trait PathGeometry {
    /// Gesamte Bogenlänge
    fn path_length(&self) -> f32;
    /// Punkt bei Bogenlänge `distance` ∈ [0, `path_length()`]
    fn point_at_length(&self, distance: f32) -> Vec2;
}

/// Abgeflachter SVG-Pfad mit Bogenlängen-Index.
#[derive(Debug, Clone)]
pub struct SvgPath {
    points: Vec<Vec2>,
    table: ArcLengthTable,
}

impl SvgPath {
    /// Baut den Pfad aus geparsten Stücken.
    ///
    /// Keine Stücke oder Gesamtlänge 0 → [`TrackError::EmptyPath`].
    pub fn from_segments(segments: &[PathSegment]) -> Result<Self, TrackError> {
        let Some(first) = segments.first() else {
            return Err(TrackError::EmptyPath);
        };
        let mut points = vec![first.start()];
        for segment in segments {
            let steps = match segment {
                PathSegment::Line { .. } => 1,
                PathSegment::Quad { .. } | PathSegment::Cubic { .. } => CURVE_FLATTEN_STEPS,
            };
            points.extend((1..=steps).map(|i| segment.point_at(i as f32 / steps as f32)));
        }

        let table = ArcLengthTable::new(&points);
        if table.total_length() <= DEGENERATE_EPSILON {
            return Err(TrackError::EmptyPath);
        }
        Ok(Self { points, table })
    }

    /// Parst das `d`-Attribut und baut den Pfad.
    pub fn parse(d: &str) -> Result<Self, TrackError> {
        Self::from_segments(&parse_path_data(d)?)
    }

    /// Punkte der abgeflachten Polyline
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

impl PathGeometry for SvgPath {
    fn path_length(&self) -> f32 {
        self.table.total_length()
    }

    fn point_at_length(&self, distance: f32) -> Vec2 {
        let clamped = distance.clamp(0.0, self.path_length());
        match self.table.point_at(&self.points, clamped) {
            Ok(point) => point,
            Err(e) => {
                log::warn!("Pfadpunkt bei {clamped} nicht bestimmbar: {e}");
                self.points.last().copied().unwrap_or(Vec2::ZERO)
            }
        }
    }
}

/// Tastet die Geometrie an `n + 1` gleichabständigen Bogenlängen ab
/// (`0, L/n, …, L`).
pub fn sample_centerline(geometry: &impl PathGeometry, n: usize) -> Result<Vec<Vec2>, TrackError> {
    if n == 0 {
        return Err(TrackError::invalid("Abtastanzahl muss > 0 sein"));
    }
    let total = geometry.path_length();
    if total <= DEGENERATE_EPSILON {
        return Err(TrackError::EmptyPath);
    }
    Ok((0..=n)
        .map(|i| geometry.point_at_length(total * i as f32 / n as f32))
        .collect())
}

/// Komplette Pipeline: SVG-Text → erster Pfad → `n + 1` Mittellinien-Punkte.
pub fn load_centerline_from_svg(svg_content: &str, n: usize) -> Result<Vec<Vec2>> {
    let d = extract_first_path_data(svg_content)?;
    let path = SvgPath::parse(&d).context("Pfaddaten konnten nicht gelesen werden")?;
    let centerline = sample_centerline(&path, n)?;
    log::info!(
        "Mittellinie abgetastet: Pfadlänge {:.1}, {} Punkte",
        path.path_length(),
        centerline.len()
    );
    Ok(centerline)
}
