//! Bogenlängen-Index über einer Polyline.
//!
//! Die Tabelle speichert die kumulierte Distanz je Punkt. Abfragen in
//! aufsteigender Reihenfolge laufen über einen vorwärts wandernden Cursor
//! (amortisiert O(n) für alle Abfragen zusammen), Einzelabfragen starten per
//! Binärsuche.

use super::error::TrackError;
use super::geometry::{point_on_polyline, DEGENERATE_EPSILON};
use super::segment::TrackPosition;
use glam::Vec2;

/// Relative Toleranz, mit der eine Ziel-Distanz die Gesamtlänge überschreiten
/// darf (f32-Rundung bei `i × segment_length`).
const LENGTH_TOLERANCE: f32 = 1e-5;

/// Kumulierte Distanztabelle, `distances[0] == 0`, monoton nicht fallend.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    distances: Vec<f32>,
}

impl ArcLengthTable {
    /// Baut die Tabelle über die gegebene Polyline.
    pub fn new(points: &[Vec2]) -> Self {
        let mut distances = Vec::with_capacity(points.len());
        let mut total = 0.0f32;
        if !points.is_empty() {
            distances.push(0.0);
        }
        for w in points.windows(2) {
            total += w[0].distance(w[1]);
            distances.push(total);
        }
        Self { distances }
    }

    /// Kumulierte Distanzen je Punkt
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Gesamtlänge der Polyline (0 bei weniger als 2 Punkten)
    pub fn total_length(&self) -> f32 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    /// Anzahl der indizierten Punkte
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte indiziert sind.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Cursor ab Intervall 0 für aufsteigende Abfragen.
    pub fn cursor(&self) -> ArcLengthCursor<'_> {
        ArcLengthCursor {
            table: self,
            index: 0,
            last_valid: None,
        }
    }

    /// Einzelabfrage: sucht das Startintervall per Binärsuche.
    pub fn locate(&self, distance: f32) -> Result<TrackPosition, TrackError> {
        let first_not_below = self.distances.partition_point(|&d| d < distance);
        let mut cursor = self.cursor();
        cursor.index = first_not_below.saturating_sub(1);
        cursor.locate(distance)
    }

    /// Punkt auf `points` bei Bogenlänge `distance`.
    ///
    /// `points` muss die Polyline sein, über die die Tabelle gebaut wurde.
    pub fn point_at(&self, points: &[Vec2], distance: f32) -> Result<Vec2, TrackError> {
        let position = self.locate(distance)?;
        point_on_polyline(points, position.centerline_index, position.interpolation_t)
            .ok_or(TrackError::OutOfRange {
                distance,
                total: self.total_length(),
            })
    }

    fn out_of_range(&self, distance: f32) -> TrackError {
        TrackError::OutOfRange {
            distance,
            total: self.total_length(),
        }
    }
}

/// Vorwärts wandernder Cursor über einer [`ArcLengthTable`].
///
/// Abfragen müssen aufsteigend erfolgen; der Cursor geht nie zurück.
#[derive(Debug, Clone)]
pub struct ArcLengthCursor<'a> {
    table: &'a ArcLengthTable,
    index: usize,
    last_valid: Option<usize>,
}

impl ArcLengthCursor<'_> {
    /// Sucht das Intervall `[i, i + 1]` mit der Ziel-Distanz und liefert `(i, t)`.
    ///
    /// Intervalle der Länge 0 (doppelte Punkte) werden übersprungen, ohne den
    /// Cursor anzuhalten. `t` wird auf [0, 1] geklemmt.
    pub fn locate(&mut self, distance: f32) -> Result<TrackPosition, TrackError> {
        let table = self.table;
        let n = table.distances.len();
        let total = table.total_length();
        if n < 2
            || !distance.is_finite()
            || distance < 0.0
            || distance > total + total * LENGTH_TOLERANCE
        {
            return Err(table.out_of_range(distance));
        }
        let target = distance.min(total);

        while self.index + 1 < n {
            let lo = table.distances[self.index];
            let hi = table.distances[self.index + 1];
            let span = hi - lo;

            if span <= DEGENERATE_EPSILON {
                self.index += 1;
                continue;
            }
            self.last_valid = Some(self.index);
            if target > hi {
                self.index += 1;
                continue;
            }

            let t = ((target - lo) / span).clamp(0.0, 1.0);
            return Ok(TrackPosition {
                centerline_index: self.index,
                interpolation_t: t,
            });
        }

        // Nur noch entartete Intervalle am Ende: letztes gültiges Intervall, t = 1
        match self.last_valid {
            Some(index) => Ok(TrackPosition {
                centerline_index: index,
                interpolation_t: 1.0,
            }),
            None => Err(table.out_of_range(distance)),
        }
    }
}
