//! Zeichenbefehle unabhängig von einer Grafik-Bibliothek.

use glam::Vec2;

/// RGBA-Farbe mit Komponenten in [0, 1]
pub type Color = [f32; 4];

/// Ein einzelner Zeichenbefehl in Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gefülltes Polygon
    Polygon { points: Vec<Vec2>, fill: Color },
    /// Offene Polyline, optional gestrichelt (Strich, Lücke)
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        thickness: f32,
        dash: Option<[f32; 2]>,
    },
    /// Einzelne Strecke
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        thickness: f32,
    },
    /// Gefüllter Kreis
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Zentrierter Text
    Label {
        position: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Gibt `true` zurück, wenn der Befehl eine Beschriftung ist.
    pub fn is_label(&self) -> bool {
        matches!(self, DrawCommand::Label { .. })
    }
}
