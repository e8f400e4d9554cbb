//! Darstellung eines Track-Modells als reine Zeichenliste.
//!
//! Das Frontend übersetzt die Befehle in seine eigene Grafik-API; dieses
//! Modul kennt keine Grafik-Bibliothek.

mod draw_list;
mod types;

pub use draw_list::build_draw_list;
pub use types::{Color, DrawCommand};
