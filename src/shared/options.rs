//! Zentrale Konfiguration für den Heat Track Editor.
//!
//! `TrackOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Generierung ─────────────────────────────────────────────────────

/// Standard-Streckenbreite in SVG-Einheiten.
pub const TRACK_WIDTH: f32 = 200.0;
/// Standard-Segmentlänge (Bogenlänge) in SVG-Einheiten.
pub const SEGMENT_LENGTH: f32 = 400.0;
/// Anzahl der Abtast-Intervalle der Mittellinie (ergibt n + 1 Punkte).
pub const SAMPLE_COUNT: usize = 1000;
/// Tempolimit, das eine frisch markierte Kurve erhält.
pub const DEFAULT_SPEED_LIMIT: u32 = 3;
/// Randversatz relativ zur halben Streckenbreite.
pub const BORDER_OFFSET_RATIO: f32 = 1.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Füllfarbe der Fahrbahn (RGBA: Dunkelgrau).
pub const SURFACE_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Farbe der Ränder, Trennlinien und weißen Linien (RGBA: Weiß).
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der gestrichelten Mittellinie (RGBA: Hellgrau).
pub const CENTERLINE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
/// Rote Farbe für Kerbs, Outline und Kurven-Marker.
pub const ACCENT_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe der Segmentnummern (RGBA: Gelb).
pub const NUMBER_COLOR: [f32; 4] = [1.0, 0.85, 0.0, 1.0];
/// Breite der Kerb-Streifen in Welteinheiten.
pub const KERB_WIDTH: f32 = 12.0;
/// Abstand der weißen Linie vom Rand nach innen.
pub const WHITE_LINE_INSET: f32 = 10.0;
/// Abstand der Segmentnummer außerhalb des Rands.
pub const NUMBER_LABEL_OFFSET: f32 = 30.0;
/// Schriftgröße der Beschriftungen in Welteinheiten.
pub const LABEL_SIZE: f32 = 24.0;
/// Radius der Kurven-Marker.
pub const CURVE_MARKER_RADIUS: f32 = 20.0;
/// Linienstärke von Rändern und Trennlinien.
pub const LINE_THICKNESS: f32 = 2.0;
/// Strichmuster (Strich, Lücke) für Mittellinie und Outline.
pub const DASH_PATTERN: [f32; 2] = [20.0, 20.0];

// ── Darstellungs-Optionen ───────────────────────────────────────────

/// Farben und Maße für die Zeichenliste.
/// Wird als Teil der `TrackOptions` persistent gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderOptions {
    /// Füllfarbe der Fahrbahn
    pub surface_color: [f32; 4],
    /// Farbe für Ränder, Trennlinien, weiße Linien
    pub line_color: [f32; 4],
    /// Farbe der Mittellinie
    pub centerline_color: [f32; 4],
    /// Akzentfarbe (Kerb, Outline, Kurven-Marker)
    pub accent_color: [f32; 4],
    /// Farbe der Segmentnummern
    pub number_color: [f32; 4],
    /// Kerb-Streifenbreite
    pub kerb_width: f32,
    /// Einzug der weißen Linie
    pub white_line_inset: f32,
    /// Abstand der Nummer außerhalb des Rands
    pub number_label_offset: f32,
    /// Schriftgröße
    pub label_size: f32,
    /// Radius der Kurven-Marker
    pub curve_marker_radius: f32,
    /// Linienstärke
    pub line_thickness: f32,
    /// Strichmuster (Strich, Lücke)
    pub dash_pattern: [f32; 2],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            surface_color: SURFACE_COLOR,
            line_color: LINE_COLOR,
            centerline_color: CENTERLINE_COLOR,
            accent_color: ACCENT_COLOR,
            number_color: NUMBER_COLOR,
            kerb_width: KERB_WIDTH,
            white_line_inset: WHITE_LINE_INSET,
            number_label_offset: NUMBER_LABEL_OFFSET,
            label_size: LABEL_SIZE,
            curve_marker_radius: CURVE_MARKER_RADIUS,
            line_thickness: LINE_THICKNESS,
            dash_pattern: DASH_PATTERN,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `heat_track_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackOptions {
    // ── Generierung ─────────────────────────────────────────────
    /// Streckenbreite
    pub track_width: f32,
    /// Segmentlänge
    pub segment_length: f32,
    /// Abtast-Intervalle der Mittellinie
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Tempolimit für neu markierte Kurven
    #[serde(default = "default_speed_limit")]
    pub default_speed_limit: u32,
    /// Randversatz relativ zur halben Breite
    #[serde(default = "default_border_offset_ratio")]
    pub border_offset_ratio: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Farben und Maße der Zeichenliste
    #[serde(default)]
    pub render: RenderOptions,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            track_width: TRACK_WIDTH,
            segment_length: SEGMENT_LENGTH,
            sample_count: SAMPLE_COUNT,
            default_speed_limit: DEFAULT_SPEED_LIMIT,
            border_offset_ratio: BORDER_OFFSET_RATIO,
            render: RenderOptions::default(),
        }
    }
}

/// Serde-Default für `sample_count` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_sample_count() -> usize {
    SAMPLE_COUNT
}

/// Serde-Default für `default_speed_limit`.
fn default_speed_limit() -> u32 {
    DEFAULT_SPEED_LIMIT
}

/// Serde-Default für `border_offset_ratio`.
fn default_border_offset_ratio() -> f32 {
    BORDER_OFFSET_RATIO
}

impl TrackOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("heat_track_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("heat_track_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "heat_track_options_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_fehlende_datei_liefert_standardwerte() {
        let opts = TrackOptions::load_from_file(&temp_path("fehlt_garantiert"));
        assert_eq!(opts, TrackOptions::default());
        assert_eq!(opts.track_width, 200.0);
        assert_eq!(opts.segment_length, 400.0);
        assert_eq!(opts.sample_count, 1000);
        assert_eq!(opts.default_speed_limit, 3);
    }

    #[test]
    fn test_speichern_und_laden() {
        let path = temp_path("roundtrip");
        let mut opts = TrackOptions {
            track_width: 120.0,
            segment_length: 250.0,
            ..TrackOptions::default()
        };
        opts.render.kerb_width = 8.0;
        opts.save_to_file(&path).expect("Speichern fehlgeschlagen");

        let loaded = TrackOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_teilweise_datei_ergaenzt_defaults() {
        let opts: TrackOptions =
            toml::from_str("track_width = 80.0\nsegment_length = 100.0\n").unwrap();
        assert_eq!(opts.track_width, 80.0);
        assert_eq!(opts.sample_count, SAMPLE_COUNT);
        assert_eq!(opts.border_offset_ratio, BORDER_OFFSET_RATIO);
        assert_eq!(opts.render, RenderOptions::default());
    }

    #[test]
    fn test_kaputte_datei_faellt_auf_defaults_zurueck() {
        let path = temp_path("kaputt");
        std::fs::write(&path, "track_width = \"breit\"").unwrap();
        let opts = TrackOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(opts, TrackOptions::default());
    }
}
