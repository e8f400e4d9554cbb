//! Sitzungsdatei: zuletzt bearbeiteter Track samt Quell-SVG.

use crate::core::TrackModel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dateiname der Sitzungsdatei im Arbeitsverzeichnis.
pub const SESSION_FILE_NAME: &str = "last_track_data.json";

/// Inhalt der Sitzungsdatei
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    /// Bearbeiteter Track
    pub track: TrackModel,
    /// Pfad der SVG-Datei, aus der die Mittellinie stammt
    #[serde(default)]
    pub source_file: Option<PathBuf>,
}

/// Schreibt die Sitzung als JSON.
pub fn save_session(path: &Path, session: &SessionFile) -> Result<()> {
    let json =
        serde_json::to_string_pretty(session).context("Sitzung konnte nicht serialisiert werden")?;
    std::fs::write(path, json).with_context(|| {
        format!("Sitzung konnte nicht nach {} geschrieben werden", path.display())
    })?;
    log::info!(
        "Sitzung gespeichert nach: {} ({} Segmente)",
        path.display(),
        session.track.segment_count()
    );
    Ok(())
}

/// Lädt eine Sitzung und prüft den enthaltenen Track.
pub fn load_session(path: &Path) -> Result<SessionFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Sitzung {} konnte nicht gelesen werden", path.display()))?;
    let session: SessionFile = serde_json::from_str(&json)
        .with_context(|| format!("Sitzung {} ist kein gültiges JSON", path.display()))?;
    session.track.validate().with_context(|| {
        format!("Sitzung {} enthält einen inkonsistenten Track", path.display())
    })?;
    log::info!(
        "Sitzung geladen aus: {} ({} Segmente)",
        path.display(),
        session.track.segment_count()
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "heat_track_session_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn sitzung_speichern_und_laden() {
        let mut track = TrackModel::generate(
            vec![Vec2::ZERO, Vec2::new(300.0, 0.0), Vec2::new(300.0, 300.0)],
            50.0,
            100.0,
        )
        .unwrap();
        track.toggle_curve(4, 2).unwrap();
        let session = SessionFile {
            track,
            source_file: Some(PathBuf::from("strecke.svg")),
        };

        let path = temp_path("roundtrip");
        save_session(&path, &session).unwrap();
        let loaded = load_session(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, session);
    }

    #[test]
    fn fehlende_sitzung_ist_fehler() {
        assert!(load_session(&temp_path("fehlt_garantiert")).is_err());
    }
}
