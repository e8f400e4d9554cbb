//! Handler für den Track-Lebenszyklus und Datei-Operationen.

use crate::app::AppState;
use crate::core::{TrackError, TrackModel};
use crate::shared::TrackOptions;
use crate::storage::{self, SessionFile};
use crate::svg::load_centerline_from_svg;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lädt eine SVG-Datei, generiert den Track mit den aktuellen Optionen und installiert ihn.
pub fn load_svg(state: &mut AppState, path: PathBuf) -> Result<()> {
    let svg_content = std::fs::read_to_string(&path)
        .with_context(|| format!("SVG {} konnte nicht gelesen werden", path.display()))?;
    let centerline = load_centerline_from_svg(&svg_content, state.options.sample_count)?;

    let mut track = TrackModel::generate(
        centerline,
        state.options.track_width,
        state.options.segment_length,
    )?;
    track.set_border_offset_ratio(state.options.border_offset_ratio)?;

    log::info!(
        "SVG geladen: {} ({} Segmente)",
        path.display(),
        track.segment_count()
    );
    state.set_status(format!(
        "{} geladen: {} Segmente",
        path.display(),
        track.segment_count()
    ));
    install_track(state, track);
    state.source_path = Some(path);
    Ok(())
}

/// Generiert den Track mit neuer Breite und Segmentlänge über derselben Mittellinie.
pub fn regenerate(state: &mut AppState, track_width: f32, segment_length: f32) -> Result<()> {
    let Some(current) = state.track.as_deref() else {
        state.set_status("Kein Track geladen");
        log::debug!("Neu generieren: kein Track geladen");
        return Ok(());
    };
    let track = current.regenerate(track_width, segment_length)?;

    state.set_status(format!("Track neu generiert: {} Segmente", track.segment_count()));
    install_track(state, track);
    state.options.track_width = track_width;
    state.options.segment_length = segment_length;
    Ok(())
}

/// Berechnet die Ränder mit neuem Versatz-Verhältnis neu.
pub fn set_border_offset_ratio(state: &mut AppState, ratio: f32) -> Result<()> {
    let Some(current) = state.track.as_deref() else {
        if !(ratio.is_finite() && ratio > 0.0) {
            let reason = format!("Randversatz-Verhältnis muss > 0 sein, ist {ratio}");
            return Err(TrackError::invalid(reason).into());
        }
        state.options.border_offset_ratio = ratio;
        return Ok(());
    };
    let mut track = current.clone();
    track.set_border_offset_ratio(ratio)?;

    state.record_undo_snapshot();
    state.options.border_offset_ratio = ratio;
    state.track = Some(Arc::new(track));
    state.set_status(format!("Randversatz: {ratio:.2}"));
    Ok(())
}

/// Schreibt den aktuellen Track als JSON.
pub fn export_track(state: &mut AppState, path: &Path) -> Result<()> {
    let Some(track) = state.track.as_deref() else {
        anyhow::bail!("Kein Track zum Exportieren vorhanden");
    };
    let json = storage::track_to_json(track)?;
    std::fs::write(path, json)
        .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?;

    log::info!("Track exportiert nach: {}", path.display());
    state.set_status(format!("Exportiert nach {}", path.display()));
    Ok(())
}

/// Speichert die aktuelle Sitzung (Track + Quell-SVG).
pub fn save_session(state: &mut AppState, path: &Path) -> Result<()> {
    let Some(track) = state.track.as_deref() else {
        anyhow::bail!("Kein Track für die Sitzung vorhanden");
    };
    let session = SessionFile {
        track: track.clone(),
        source_file: state.source_path.clone(),
    };
    storage::save_session(path, &session)?;
    state.set_status(format!("Sitzung gespeichert: {}", path.display()));
    Ok(())
}

/// Lädt eine Sitzung und ersetzt den aktuellen Track.
pub fn load_session(state: &mut AppState, path: &Path) -> Result<()> {
    let session = storage::load_session(path)?;
    let track = session.track;

    state.set_status(format!("Sitzung geladen: {} Segmente", track.segment_count()));
    let (track_width, segment_length) = (track.track_width(), track.segment_length());
    let border_offset_ratio = track.border_offset_ratio();
    install_track(state, track);
    state.options.track_width = track_width;
    state.options.segment_length = segment_length;
    state.options.border_offset_ratio = border_offset_ratio;
    state.source_path = session.source_file;
    Ok(())
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: TrackOptions) -> Result<()> {
    state.editor.default_speed_limit = options.default_speed_limit;
    state.options = options;
    state.options.save_to_file(&state.config_path)?;
    state.set_status("Optionen übernommen");
    Ok(())
}

/// Installiert einen neuen Track als undo-fähigen Schritt und hebt die Auswahl auf.
///
/// Der Snapshot hält die Optionen vor der Änderung fest, Aufrufer passen
/// `state.options` deshalb erst danach an.
fn install_track(state: &mut AppState, track: TrackModel) {
    state.record_undo_snapshot();
    state.track = Some(Arc::new(track));
    state.editor.selected_segment = None;
}
