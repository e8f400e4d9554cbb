//! Heat Track Generator (CLI).
//!
//! Erzeugt aus der ersten `<path>`-Mittellinie einer SVG-Datei ein
//! segmentiertes Track-Modell und schreibt es als JSON.
//!
//! Aufruf: `heat-track <input.svg> [output.json]`

use anyhow::{Context, Result};
use heat_track_editor::{load_centerline_from_svg, track_to_json, TrackModel, TrackOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Standard-Ausgabedatei, wenn kein Ziel angegeben ist.
const DEFAULT_OUTPUT: &str = "track_output.json";

fn main() -> ExitCode {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Heat Track Generator v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        eprintln!("Aufruf: heat-track <input.svg> [output.json]");
        return ExitCode::FAILURE;
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let options = TrackOptions::load_from_file(&TrackOptions::config_path());

    match run(&input, &output, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Track-Generierung fehlgeschlagen: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path, options: &TrackOptions) -> Result<()> {
    let svg_content = std::fs::read_to_string(input)
        .with_context(|| format!("SVG {} konnte nicht gelesen werden", input.display()))?;
    let centerline = load_centerline_from_svg(&svg_content, options.sample_count)?;

    let mut track = TrackModel::generate(centerline, options.track_width, options.segment_length)?;
    track.set_border_offset_ratio(options.border_offset_ratio)?;

    log::info!(
        "Track: Länge {:.1}, {} Segmente",
        track.total_length(),
        track.segment_count()
    );

    let json = track_to_json(&track)?;
    std::fs::write(output, json)
        .with_context(|| format!("Ausgabe {} konnte nicht geschrieben werden", output.display()))?;
    log::info!("Track geschrieben nach: {}", output.display());
    Ok(())
}
