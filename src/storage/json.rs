//! JSON-Export und -Import eines Track-Modells.

use crate::core::TrackModel;
use anyhow::{Context, Result};

/// Serialisiert ein Track-Modell als eingerücktes JSON.
pub fn track_to_json(track: &TrackModel) -> Result<String> {
    serde_json::to_string_pretty(track).context("Track konnte nicht serialisiert werden")
}

/// Liest ein Track-Modell aus JSON und prüft seine Invarianten.
///
/// Ein Modell mit falscher Randpunkt-Anzahl oder lückenhafter Nummerierung
/// wird abgelehnt statt installiert.
pub fn track_from_json(json: &str) -> Result<TrackModel> {
    let track: TrackModel =
        serde_json::from_str(json).context("Track-JSON konnte nicht gelesen werden")?;
    track.validate().context("Track-JSON ist inkonsistent")?;
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BorderSide, TrackError};
    use glam::Vec2;

    fn sample_track() -> TrackModel {
        let centerline: Vec<Vec2> = (0..=20)
            .map(|i| {
                let angle = i as f32 / 20.0 * std::f32::consts::PI;
                Vec2::new(angle.cos() * 300.0, angle.sin() * 300.0)
            })
            .collect();
        let mut track = TrackModel::generate(centerline, 40.0, 100.0).unwrap();
        track.toggle_curve(3, 4).unwrap();
        track.set_kerb_side(2, BorderSide::Right).unwrap();
        track.toggle_white_line(5, BorderSide::Left).unwrap();
        track.toggle_outline(6).unwrap();
        track
    }

    #[test]
    fn json_roundtrip_erhaelt_modell_exakt() {
        let track = sample_track();
        let json = track_to_json(&track).unwrap();
        let loaded = track_from_json(&json).unwrap();
        assert_eq!(loaded, track);
    }

    #[test]
    fn seiten_werden_klein_geschrieben() {
        let json = track_to_json(&sample_track()).unwrap();
        assert!(json.contains("\"kerb_side\": \"right\""));
        assert!(json.contains("\"number_side\": \"left\""));
    }

    #[test]
    fn inkonsistentes_json_wird_abgelehnt() {
        let track = sample_track();
        let mut value: serde_json::Value =
            serde_json::from_str(&track_to_json(&track).unwrap()).unwrap();
        value["left_border"]
            .as_array_mut()
            .expect("left_border ist ein Array")
            .pop();
        let err = track_from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackError>(),
            Some(TrackError::InvalidInput { .. })
        ));
    }

    #[test]
    fn kaputtes_json_liefert_fehler() {
        assert!(track_from_json("{ \"centerline\": 5 }").is_err());
        assert!(track_from_json("kein json").is_err());
    }
}
