#![no_main]

use heat_track_editor::{track_from_json, track_to_json};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Geladene Tracks haben die Invarianten geprüft und müssen sich erneut schreiben lassen
    if let Ok(track) = track_from_json(text) {
        let _ = track_to_json(&track);
        let _ = track.kerb_groups();
        let _ = track.bounds();
    }
});
