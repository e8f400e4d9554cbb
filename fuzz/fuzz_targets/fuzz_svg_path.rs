#![no_main]

use heat_track_editor::svg::{extract_first_path_data, parse_path_data};
use heat_track_editor::{load_centerline_from_svg, TrackModel};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Rohe Pfaddaten
    let _ = parse_path_data(text);

    // Vollständiges SVG bis zum Track
    if extract_first_path_data(text).is_ok() {
        if let Ok(centerline) = load_centerline_from_svg(text, 64) {
            let _ = TrackModel::generate(centerline, 20.0, 10.0);
        }
    }
});
