#![no_main]

use libfuzzer_sys::fuzz_target;
use race_track_editor::{parse_track_file, Track};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(records) = parse_track_file(content) else {
        return;
    };

    let mut track = Track::new();
    if track.load_from_records(&records).is_ok() {
        // Erfolgreich gebaute Strecken enthalten nur endliche Randpunkte
        for sample in track.boundary_ribbon() {
            assert!(sample.left.is_finite() && sample.right.is_finite());
        }
    }
});
