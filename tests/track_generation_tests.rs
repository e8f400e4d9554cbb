use approx::{assert_abs_diff_eq, assert_relative_eq};
use glam::Vec2;
use heat_track_editor::core::offset_polyline;
use heat_track_editor::{load_centerline_from_svg, BorderSide, KerbSide, TrackError, TrackModel};
use std::collections::HashMap;

const SAMPLE_SVG: &str = include_str!("fixtures/sample_track.svg");

fn fixture_track() -> TrackModel {
    let centerline = load_centerline_from_svg(SAMPLE_SVG, 400).expect("Fixture muss ladbar sein");
    TrackModel::generate(centerline, 20.0, 40.0).expect("Fixture-Track muss generierbar sein")
}

fn straight_centerline() -> Vec<Vec2> {
    vec![Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0)]
}

fn assert_contiguous_numbers(track: &TrackModel) {
    let numbers: Vec<u32> = track.segments().iter().map(|s| s.segment_number).collect();
    let expected: Vec<u32> = (1..=track.segment_count() as u32).collect();
    assert_eq!(numbers, expected);
}

fn assert_number_sides_consistent(track: &TrackModel) {
    let mut sides: HashMap<u32, BorderSide> = HashMap::new();
    for segment in track.segments() {
        if let Some(target) = segment.target_curve_id {
            let side = *sides.entry(target).or_insert(segment.number_side);
            assert_eq!(
                side, segment.number_side,
                "Segment {} weicht von der Nummernseite der Ziel-Kurve {} ab",
                segment.segment_number, target
            );
        }
    }
}

#[test]
fn test_fixture_track_hat_raender_je_mittellinienpunkt() {
    let track = fixture_track();

    assert_eq!(track.centerline().len(), 401);
    assert_eq!(track.left_border().len(), track.centerline().len());
    assert_eq!(track.right_border().len(), track.centerline().len());
    assert!(track.segment_count() > 5);
    assert_contiguous_numbers(&track);
    assert!(track.validate().is_ok());
}

#[test]
fn test_geschlossene_schleife_verwirft_letztes_segment() {
    // Quadrat 100x100, geschlossen: Länge 400, Segmentlänge 50 → 9 Rohsegmente,
    // das letzte liegt auf dem ersten und entfällt.
    let centerline = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(0.0, 100.0),
        Vec2::new(0.0, 0.0),
    ];
    let track = TrackModel::generate(centerline, 10.0, 50.0).unwrap();

    assert_relative_eq!(track.total_length(), 400.0);
    assert_eq!(track.segment_count(), 8);
    assert_contiguous_numbers(&track);
    let last = track.segments().last().unwrap();
    assert_relative_eq!(last.distance_along_track, 350.0);
}

#[test]
fn test_offene_strecke_behaelt_letztes_segment() {
    let track = TrackModel::generate(straight_centerline(), 20.0, 50.0).unwrap();

    // floor(200 / 50) + 1
    assert_eq!(track.segment_count(), 5);
}

#[test]
fn test_raender_sind_spiegelbildlich_zur_mittellinie() {
    let track = fixture_track();
    let center = track.centerline();

    for i in 0..center.len() {
        let left = track.left_border()[i] - center[i];
        let right = track.right_border()[i] - center[i];
        assert_abs_diff_eq!(left.x, -right.x, epsilon = 1e-3);
        assert_abs_diff_eq!(left.y, -right.y, epsilon = 1e-3);
    }
}

#[test]
fn test_versatz_entspricht_abstand_auf_geraden_stuecken() {
    let points: Vec<Vec2> = (0..10).map(|i| Vec2::new(i as f32 * 7.0, i as f32 * 3.0)).collect();
    let left = offset_polyline(&points, 5.0, BorderSide::Left);

    for (p, l) in points.iter().zip(&left) {
        assert_abs_diff_eq!(p.distance(*l), 5.0, epsilon = 1e-4);
    }
}

#[test]
fn test_doppelte_punkte_lassen_rand_nicht_kollabieren() {
    let points = vec![
        Vec2::ZERO,
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(20.0, 0.0),
    ];
    let right = offset_polyline(&points, 4.0, BorderSide::Right);

    for (p, r) in points.iter().zip(&right) {
        assert!(p.distance(*r) > 1.0, "Randpunkt {r} fällt auf {p}");
    }
}

#[test]
fn test_kurve_auf_segment_3_setzt_abstaende_mit_umlauf() {
    let mut track = TrackModel::generate(straight_centerline(), 20.0, 50.0).unwrap();

    assert!(track.toggle_curve(3, 3).unwrap());

    let spaces: Vec<Option<u32>> = track
        .segments()
        .iter()
        .map(|s| s.spaces_to_next_curve)
        .collect();
    assert_eq!(spaces[0], Some(1));
    assert_eq!(spaces[1], Some(0));
    assert_eq!(spaces[3], Some(3));
    assert_eq!(spaces[4], Some(2));
    assert!(track
        .segments()
        .iter()
        .filter(|s| s.segment_number != 3)
        .all(|s| s.target_curve_id == Some(3)));
}

#[test]
fn test_invarianten_nach_bearbeitungsfolge() {
    let mut track = fixture_track();
    let count = track.segment_count() as u32;

    track.toggle_curve(3, 4).unwrap();
    assert_number_sides_consistent(&track);
    track.toggle_number_side(1).unwrap();
    assert_number_sides_consistent(&track);
    track.toggle_curve(count - 1, 2).unwrap();
    assert_number_sides_consistent(&track);
    track.toggle_number_side(count - 2).unwrap();
    assert_number_sides_consistent(&track);
    track.set_kerb_side(2, BorderSide::Left).unwrap();
    track.toggle_white_line(4, BorderSide::Right).unwrap();
    let distance = track.segment(5).unwrap().distance_along_track + 1.0;
    track.reposition_segment(2, distance).unwrap();
    assert_contiguous_numbers(&track);
    assert_number_sides_consistent(&track);
    track.remove_segment(1).unwrap();
    assert_contiguous_numbers(&track);
    assert_number_sides_consistent(&track);
    track.toggle_curve(3, 4).unwrap();
    assert_number_sides_consistent(&track);
    assert!(track.validate().is_ok());
}

#[test]
fn test_kerb_zyklus_kehrt_nach_vier_schritten_zurueck() {
    let mut track = fixture_track();
    let before = track.segment(2).unwrap().clone();

    let states: Vec<Option<KerbSide>> = (0..4).map(|_| track.cycle_kerb(2).unwrap()).collect();

    assert_eq!(
        states,
        vec![Some(KerbSide::Both), Some(KerbSide::Left), Some(KerbSide::Right), None]
    );
    let after = track.segment(2).unwrap();
    assert_eq!(after.has_kerb, before.has_kerb);
    assert_eq!(after.kerb(), before.kerb());
}

#[test]
fn test_kerb_randklicks() {
    let mut track = fixture_track();

    assert_eq!(track.set_kerb_side(1, BorderSide::Left).unwrap(), Some(KerbSide::Left));
    assert_eq!(track.set_kerb_side(1, BorderSide::Left).unwrap(), None);
    assert_eq!(track.set_kerb_side(1, BorderSide::Left).unwrap(), Some(KerbSide::Left));
    assert_eq!(track.set_kerb_side(1, BorderSide::Right).unwrap(), Some(KerbSide::Both));
    assert_eq!(track.set_kerb_side(1, BorderSide::Left).unwrap(), Some(KerbSide::Left));
}

#[test]
fn test_nummernseite_ohne_kurve_ist_fehler_ohne_mutation() {
    let mut track = fixture_track();
    let before = track.clone();

    let err = track.toggle_number_side(2).unwrap_err();

    assert!(matches!(err, TrackError::NoTargetCurve { segment: 2 }));
    assert_eq!(track, before);
}

#[test]
fn test_kerb_gruppen_verbinden_ueberlappende_seiten() {
    let mut track = fixture_track();
    track.cycle_kerb(2).unwrap(); // both
    track.set_kerb_side(3, BorderSide::Left).unwrap();
    track.set_kerb_side(4, BorderSide::Right).unwrap();

    let groups = track.kerb_groups();

    // 2 (both) + 3 (left) verschmelzen, 4 (right) überlappt left nicht
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].segment_numbers, vec![2, 3]);
    assert_eq!(groups[1].segment_numbers, vec![4]);
}
