use super::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

fn straight_track() -> TrackModel {
    TrackModel::generate(
        vec![Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0)],
        20.0,
        50.0,
    )
    .expect("Gerade Strecke muss generierbar sein")
}

fn assert_contiguous_numbers(track: &TrackModel) {
    let numbers: Vec<u32> = track.segments().iter().map(|s| s.segment_number).collect();
    let expected: Vec<u32> = (1..=track.segment_count() as u32).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn test_gerade_strecke_szenario() {
    let track = straight_track();
    assert_relative_eq!(track.total_length(), 200.0);
    assert_eq!(track.segment_count(), 5);
    assert_contiguous_numbers(&track);
    assert!(track.segments().iter().all(|s| !s.is_curve));
    assert!(track
        .segments()
        .iter()
        .all(|s| s.spaces_to_next_curve.is_none()));

    assert_eq!(track.left_border().len(), 3);
    assert_eq!(track.right_border().len(), 3);
    assert_eq!(track.left_border()[1], Vec2::new(100.0, 10.0));
    assert_eq!(track.right_border()[1], Vec2::new(100.0, -10.0));
}

#[test]
fn test_generierung_bricht_bei_ungueltiger_eingabe_ab() {
    assert!(matches!(
        TrackModel::generate(vec![Vec2::ZERO], 20.0, 50.0),
        Err(TrackError::InvalidInput { .. })
    ));
    assert!(TrackModel::generate(vec![Vec2::ZERO, Vec2::X], 0.0, 50.0).is_err());
    assert!(TrackModel::generate(vec![Vec2::ZERO, Vec2::X], 20.0, -5.0).is_err());
}

#[test]
fn test_zu_kurze_strecke_hat_keine_segmente() {
    let track = TrackModel::generate(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], 4.0, 50.0).unwrap();
    assert_eq!(track.segment_count(), 0);
    assert_eq!(track.left_border().len(), 2);
}

#[test]
fn test_bounds_umfassen_raender() {
    let track = straight_track();
    let bounds = track.bounds().expect("Bounds erwartet");
    assert_eq!(bounds.min, Vec2::new(0.0, -10.0));
    assert_eq!(bounds.max, Vec2::new(200.0, 10.0));
}

#[test]
fn test_border_slice_ueber_anteile() {
    let points: Vec<Vec2> = (0..=10).map(|i| Vec2::new(i as f32 * 10.0, 0.0)).collect();
    let track = TrackModel::generate(points, 10.0, 20.0).unwrap();

    let slice = track.border_slice(BorderSide::Left, 0.25, 0.5);
    // floor(0.25 × 10) = 2 bis ceil(0.5 × 10) = 5
    assert_eq!(slice.len(), 4);
    assert_eq!(slice[0], Vec2::new(20.0, 5.0));
    assert_eq!(slice[3], Vec2::new(50.0, 5.0));

    let whole = track.border_slice(BorderSide::Right, -1.0, 2.0);
    assert_eq!(whole.len(), 11);

    let swapped = track.border_slice(BorderSide::Left, 0.5, 0.25);
    assert_eq!(swapped, slice);
}

#[test]
fn test_randversatz_aendern_laesst_segmente_unberuehrt() {
    let mut track = straight_track();
    track.toggle_curve(3, 3).unwrap();
    let segments_before = track.segments().to_vec();

    track.set_border_offset_ratio(0.5).unwrap();
    assert_eq!(track.left_border()[0], Vec2::new(0.0, 5.0));
    assert_eq!(track.left_border().len(), track.centerline().len());
    assert_eq!(track.segments(), segments_before.as_slice());

    assert!(track.set_border_offset_ratio(0.0).is_err());
    assert_abs_diff_eq!(track.border_offset(), 5.0);
}

#[test]
fn test_regenerieren_verwirft_attribute() {
    let mut track = straight_track();
    track.toggle_curve(2, 3).unwrap();
    let rebuilt = track.regenerate(40.0, 100.0).unwrap();
    assert_eq!(rebuilt.segment_count(), 3);
    assert!(rebuilt.segments().iter().all(|s| !s.is_curve));
    assert_eq!(rebuilt.left_border()[0], Vec2::new(0.0, 20.0));
}

#[test]
fn test_segment_mittelpunkt_trennlinie_und_spanne() {
    let track = straight_track();
    assert_eq!(track.segment_center(2), Some(Vec2::new(50.0, 0.0)));
    assert_eq!(
        track.segment_divider(2),
        Some((Vec2::new(50.0, -10.0), Vec2::new(50.0, 10.0)))
    );
    assert_eq!(track.segment_span(2), Some((50.0, 100.0)));
    assert_eq!(track.segment_span(5), Some((200.0, 200.0)));
    assert_eq!(track.run_span(1, 3), Some((0.0, 150.0)));
    assert_eq!(track.segment_center(9), None);
}

#[test]
fn test_segment_verschieben_sortiert_und_nummeriert_neu() {
    let mut track = straight_track();
    track.toggle_curve(2, 4).unwrap();

    // Segment 2 (Kurve, bei 50) hinter Segment 4 (bei 150) schieben
    let new_number = track.reposition_segment(2, 170.0).unwrap();
    assert_eq!(new_number, 4);
    assert_contiguous_numbers(&track);

    let moved = track.segment(4).unwrap();
    assert!(moved.is_curve);
    assert_relative_eq!(moved.distance_along_track, 170.0);
    assert_eq!(moved.centerline_index, 1);
    assert_relative_eq!(moved.interpolation_t, 0.7);

    // Ziel-Kurve folgt der neuen Nummer
    assert_eq!(track.segment(1).unwrap().target_curve_id, Some(4));
    assert_eq!(track.segment(1).unwrap().spaces_to_next_curve, Some(2));
}

#[test]
fn test_verschieben_ausserhalb_der_strecke_veraendert_nichts() {
    let mut track = straight_track();
    let before = track.clone();
    assert!(matches!(
        track.reposition_segment(2, 500.0),
        Err(TrackError::OutOfRange { .. })
    ));
    assert_eq!(track, before);
}

#[test]
fn test_nicht_endliche_distanz_veraendert_nichts() {
    let mut track = straight_track();
    let before = track.clone();

    for distance in [f32::NAN, f32::INFINITY] {
        assert!(matches!(
            track.insert_segment_at(distance),
            Err(TrackError::OutOfRange { .. })
        ));
        assert!(matches!(
            track.reposition_segment(3, distance),
            Err(TrackError::OutOfRange { .. })
        ));
    }

    assert_eq!(track, before);
    assert!(track.segments().iter().all(|s| s.distance_along_track.is_finite()));
}

#[test]
fn test_border_slice_mit_nicht_endlichen_anteilen() {
    let points: Vec<Vec2> = (0..=20).map(|i| Vec2::new(i as f32 * 10.0, 0.0)).collect();
    let track = TrackModel::generate(points, 10.0, 20.0).unwrap();

    // NaN zählt als 0: Ausschnitt vom Anfang bis zum endlichen Anteil
    let slice = track.border_slice(BorderSide::Left, f32::NAN, 0.5);
    assert_eq!(slice.len(), 11);
    let slice = track.border_slice(BorderSide::Left, 1.0, f32::NAN);
    assert_eq!(slice.len(), 21);
    let slice = track.centerline_slice(f32::NAN, f32::NAN);
    assert_eq!(slice, &[Vec2::ZERO]);
}

#[test]
fn test_einfuegen_und_entfernen_halten_nummern_lueckenlos() {
    let mut track = straight_track();
    let inserted = track.insert_segment_at(75.0).unwrap();
    assert_eq!(inserted, 3);
    assert_eq!(track.segment_count(), 6);
    assert_contiguous_numbers(&track);
    assert_relative_eq!(track.segment(3).unwrap().distance_along_track, 75.0);

    let removed = track.remove_segment(1).unwrap();
    assert_relative_eq!(removed.distance_along_track, 0.0);
    assert_eq!(track.segment_count(), 5);
    assert_contiguous_numbers(&track);
    assert_relative_eq!(track.segment(1).unwrap().distance_along_track, 50.0);

    assert!(track.remove_segment(42).is_err());
}

#[test]
fn test_gruppen_ueber_modell() {
    let mut track = straight_track();
    track.set_kerb_side(1, BorderSide::Left).unwrap();
    track.set_kerb_side(2, BorderSide::Left).unwrap();
    track.toggle_white_line(4, BorderSide::Right).unwrap();
    track.toggle_outline(5).unwrap();

    let kerbs = track.kerb_groups();
    assert_eq!(kerbs.len(), 1);
    assert_eq!(kerbs[0].segment_numbers, vec![1, 2]);
    assert_eq!(track.white_line_groups()[0].segment_numbers, vec![4]);
    assert_eq!(track.outline_groups()[0].segment_numbers, vec![5]);
}

#[test]
fn test_validate_erkennt_kaputte_modelle() {
    let track = straight_track();
    assert!(track.validate().is_ok());

    let mut broken = track.clone();
    broken.left_border.pop();
    assert!(broken.validate().is_err());

    let mut gap = track.clone();
    gap.segments[2].segment_number = 9;
    assert!(gap.validate().is_err());
}
