use super::*;
use approx::assert_relative_eq;

const STRAIGHT: &str = "0;0,10;0,20;0,30;0";
const CURVE: &str = "100.0;200.0,150.0;180.0,200.0;220.0,260.0;200.0";

fn pt(x: f64, y: f64) -> ControlPoint {
    ControlPoint::new(x, y)
}

#[test]
fn test_new_track_is_empty() {
    let track = Track::new();
    assert!(track.is_empty());
    assert_eq!(track.segment_count(), 0);
    assert!(track.boundary_ribbon().is_empty());
    assert!(track.boundary_lines().is_empty());
}

#[test]
fn test_load_straight_line() {
    let mut track = Track::new();
    let added = track.load_from_source([STRAIGHT]).expect("Laden erwartet");
    assert_eq!(added, 1);
    assert_eq!(track.segment_count(), 1);

    let centerline = track.segments()[0].centerline();
    assert_relative_eq!(centerline[0].x, 0.0);
    assert_relative_eq!(centerline.last().unwrap().x, 30.0, epsilon = 1e-9);
    for w in centerline.windows(2) {
        assert_relative_eq!(w[1].y, 0.0);
        assert!(w[1].x > w[0].x);
    }
}

#[test]
fn test_load_keeps_record_order() {
    let lines = [
        "0;0,10;0,20;0,30;0",
        "30;0,40;10,50;10,60;0",
        "60;0,70;-10,80;-10,90;0",
    ];
    let mut track = Track::new();
    track.load_from_source(lines).expect("Laden erwartet");

    assert_eq!(track.segment_count(), 3);
    let starts: Vec<f64> = track
        .segments()
        .iter()
        .map(|s| s.control_points()[0].x)
        .collect();
    assert_eq!(starts, vec![0.0, 30.0, 60.0]);
}

#[test]
fn test_load_three_points_fails_with_parse_error() {
    let mut track = Track::new();
    let err = track
        .load_from_source(["0;0,10;0,20;0"])
        .expect_err("Fehler erwartet");
    assert!(matches!(err, TrackError::Parse { line: 1, .. }));
}

#[test]
fn test_load_non_numeric_fails_with_parse_error() {
    let mut track = Track::new();
    let err = track
        .load_from_source(["abc;0,10;0,20;0,30;0"])
        .expect_err("Fehler erwartet");
    assert!(matches!(err, TrackError::Parse { line: 1, .. }));
}

#[test]
fn test_failed_load_leaves_track_untouched() {
    let mut track = Track::new();
    track.load_from_source([CURVE]).expect("Laden erwartet");

    // Zweite Zeile degeneriert, dritte fehlerhaft: nichts darf angehängt werden
    let err = track
        .load_from_source([STRAIGHT, "5;5,5;5,5;5,5;5", STRAIGHT])
        .expect_err("Fehler erwartet");
    assert_eq!(err, TrackError::DegenerateSegment { sample: 0 });
    assert_eq!(track.segment_count(), 1);

    let err = track
        .load_from_source([STRAIGHT, STRAIGHT, "1;2,3"])
        .expect_err("Fehler erwartet");
    assert!(matches!(err, TrackError::Parse { line: 3, .. }));
    assert_eq!(track.segment_count(), 1);
}

#[test]
fn test_append_segment_rejects_degenerate() {
    let mut track = Track::new();
    let p = pt(1.0, 1.0);
    assert!(track.append_segment(p, p, p, p).is_err());
    assert!(track.is_empty());

    let segment = track
        .append_segment(pt(0.0, 0.0), pt(1.0, 2.0), pt(3.0, 2.0), pt(4.0, 0.0))
        .expect("Segment erwartet");
    assert_eq!(segment.sample_count(), 20);
    assert_eq!(track.segment_count(), 1);
}

#[test]
fn test_append_does_not_enforce_continuity() {
    let mut track = Track::new();
    track
        .append_segment(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0))
        .unwrap();
    track
        .append_segment(pt(500.0, 500.0), pt(501.0, 0.0), pt(502.0, 0.0), pt(503.0, 9.0))
        .unwrap();
    assert_eq!(track.segment_count(), 2);
}

#[test]
fn test_ribbon_length_is_sum_of_pairs() {
    let options = TrackOptions {
        sample_count: 7,
        ..TrackOptions::default()
    };
    let mut track = Track::with_options(options);
    track.load_from_source([STRAIGHT, CURVE, STRAIGHT]).unwrap();

    let ribbon = track.boundary_ribbon();
    assert_eq!(ribbon.len(), 3 * 6);
    let per_segment: Vec<usize> = (0..3)
        .map(|i| ribbon.iter().filter(|r| r.segment == i).count())
        .collect();
    assert_eq!(per_segment, vec![6, 6, 6]);

    // Reihenfolge und Inhalt entsprechen den Segment-Offsets
    let second = &track.segments()[1];
    assert_eq!(ribbon[6].left, second.left_offsets()[0]);
    assert_eq!(ribbon[11].right, second.right_offsets()[5]);
}

#[test]
fn test_boundary_lines_never_bridge_segments() {
    let mut track = Track::new();
    track.load_from_source([STRAIGHT, CURVE]).unwrap();

    let lines = track.boundary_lines();
    // Pro Segment und Seite: (N-1) Punkte → (N-2) Linien
    assert_eq!(lines.len(), 2 * 2 * 18);

    for line in &lines {
        let s = &track.segments()[line.segment];
        let offsets = match line.side {
            RibbonSide::Left => s.left_offsets(),
            RibbonSide::Right => s.right_offsets(),
        };
        assert!(offsets.contains(&line.from));
        assert!(offsets.contains(&line.to));
    }
}

#[test]
fn test_records_roundtrip_through_track() {
    let mut track = Track::new();
    track.load_from_source([CURVE, STRAIGHT]).unwrap();

    let records = track.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].to_line(), "100;200,150;180,200;220,260;200");

    let mut copy = Track::new();
    copy.load_from_records(&records).unwrap();
    assert_eq!(copy.segments(), track.segments());
}

#[test]
fn test_centerline_length_of_straight_line() {
    let mut track = Track::new();
    track.load_from_source([STRAIGHT, STRAIGHT]).unwrap();
    assert_relative_eq!(track.centerline_length(), 60.0, epsilon = 1e-9);
}

#[test]
fn test_invalid_options_surface_as_invalid_argument() {
    let mut track = Track::with_options(TrackOptions {
        sample_count: 1,
        ..TrackOptions::default()
    });
    let err = track.load_from_source([STRAIGHT]).expect_err("Fehler erwartet");
    assert!(matches!(err, TrackError::InvalidArgument(_)));
}
