use kinect_base::Vec2;
use kinect_posture::{Point3D, Posture, PostureError};

const TWO_JOINTS: &str = "1.0,2.0,3.0,10,20,Head;4.0,5.0,6.0,30,40,HandLeft;";

fn assert_point(point: &Point3D, xyz: (f32, f32, f32), screen: (i32, i32), name: &str) {
    assert!((point.x() - xyz.0).abs() < 1e-6);
    assert!((point.y() - xyz.1).abs() < 1e-6);
    assert!((point.z() - xyz.2).abs() < 1e-6);
    assert_eq!(point.screen_point, Vec2::new(screen.0, screen.1));
    assert_eq!(point.name, name);
}

// --- Parsing ---

#[test]
fn test_parse_two_joints() {
    let posture = Posture::from_text(TWO_JOINTS).unwrap();
    assert_eq!(posture.len(), 2);
    assert_eq!(posture.name(), "");
    assert_point(&posture.points()[0], (1.0, 2.0, 3.0), (10, 20), "Head");
    assert_point(&posture.points()[1], (4.0, 5.0, 6.0), (30, 40), "HandLeft");
}

#[test]
fn test_parse_keeps_input_order() {
    let text = "0,0,0,1,1,C;0,0,0,2,2,A;0,0,0,3,3,B";
    let posture = Posture::from_text(text).unwrap();
    let names: Vec<&str> = posture.points().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_parse_empty_string() {
    let posture = Posture::from_text("").unwrap();
    assert!(posture.is_empty());
}

#[test]
fn test_parse_skips_stray_separators() {
    let posture = Posture::from_text(";;1.5,-2.25,0.125,-3,7,SpineMid;;").unwrap();
    assert_eq!(posture.len(), 1);
    assert_point(&posture.points()[0], (1.5, -2.25, 0.125), (-3, 7), "SpineMid");
}

#[test]
fn test_parse_allows_empty_and_duplicate_names() {
    let posture = Posture::from_text("1,1,1,0,0,;2,2,2,0,0,Head;3,3,3,0,0,Head").unwrap();
    assert_eq!(posture.len(), 3);
    assert_eq!(posture.points()[0].name, "");
    assert_eq!(posture.points()[1].name, "Head");
    assert_eq!(posture.points()[2].name, "Head");
}

#[test]
fn test_from_str_matches_from_text() {
    let parsed: Posture = TWO_JOINTS.parse().unwrap();
    assert_eq!(parsed, Posture::from_text(TWO_JOINTS).unwrap());
}

// --- Errors ---

#[test]
fn test_parse_too_few_fields() {
    let err = Posture::from_text("1.0,2.0,3.0,10,20").unwrap_err();
    assert!(matches!(err, PostureError::Parse { record: 0, .. }));
}

#[test]
fn test_parse_non_numeric_coordinate() {
    let err = Posture::from_text("1.0,abc,3.0,10,20,Head").unwrap_err();
    match err {
        PostureError::Parse { record, message } => {
            assert_eq!(record, 0);
            assert!(message.contains("abc"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_non_integer_screen_point() {
    assert!(Posture::from_text("1.0,2.0,3.0,ten,20,Head").is_err());
    assert!(Posture::from_text("1.0,2.0,3.0,10,20.5,Head").is_err());
}

#[test]
fn test_parse_error_in_later_record_fails_whole_posture() {
    let err = Posture::from_text("1,2,3,4,5,Head;bad;6,7,8,9,10,HandLeft").unwrap_err();
    assert!(matches!(err, PostureError::Parse { record: 1, .. }));
}

#[test]
fn test_parse_does_not_trim_fields() {
    assert!(Posture::from_text("1.0, 2.0,3.0,10,20,Head").is_err());
}

#[test]
fn test_parse_error_display() {
    let err = Posture::from_text("1,2").unwrap_err();
    assert_eq!(err.to_string(), "parse error in record 0: expected 6 fields, found 2");
}

// --- Serialization ---

#[test]
fn test_to_string_single_point() {
    let posture = Posture::from_text("1,2.5,-3,10,20,Head").unwrap();
    assert_eq!(posture.to_string(), "1.000, 2.500, -3.000, 10, 20, Head");
}

#[test]
fn test_to_string_records_run_together() {
    let posture = Posture::from_text(TWO_JOINTS).unwrap();
    assert_eq!(
        posture.to_string(),
        "1.000, 2.000, 3.000, 10, 20, Head4.000, 5.000, 6.000, 30, 40, HandLeft"
    );
}

#[test]
fn test_to_string_empty() {
    assert_eq!(Posture::new().to_string(), "");
}

#[test]
fn test_to_string_does_not_round_trip() {
    let posture = Posture::from_text(TWO_JOINTS).unwrap();
    let reparsed = Posture::from_text(&posture.to_string());
    match reparsed {
        Ok(other) => assert_ne!(other, posture),
        Err(err) => assert!(matches!(err, PostureError::Parse { .. })),
    }
}
