use kinect_base::{Rect, Vec2};
use kinect_posture::{Posture, RANDOM_POINT_COUNT};
use rand::{rngs::StdRng, SeedableRng};

fn frame() -> Rect<i32> {
    Rect::from_min_max(Vec2::new(50, 20), Vec2::new(690, 500))
}

#[test]
fn test_random_point_count() {
    let posture = Posture::random(frame());
    assert_eq!(posture.len(), RANDOM_POINT_COUNT);
    assert_eq!(posture.name(), "");
}

#[test]
fn test_random_screen_points_inside_frame() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let posture = Posture::random_with(frame(), &mut rng);
        for point in posture.points() {
            assert!(frame().contains_inclusive(point.screen_point), "{:?}", point.screen_point);
        }
    }
}

#[test]
fn test_random_coordinates_bounded_by_max_x() {
    let mut rng = StdRng::seed_from_u64(11);
    let max_x = frame().max().x as f32;
    for _ in 0..50 {
        let posture = Posture::random_with(frame(), &mut rng);
        for point in posture.points() {
            for c in [point.x(), point.y(), point.z()] {
                assert!((0.0..=max_x).contains(&c));
                assert_eq!(c.fract(), 0.0);
            }
        }
    }
}

#[test]
fn test_random_never_produces_hand_right() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen_head = false;
    let mut seen_hand_left = false;
    for _ in 0..50 {
        let posture = Posture::random_with(frame(), &mut rng);
        for point in posture.points() {
            assert_ne!(point.name, "HandRight");
            assert!(point.name == "Head" || point.name == "HandLeft");
            seen_head |= point.name == "Head";
            seen_hand_left |= point.name == "HandLeft";
        }
    }
    assert!(seen_head && seen_hand_left);
}

#[test]
fn test_random_is_reproducible_with_seed() {
    let a = Posture::random_with(frame(), &mut StdRng::seed_from_u64(42));
    let b = Posture::random_with(frame(), &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_random_degenerate_frame() {
    let point_frame = Rect::new(Vec2::new(5, 5), Vec2::new(0, 0));
    let posture = Posture::random_with(point_frame, &mut StdRng::seed_from_u64(1));
    assert!(posture.points().iter().all(|p| p.screen_point == Vec2::new(5, 5)));
}

#[test]
fn test_random_frame_past_i32_max() {
    let wide = Rect::new(Vec2::new(2_000_000_000, 0), Vec2::new(500_000_000, 10));
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let posture = Posture::random_with(wide, &mut rng);
        assert_eq!(posture.len(), RANDOM_POINT_COUNT);
        for point in posture.points() {
            assert!(point.screen_point.x >= 2_000_000_000);
            assert!((0..=10).contains(&point.screen_point.y));
            assert!(point.x() >= 0.0 && point.x() <= i32::MAX as f32);
        }
    }
}

#[test]
fn test_random_frame_past_i32_min() {
    let wide = Rect::new(Vec2::new(-2_000_000_000, -5), Vec2::new(-500_000_000, 5));
    let posture = Posture::random_with(wide, &mut StdRng::seed_from_u64(9));
    assert_eq!(posture.len(), RANDOM_POINT_COUNT);
    for point in posture.points() {
        assert!(point.screen_point.x <= -2_000_000_000);
        assert!((-5..=0).contains(&point.screen_point.y));
        // 3D range runs from the clamped max x up to 0
        assert!(point.x() <= 0.0 && point.x() >= i32::MIN as f32);
    }
}
