use crate::{joint, Point3D, Posture};
use kinect_base::{log, Rect, Vec2};
use rand::Rng;

/// Number of joints in a generated posture.
pub const RANDOM_POINT_COUNT: usize = 20;

impl Posture {
    /// Random demo posture inside `frame`, drawn from the thread RNG.
    pub fn random(frame: Rect<i32>) -> Self {
        Self::random_with(frame, &mut rand::rng())
    }

    /// Random demo posture inside `frame`.
    ///
    /// Screen points are uniform over the rectangle, edges included. Joint
    /// labels are drawn from three equally likely categories where the last
    /// two both map to "HandLeft", so "HandRight" never appears. All three
    /// sensor coordinates are whole numbers in `[0, max x]`; the height of
    /// the frame is not used for them. A far corner beyond the `i32` range is
    /// clamped to it.
    pub fn random_with<R: Rng + ?Sized>(frame: Rect<i32>, rng: &mut R) -> Self {
        let (min, max) = (frame.min(), frame.saturating_max());
        let (min_x, max_x) = ordered(min.x, max.x);
        let (min_y, max_y) = ordered(min.y, max.y);
        let (low, high) = ordered(0, max.x);

        let points = (0..RANDOM_POINT_COUNT)
            .map(|_| {
                let screen_point = Vec2::new(
                    rng.random_range(min_x..=max_x),
                    rng.random_range(min_y..=max_y),
                );
                let name = joint_for_category(rng.random_range(0..3));
                let x = rng.random_range(low..=high) as f32;
                let y = rng.random_range(low..=high) as f32;
                let z = rng.random_range(low..=high) as f32;
                Point3D::new(x, y, z, screen_point, name)
            })
            .collect::<Vec<_>>();

        log::debug!("generated random posture in {:?}", frame);
        Posture::from_points("", points)
    }
}

// Categories 1 and 2 both yield HandLeft; HAND_RIGHT is never drawn.
fn joint_for_category(category: u32) -> &'static str {
    match category {
        0 => joint::HEAD,
        1 => joint::HAND_LEFT,
        _ => joint::HAND_LEFT,
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}
