use kinect_base::{Vec2, Vec3};

/// A single skeletal joint: sensor-space position, its projection on screen,
/// and the joint label.
#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    pub position: Vec3<f32>,
    pub screen_point: Vec2<i32>,
    pub name: String,
}

impl Point3D {
    pub fn new(x: f32, y: f32, z: f32, screen_point: Vec2<i32>, name: impl Into<String>) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            screen_point,
            name: name.into(),
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn z(&self) -> f32 {
        self.position.z
    }

    /// Sum of squared per-axis differences of the 3D positions.
    ///
    /// The screen projection and the name play no part.
    pub fn sqr_euclidean_distance(&self, other: &Point3D) -> f64 {
        self.position.distance_squared_f64(other.position)
    }
}
