use std::fmt;
use std::ops::Sub;

/// Three-component vector holding a joint position in sensor space.
#[derive(Clone, Copy, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<T: Default> Default for Vec3<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
            z: T::default(),
        }
    }
}

impl<T> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Default> Vec3<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl Vec3<f32> {
    /// Squared distance, accumulated in `f64`.
    ///
    /// Per-axis differences are taken in `f32` and widened before squaring.
    pub fn distance_squared_f64(self, other: Self) -> f64 {
        let d = self - other;
        let (dx, dy, dz) = (d.x as f64, d.y as f64, d.z as f64);
        dx * dx + dy * dy + dz * dz
    }
}

// --- Operators ---

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
