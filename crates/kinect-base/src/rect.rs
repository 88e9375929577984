use crate::Vec2;
use std::ops::{Add, Div, Sub};

/// Axis-aligned rectangle stored as origin + size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T: Default> Default for Rect<T> {
    fn default() -> Self {
        Self {
            origin: Vec2::zero(),
            size: Vec2::zero(),
        }
    }
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Sub<Output = T> + Copy> Rect<T> {
    /// Integer spans wider than `T` can hold overflow; build such frames with
    /// [`Rect::new`] and read them back through [`Rect::saturating_max`].
    pub fn from_min_max(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn min(&self) -> Vec2<T> {
        self.origin
    }

    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl Rect<i32> {
    /// Far corner, clamped to the `i32` range instead of overflowing.
    pub fn saturating_max(&self) -> Vec2<i32> {
        Vec2::new(
            self.origin.x.saturating_add(self.size.x),
            self.origin.y.saturating_add(self.size.y),
        )
    }
}

impl<T: Add<Output = T> + Div<Output = T> + Copy + From<u8>> Rect<T> {
    pub fn center(&self) -> Vec2<T> {
        let two = T::from(2u8);
        Vec2::new(
            self.origin.x + self.size.x / two,
            self.origin.y + self.size.y / two,
        )
    }
}

impl<T: Add<Output = T> + PartialOrd + Copy> Rect<T> {
    /// Inclusive on both edges, matching how integer screen bounds are sampled.
    pub fn contains_inclusive(&self, point: Vec2<T>) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.y >= self.origin.y && point.x <= max.x && point.y <= max.y
    }
}
