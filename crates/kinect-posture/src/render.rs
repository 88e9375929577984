//! Turning a posture into drawable markers.
//!
//! [`Posture::to_view`] is pure: it computes a [`PostureView`] holding one
//! circular [`Marker`] per joint. Drawing goes through the [`Canvas`] trait,
//! so the model carries no windowing or graphics dependency.

use crate::{joint, Posture};
use kinect_base::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0x00RRGGBB`, the layout framebuffer windows expect.
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Color and radius used for a joint label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    pub radius: f32,
}

impl MarkerStyle {
    pub fn for_joint(name: &str) -> Self {
        match name {
            joint::HEAD => MarkerStyle { color: Color::RED, radius: 10.0 },
            joint::HAND_LEFT => MarkerStyle { color: Color::GREEN, radius: 10.0 },
            joint::HAND_RIGHT => MarkerStyle { color: Color::BLUE, radius: 10.0 },
            _ => MarkerStyle { color: Color::BLACK, radius: 5.0 },
        }
    }
}

/// A filled circle occupying `frame`, a square of side `2 * radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub frame: Rect<f32>,
    pub color: Color,
}

impl Marker {
    pub fn radius(&self) -> f32 {
        self.frame.size.x / 2.0
    }

    pub fn center(&self) -> Vec2<f32> {
        self.frame.center()
    }
}

/// Minimal drawing capability a rendering backend has to provide.
pub trait Canvas {
    fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Color);
}

/// A view-sized container of joint markers.
#[derive(Debug, Clone, PartialEq)]
pub struct PostureView {
    pub frame: Rect<f32>,
    pub markers: Vec<Marker>,
}

impl PostureView {
    /// Draw every marker, in joint order.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for marker in &self.markers {
            canvas.fill_circle(marker.center(), marker.radius(), marker.color);
        }
    }
}

impl Posture {
    /// Lay out one marker per joint for a view of `width` x `height`.
    ///
    /// A marker's frame starts at `(screen.x - r, 2 * height - screen.y - r)`.
    /// The vertical term flips the screen projection into the view's
    /// bottom-up coordinates against twice the nominal height.
    pub fn to_view(&self, width: f32, height: f32) -> PostureView {
        let markers = self
            .points
            .iter()
            .map(|point| {
                let style = MarkerStyle::for_joint(&point.name);
                let r = style.radius;
                let screen = point.screen_point.as_f32();
                Marker {
                    frame: Rect::new(
                        Vec2::new(screen.x - r, height * 2.0 - screen.y - r),
                        Vec2::new(2.0 * r, 2.0 * r),
                    ),
                    color: style.color,
                }
            })
            .collect();

        PostureView {
            frame: Rect::new(Vec2::zero(), Vec2::new(width, height)),
            markers,
        }
    }
}
