//! Body posture model for Kinect skeleton captures.
//!
//! A [`Posture`] is a named list of [`Point3D`] joints. Postures can be read
//! from the `;`/`,` delimited text format or from a JSON document, generated
//! randomly for demos, compared with a squared Euclidean distance, written
//! back as text and turned into a [`PostureView`] of colored markers that any
//! [`Canvas`] backend can draw.

pub mod error;
pub mod joint;
pub mod json;
pub mod point;
pub mod posture;
pub mod random;
pub mod render;
pub mod text;

pub use error::PostureError;
pub use point::Point3D;
pub use posture::Posture;
pub use random::RANDOM_POINT_COUNT;
pub use render::{Canvas, Color, Marker, MarkerStyle, PostureView};
