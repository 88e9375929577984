pub mod logging;
pub mod rect;
pub mod vec2;
pub mod vec3;

pub use logging::{init_stdout_logger, StdoutLogger};
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;

// Re-export log crate so downstream crates can use kinect_base::log::*
pub use log;
