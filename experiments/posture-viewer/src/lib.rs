pub mod config;
pub mod framebuffer;
pub mod source;

pub use config::{PostureSource, ViewerConfig};
pub use framebuffer::FrameBuffer;
pub use source::{load_postures, ViewerError};
