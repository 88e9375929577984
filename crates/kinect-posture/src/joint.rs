//! Joint labels the model gives special treatment to.
//!
//! Any other label is valid and is carried through unchanged.

pub const HEAD: &str = "Head";
pub const HAND_LEFT: &str = "HandLeft";
pub const HAND_RIGHT: &str = "HandRight";
