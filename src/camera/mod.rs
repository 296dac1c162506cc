//! Fixed perspective camera for the header decoration.

/// Core camera struct and projection math.
pub mod core;

pub use self::core::Camera;
