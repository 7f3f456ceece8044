//! Triangle clipping against the homogeneous clip volume.
//!
//! Clipping happens after the vertex shader (in clip space, before the
//! perspective divide) so the planes are fixed regardless of how the
//! caller's shader projects its geometry.

pub mod clip_space;

pub use clip_space::ClipPlane;
pub(crate) use clip_space::clip_triangle;
