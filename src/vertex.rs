//! Vertex and fragment data passed between pipeline stages.
//!
//! The pipeline knows nothing about the meaning of vertex attributes. A
//! vertex is a flat run of floats; the caller's shaders give them meaning,
//! and the per-float [`InterpRule`](crate::interp::InterpRule)s tell the
//! rasterizer how to carry each one to the fragments.

use crate::math::vec4::Vec4;

/// Input to the vertex shader: one vertex's slice of the caller's
/// interleaved attribute data.
#[derive(Clone, Copy, Debug)]
pub struct VertexInput<'a> {
    pub attributes: &'a [f32],
}

/// A vertex in homogeneous clip space, produced by the vertex shader and
/// carried through clipping to the rasterizer.
///
/// Every `ClipVertex` owns its attribute buffer. Clipping mints fresh
/// vertices where triangle edges cross the clip planes, so attributes can
/// never be shared or aliased between vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipVertex {
    /// Position in clip space, before the perspective divide.
    pub position: Vec4,
    /// One float per attribute, `floats_per_vertex` in total.
    pub attributes: Vec<f32>,
}

impl ClipVertex {
    pub fn new(position: Vec4, attributes: Vec<f32>) -> Self {
        Self { position, attributes }
    }

    /// A vertex with a zeroed position and `len` zeroed attributes, ready
    /// for the vertex shader to fill in.
    pub fn zeroed(len: usize) -> Self {
        Self {
            position: Vec4::ZERO,
            attributes: vec![0.0; len],
        }
    }
}

/// Input to the fragment shader: the attribute values interpolated at one
/// covered pixel.
#[derive(Clone, Copy, Debug)]
pub struct FragmentInput<'a> {
    pub attributes: &'a [f32],
}

/// Output of the fragment shader: RGBA color with channels in [0.0, 1.0].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentOutput {
    pub color: Vec4,
}

impl Default for FragmentOutput {
    fn default() -> Self {
        Self { color: Vec4::ZERO }
    }
}
