//! Programmable shader stages.
//!
//! The pipeline is fixed-function between two caller-supplied callbacks: a
//! vertex shader that maps raw vertex data to a clip-space position plus
//! attributes, and a fragment shader that maps interpolated attributes to a
//! color. Both receive the caller's uniform data, which the pipeline itself
//! never reads.
//!
//! Plain closures with the matching signature implement these traits, so
//! most callers never name them:
//!
//! ```
//! use softpipe::prelude::*;
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.set_vertex_shader(|input: VertexInput, out: &mut ClipVertex, _uniforms: &[f32]| {
//!     let (x, y, z) = (input.attributes[0], input.attributes[1], input.attributes[2]);
//!     out.position = Vec4::new(x, y, z, 1.0);
//!     out.attributes.copy_from_slice(input.attributes);
//! });
//! ```

use crate::vertex::{ClipVertex, FragmentInput, FragmentOutput, VertexInput};

/// Per-vertex stage: writes the clip-space position and all attribute
/// floats of `output`.
pub trait VertexShader {
    fn shade(&self, input: VertexInput<'_>, output: &mut ClipVertex, uniforms: &[f32]);
}

/// Per-fragment stage: writes all four channels of the output color, each
/// in [0.0, 1.0].
pub trait FragmentShader {
    fn shade(&self, input: FragmentInput<'_>, output: &mut FragmentOutput, uniforms: &[f32]);
}

impl<F> VertexShader for F
where
    F: Fn(VertexInput<'_>, &mut ClipVertex, &[f32]),
{
    fn shade(&self, input: VertexInput<'_>, output: &mut ClipVertex, uniforms: &[f32]) {
        self(input, output, uniforms)
    }
}

impl<F> FragmentShader for F
where
    F: Fn(FragmentInput<'_>, &mut FragmentOutput, &[f32]),
{
    fn shade(&self, input: FragmentInput<'_>, output: &mut FragmentOutput, uniforms: &[f32]) {
        self(input, output, uniforms)
    }
}
