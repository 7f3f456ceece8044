//! A CPU-based software rasterization pipeline.
//!
//! This crate implements the fixed-function stages of a forward graphics
//! pipeline: primitive assembly, clipping against the homogeneous view
//! volume, perspective-correct attribute interpolation, barycentric
//! triangle rasterization, and depth buffering. The two programmable
//! stages, the vertex and fragment shaders, are supplied by the caller as
//! closures or trait impls.
//!
//! # Quick Start
//!
//! ```
//! use softpipe::prelude::*;
//!
//! let mut pipeline = Pipeline::new();
//! // Three floats per vertex: a clip-space x, y and a brightness value.
//! pipeline.floats_per_vertex = 3;
//! pipeline.interp_rules = vec![InterpRule::Flat, InterpRule::Flat, InterpRule::Smooth];
//! pipeline.vertex_data = vec![
//!     -0.5, -0.5, 0.2, //
//!     0.5, -0.5, 1.0, //
//!     0.0, 0.5, 0.6, //
//! ];
//! pipeline.set_vertex_shader(|input: VertexInput, out: &mut ClipVertex, _: &[f32]| {
//!     out.position = Vec4::new(input.attributes[0], input.attributes[1], 0.0, 1.0);
//!     out.attributes.copy_from_slice(input.attributes);
//! });
//! pipeline.set_fragment_shader(|input: FragmentInput, out: &mut FragmentOutput, _: &[f32]| {
//!     let v = input.attributes[2];
//!     out.color = Vec4::new(v, v, v, 1.0);
//! });
//!
//! pipeline.initialize_render(64, 64)?;
//! pipeline.render(RenderType::List)?;
//! let image = pipeline.framebuffer().unwrap().color();
//! # assert_eq!(image.len(), 64 * 64);
//! # Ok::<(), softpipe::PipelineError>(())
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod error;
pub mod interp;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod shader;
pub mod vertex;

// Internal modules - used within the crate only
pub(crate) mod clipper;

// Re-export commonly needed types at crate root for convenience
pub use error::PipelineError;
pub use interp::InterpRule;
pub use pipeline::{Pipeline, RenderType, MAX_FLOATS_PER_VERTEX};
pub use render::framebuffer::FrameBuffer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softpipe::prelude::*;
/// ```
pub mod prelude {
    // Pipeline
    pub use crate::error::PipelineError;
    pub use crate::interp::InterpRule;
    pub use crate::pipeline::{Pipeline, RenderType, MAX_FLOATS_PER_VERTEX};

    // Render target
    pub use crate::render::framebuffer::{FrameBuffer, DEPTH_SENTINEL};

    // Shader interface
    pub use crate::math::vec4::Vec4;
    pub use crate::shader::{FragmentShader, VertexShader};
    pub use crate::vertex::{ClipVertex, FragmentInput, FragmentOutput, VertexInput};
}
