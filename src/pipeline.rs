//! The pipeline state container and render entry points.
//!
//! A [`Pipeline`] owns everything a render call needs: the caller's vertex,
//! index, and uniform data, the per-float interpolation rules, the two
//! shader stages, and (after [`Pipeline::initialize_render`]) the
//! framebuffer. [`Pipeline::render`] walks the vertex stream under the
//! selected [`RenderType`], runs the vertex shader on each corner, clips
//! the assembled triangle against the view volume, and rasterizes whatever
//! survives.

use log::debug;

use crate::clipper::clip_triangle;
use crate::error::PipelineError;
use crate::interp::InterpRule;
use crate::render::framebuffer::FrameBuffer;
use crate::render::rasterizer::{rasterize_triangle, RenderPass};
use crate::shader::{FragmentShader, VertexShader};
use crate::vertex::{ClipVertex, VertexInput};

/// Upper bound on `floats_per_vertex`.
pub const MAX_FLOATS_PER_VERTEX: usize = 48;

/// How the vertex stream is grouped into triangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderType {
    /// Every three consecutive vertices form a triangle; trailing extras
    /// are ignored.
    List,
    /// `index_data` supplies three vertex indices per triangle.
    Indexed,
    /// Triangles (0,1,2), (0,2,3), (0,3,4), ...
    Fan,
    /// Triangles (0,1,2), (1,2,3), (2,3,4), ... Winding is not alternated;
    /// coverage testing is winding-symmetric, so none is needed.
    Strip,
}

/// Pipeline state: caller-populated inputs plus the render target.
pub struct Pipeline {
    /// Interleaved per-vertex attributes, `floats_per_vertex` floats each.
    pub vertex_data: Vec<f32>,
    pub floats_per_vertex: usize,
    /// Three indices per triangle; only read for [`RenderType::Indexed`].
    pub index_data: Vec<u32>,
    /// Opaque uniform block handed to both shaders; never read here.
    pub uniform_data: Vec<f32>,
    /// One rule per vertex attribute float.
    pub interp_rules: Vec<InterpRule>,
    vertex_shader: Option<Box<dyn VertexShader>>,
    fragment_shader: Option<Box<dyn FragmentShader>>,
    framebuffer: Option<FrameBuffer>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            vertex_data: Vec::new(),
            floats_per_vertex: 0,
            index_data: Vec::new(),
            uniform_data: Vec::new(),
            interp_rules: Vec::new(),
            vertex_shader: None,
            fragment_shader: None,
            framebuffer: None,
        }
    }

    pub fn set_vertex_shader(&mut self, shader: impl VertexShader + 'static) {
        self.vertex_shader = Some(Box::new(shader));
    }

    pub fn set_fragment_shader(&mut self, shader: impl FragmentShader + 'static) {
        self.fragment_shader = Some(Box::new(shader));
    }

    /// Number of vertices in `vertex_data` under the current layout.
    pub fn num_vertices(&self) -> usize {
        if self.floats_per_vertex == 0 {
            0
        } else {
            self.vertex_data.len() / self.floats_per_vertex
        }
    }

    /// Number of indexed triangles described by `index_data`.
    pub fn num_triangles(&self) -> usize {
        self.index_data.len() / 3
    }

    /// The render target, once allocated.
    pub fn framebuffer(&self) -> Option<&FrameBuffer> {
        self.framebuffer.as_ref()
    }

    /// Allocate the render target. Color resets to opaque black and depth
    /// to the sentinel. Dimensions are not known at construction, so this
    /// must be called before the first [`render`](Self::render).
    pub fn initialize_render(&mut self, width: usize, height: usize) -> Result<(), PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions { width, height });
        }
        debug!("allocating {width}x{height} render target");
        self.framebuffer = Some(FrameBuffer::new(width, height));
        Ok(())
    }

    /// Render the populated vertex stream as `render_type` triangles.
    ///
    /// All validation happens before the framebuffer is touched: the vertex
    /// layout and interpolation rules must agree, both shaders and the
    /// framebuffer must be present, and for [`RenderType::Indexed`] every
    /// index must be in range (a bad index fails the whole call rather
    /// than skipping a triangle).
    pub fn render(&mut self, render_type: RenderType) -> Result<(), PipelineError> {
        let floats = self.floats_per_vertex;
        if floats == 0 || floats > MAX_FLOATS_PER_VERTEX {
            return Err(PipelineError::InvalidVertexLayout(floats));
        }
        if self.interp_rules.len() != floats {
            return Err(PipelineError::InterpRuleMismatch {
                rules: self.interp_rules.len(),
                floats,
            });
        }
        let num_vertices = self.vertex_data.len() / floats;
        if render_type == RenderType::Indexed {
            for &index in &self.index_data {
                if index as usize >= num_vertices {
                    return Err(PipelineError::IndexOutOfRange {
                        index: index as usize,
                        num_vertices,
                    });
                }
            }
        }
        let framebuffer = self.framebuffer.as_mut().ok_or(PipelineError::Uninitialized)?;
        let vertex_shader = self
            .vertex_shader
            .as_deref()
            .ok_or(PipelineError::Uninitialized)?;
        let fragment_shader = self
            .fragment_shader
            .as_deref()
            .ok_or(PipelineError::Uninitialized)?;

        let total = match render_type {
            RenderType::List => num_vertices / 3,
            RenderType::Indexed => self.index_data.len() / 3,
            RenderType::Fan | RenderType::Strip => num_vertices.saturating_sub(2),
        };
        debug!("rendering {total} triangles from {num_vertices} vertices as {render_type:?}");

        let mut pass = RenderPass {
            framebuffer,
            fragment_shader,
            interp_rules: &self.interp_rules,
            uniform_data: &self.uniform_data,
            fragment_attrs: Vec::with_capacity(floats),
        };
        let mut clipped = Vec::new();

        for t in 0..total {
            let corners = match render_type {
                RenderType::List => [3 * t, 3 * t + 1, 3 * t + 2],
                RenderType::Indexed => [
                    self.index_data[3 * t] as usize,
                    self.index_data[3 * t + 1] as usize,
                    self.index_data[3 * t + 2] as usize,
                ],
                RenderType::Fan => [0, t + 1, t + 2],
                RenderType::Strip => [t, t + 1, t + 2],
            };
            let triangle = corners.map(|v| {
                let mut out = ClipVertex::zeroed(floats);
                vertex_shader.shade(
                    VertexInput {
                        attributes: &self.vertex_data[v * floats..(v + 1) * floats],
                    },
                    &mut out,
                    &self.uniform_data,
                );
                out
            });

            clipped.clear();
            clip_triangle(&triangle, 0, &self.interp_rules, &mut clipped);
            for tri in &clipped {
                rasterize_triangle(&mut pass, tri);
            }
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
