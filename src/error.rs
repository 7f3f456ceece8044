//! Pipeline error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    #[error("invalid framebuffer dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("render called before initialize_render or without both shaders set")]
    Uninitialized,

    #[error("unsupported vertex layout: {0} floats per vertex")]
    InvalidVertexLayout(usize),

    #[error("expected one interpolation rule per vertex float: {rules} rules for {floats} floats")]
    InterpRuleMismatch { rules: usize, floats: usize },

    #[error("vertex index {index} out of range for {num_vertices} vertices")]
    IndexOutOfRange { index: usize, num_vertices: usize },
}
