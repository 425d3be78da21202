//! # Mesh Errors
//!
//! Error types for triangulation.

use partgen::GenerateError;
use thiserror::Error;

/// Errors that can occur while turning an assembly into triangles.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Generation failed before triangulation started
    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),

    /// Shape with a zero, negative or non-finite extent
    #[error("Degenerate geometry in {primitive}: {message}")]
    DegenerateGeometry { primitive: String, message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(primitive: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            primitive: primitive.into(),
            message: message.into(),
        }
    }

    /// Attaches the name of the primitive being triangulated.
    pub(crate) fn in_primitive(self, name: &str) -> Self {
        match self {
            MeshError::DegenerateGeometry { message, .. } => MeshError::DegenerateGeometry {
                primitive: name.to_string(),
                message,
            },
            other => other,
        }
    }
}
