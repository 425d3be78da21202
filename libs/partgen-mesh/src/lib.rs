//! # Partgen Mesh
//!
//! Browser-safe triangulation for generated parts.
//! Converts a [`partgen::MeshAssembly`] into one colored triangle mesh.
//!
//! ## Architecture
//!
//! ```text
//! partgen (MeshAssembly) → partgen-mesh (Mesh) → GPU buffers
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use partgen::{DesignState, ModelType};
//! use partgen_mesh::assembly_to_mesh;
//!
//! let mut state = DesignState::new();
//! state.set_model_type(ModelType::HeatSink);
//! let mesh = assembly_to_mesh(&state.build().unwrap(), state.render_quality()).unwrap();
//! // Base and twelve fins, all boxes
//! assert_eq!(mesh.triangle_count(), 13 * 12);
//! ```

pub mod error;
pub mod from_assembly;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use from_assembly::{assembly_to_mesh, primitive_to_mesh};
pub use mesh::Mesh;

use partgen::{ModelType, ParameterSet, RenderQuality};

/// Generates `model` from `params` and triangulates it in one step.
///
/// Material and overlay passes are not applied; use
/// [`partgen::DesignState::build`] and [`assembly_to_mesh`] for a shaded
/// result.
pub fn generate_mesh(
    model: ModelType,
    params: &ParameterSet,
    quality: RenderQuality,
) -> Result<Mesh, MeshError> {
    let assembly = partgen::generate(model, params)?;
    assembly_to_mesh(&assembly, quality)
}
