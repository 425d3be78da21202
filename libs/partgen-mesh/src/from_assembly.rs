//! # Assembly to Mesh Conversion
//!
//! Triangulates every primitive of a [`MeshAssembly`] independently (in
//! parallel) and merges the parts in primitive order into one colored mesh.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_box, create_cylinder};
use config::constants::{scaled_segments, MAX_TRIANGLES, MAX_VERTICES};
use glam::{DMat4, DQuat, DVec3, EulerRot};
use partgen::{MeshAssembly, Primitive, RenderQuality, Shape};
use rayon::prelude::*;

/// Converts an assembly into a single triangle mesh in scene units.
///
/// Each primitive is rotated (Euler XYZ), moved to its position plus the
/// accumulated sub-assembly offset, then the whole result is scaled by the
/// assembly's display scale. Vertex colors carry the primitive's finish with
/// opacity in alpha.
///
/// # Errors
///
/// - [`MeshError::DegenerateGeometry`] for a shape with a non-positive extent
/// - [`MeshError::TooManyVertices`] / [`MeshError::TooManyTriangles`] when the
///   merged mesh would exceed the configured limits
///
/// # Example
///
/// ```rust
/// use partgen::{generate, ModelType, ParameterSet, RenderQuality};
/// use partgen_mesh::assembly_to_mesh;
///
/// let bracket = generate(ModelType::MountingBracket, &ParameterSet::new()).unwrap();
/// let mesh = assembly_to_mesh(&bracket, RenderQuality::Standard).unwrap();
/// // One box plus four 32-segment holes
/// assert_eq!(mesh.triangle_count(), 12 + 4 * (4 * 32 - 4));
/// ```
pub fn assembly_to_mesh(assembly: &MeshAssembly, quality: RenderQuality) -> Result<Mesh, MeshError> {
    let scale = DMat4::from_scale(DVec3::splat(assembly.display_scale()));
    let placed = assembly.world_primitives();

    let parts = placed
        .par_iter()
        .map(|(offset, primitive)| {
            let mut mesh = primitive_to_mesh(primitive, quality)
                .map_err(|e| e.in_primitive(&primitive.name))?;
            mesh.transform(&(scale * placement(primitive, *offset)));
            Ok(mesh)
        })
        .collect::<Result<Vec<Mesh>, MeshError>>()?;

    let vertex_count: usize = parts.iter().map(Mesh::vertex_count).sum();
    if vertex_count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }
    let triangle_count: usize = parts.iter().map(Mesh::triangle_count).sum();
    if triangle_count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangle_count,
            max: MAX_TRIANGLES,
        });
    }

    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);
    for part in &parts {
        mesh.merge(part);
    }

    log::debug!(
        "triangulated {} at {quality}: {} primitives, {vertex_count} vertices, {triangle_count} triangles",
        assembly.model(),
        parts.len()
    );
    Ok(mesh)
}

/// Triangulates one primitive in its local frame, colored and with normals.
pub fn primitive_to_mesh(primitive: &Primitive, quality: RenderQuality) -> Result<Mesh, MeshError> {
    let mut mesh = match primitive.shape {
        Shape::Box {
            width,
            height,
            depth,
        } => create_box(width, height, depth)?,
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => create_cylinder(
            height,
            radius_bottom,
            radius_top,
            scaled_segments(radial_segments, quality.segment_factor()),
        )?,
    };
    mesh.compute_normals();
    mesh.set_uniform_color(primitive.finish.rgba());
    Ok(mesh)
}

/// Local-to-assembly transform: rotation first, then translation.
fn placement(primitive: &Primitive, offset: DVec3) -> DMat4 {
    let r = primitive.rotation;
    let rotation = DQuat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
    DMat4::from_rotation_translation(rotation, primitive.position + offset)
}
