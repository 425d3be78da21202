//! # Box Primitive
//!
//! Generates a centered box with four vertices per face so each face shades
//! flat.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Outward normal and in-face axes (`u × v = normal`) of each face.
const FACES: [(DVec3, DVec3, DVec3); 6] = [
    (DVec3::X, DVec3::Y, DVec3::Z),
    (DVec3::NEG_X, DVec3::Z, DVec3::Y),
    (DVec3::Y, DVec3::Z, DVec3::X),
    (DVec3::NEG_Y, DVec3::X, DVec3::Z),
    (DVec3::Z, DVec3::X, DVec3::Y),
    (DVec3::NEG_Z, DVec3::Y, DVec3::X),
];

/// Creates a box of `width` (X), `height` (Y) and `depth` (Z).
///
/// # Returns
///
/// A mesh with 24 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use partgen_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(10.0, 4.0, 2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert_eq!(mesh.bounding_box(), (DVec3::new(-5.0, -2.0, -1.0), DVec3::new(5.0, 2.0, 1.0)));
/// ```
pub fn create_box(width: f64, height: f64, depth: f64) -> Result<Mesh, MeshError> {
    let size = DVec3::new(width, height, depth);
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::degenerate(
            "box",
            format!("Box size must be positive: {size:?}"),
        ));
    }

    let half = size / 2.0;
    let mut mesh = Mesh::with_capacity(24, 12);

    for (normal, u, v) in FACES {
        let corner = |su: f64, sv: f64| (normal + u * su + v * sv) * half;
        let a = mesh.add_vertex(corner(-1.0, -1.0));
        let b = mesh.add_vertex(corner(1.0, -1.0));
        let c = mesh.add_vertex(corner(1.0, 1.0));
        let d = mesh.add_vertex(corner(-1.0, 1.0));
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    Ok(mesh)
}
