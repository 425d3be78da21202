//! # Cylinder Primitive
//!
//! Generates cylinders and frustums along the Y axis, centered on the origin.
//! Side and caps use separate vertex rings so the rim stays sharp.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a cylinder or frustum mesh.
///
/// # Arguments
///
/// * `height` - Extent along Y
/// * `radius_bottom` - Radius at `y = -height/2`
/// * `radius_top` - Radius at `y = +height/2`
/// * `segments` - Number of segments around the circumference
///
/// # Returns
///
/// A mesh with `4 · segments` vertices and `4 · segments − 4` triangles.
///
/// # Example
///
/// ```rust
/// use partgen_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(2.0, 1.0, 1.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
/// assert_eq!(mesh.triangle_count(), 60);
/// ```
pub fn create_cylinder(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(MeshError::degenerate(
            "cylinder",
            format!("Cylinder height must be positive: {height}"),
        ));
    }

    if !(radius_bottom.is_finite() && radius_top.is_finite())
        || radius_bottom <= 0.0
        || radius_top <= 0.0
    {
        return Err(MeshError::degenerate(
            "cylinder",
            format!("Cylinder radii must be positive: r1={radius_bottom}, r2={radius_top}"),
        ));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(
            "cylinder",
            format!("Cylinder segments must be at least 3: {segments}"),
        ));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(4 * n, 4 * n - 4);
    let (y_bottom, y_top) = (-height / 2.0, height / 2.0);

    // Angle 0 on +Z, increasing towards +X
    let ring = |mesh: &mut Mesh, radius: f64, y: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.sin(), y, radius * theta.cos()))
            })
            .collect()
    };

    let side_bottom = ring(&mut mesh, radius_bottom, y_bottom);
    let side_top = ring(&mut mesh, radius_top, y_top);
    for j in 0..n {
        let next = (j + 1) % n;
        let (b0, b1) = (side_bottom[j], side_bottom[next]);
        let (t0, t1) = (side_top[j], side_top[next]);
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    let cap_bottom = ring(&mut mesh, radius_bottom, y_bottom);
    for j in 1..n - 1 {
        mesh.add_triangle(cap_bottom[0], cap_bottom[j + 1], cap_bottom[j]);
    }

    let cap_top = ring(&mut mesh, radius_top, y_top);
    for j in 1..n - 1 {
        mesh.add_triangle(cap_top[0], cap_top[j], cap_top[j + 1]);
    }

    Ok(mesh)
}
