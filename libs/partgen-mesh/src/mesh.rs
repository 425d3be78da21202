//! # Mesh Data Structure
//!
//! Triangle mesh with per-vertex normals and RGBA colors.

use config::constants::{DEGENERATE_AREA_EPSILON, PLACEHOLDER_COLOR};
use glam::{DMat4, DVec3};
use partgen::Color;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use partgen_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    /// RGBA per vertex, f32 for GPU
    colors: Option<Vec<[f32; 4]>>,
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices, counter-clockwise seen from outside.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Sets a uniform color for all vertices.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals.
    ///
    /// Vertices are not shared between faces of different orientation, so
    /// flat faces stay flat.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Axis-aligned bounding box as `(min, max)`; zero for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices (and normals, if present) by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
            }
        }
    }

    /// Appends another mesh, re-indexing its triangles.
    ///
    /// Missing colors on either side are filled with `PLACEHOLDER_COLOR`;
    /// normals are kept only when both sides have them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        let fallback = Color(PLACEHOLDER_COLOR).to_rgba(1.0);

        match (&mut self.colors, &other.colors) {
            (Some(own), Some(theirs)) => own.extend_from_slice(theirs),
            (Some(own), None) => own.extend(std::iter::repeat(fallback).take(other.vertices.len())),
            (None, Some(theirs)) => {
                let mut colors = vec![fallback; self.vertices.len()];
                colors.extend_from_slice(theirs);
                self.colors = Some(colors);
            }
            (None, None) => {}
        }

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut own), Some(theirs)) => {
                own.extend_from_slice(theirs);
                Some(own)
            }
            (None, Some(theirs)) if self.vertices.is_empty() => Some(theirs.clone()),
            _ => None,
        };

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh.
    ///
    /// Checks that every index is in range, no triangle repeats a vertex and
    /// no triangle has (near) zero area.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() >= DEGENERATE_AREA_EPSILON
        })
    }

    /// Flattened `[x, y, z, ...]` positions.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Flattened `[i0, i1, i2, ...]` triangle indices.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Flattened normals, if computed.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }

    /// Flattened `[r, g, b, a, ...]` colors, if set.
    pub fn colors_f32(&self) -> Option<Vec<f32>> {
        self.colors
            .as_ref()
            .map(|colors| colors.iter().flatten().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(z: f64) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, z));
        mesh.add_vertex(DVec3::new(1.0, 0.0, z));
        mesh.add_vertex(DVec3::new(0.0, 1.0, z));
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_zero_area() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_compute_normals_ccw_faces_up() {
        let mut mesh = triangle(0.0);
        mesh.compute_normals();
        assert!(mesh.normals().unwrap().iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_merge_offsets_indices_and_colors() {
        let mut first = triangle(0.0);
        first.set_uniform_color([1.0, 0.0, 0.0, 1.0]);
        let second = triangle(1.0);

        first.merge(&second);
        assert_eq!(first.vertex_count(), 6);
        assert_eq!(first.triangles()[1], [3, 4, 5]);
        let colors = first.colors().unwrap();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(colors[5], Color(PLACEHOLDER_COLOR).to_rgba(1.0));
    }

    #[test]
    fn test_merge_into_empty_keeps_normals() {
        let mut part = triangle(0.0);
        part.compute_normals();
        let mut mesh = Mesh::new();
        mesh.merge(&part);
        mesh.merge(&part);
        assert_eq!(mesh.normals().map(<[DVec3]>::len), Some(6));
    }

    #[test]
    fn test_transform_moves_vertices_and_normals() {
        let mut mesh = triangle(0.0);
        mesh.compute_normals();
        mesh.transform(&DMat4::from_rotation_x(std::f64::consts::FRAC_PI_2));
        let normal = mesh.normals().unwrap()[0];
        assert!((normal - DVec3::NEG_Y).length() < 1e-12);
    }

    #[test]
    fn test_flat_exports() {
        let mut mesh = triangle(3.0);
        mesh.set_uniform_color([0.5, 0.5, 0.5, 0.6]);
        assert_eq!(mesh.vertices_f32()[..3], [0.0f32, 0.0, 3.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(mesh.colors_f32().unwrap().len(), 12);
        assert!(mesh.normals_f32().is_none());
    }
}
