//! # Primitives
//!
//! Triangulators for the two base shapes. Both produce meshes centered on the
//! origin with Y up and counter-clockwise outward-facing triangles.

pub mod cuboid;
pub mod cylinder;

pub use cuboid::create_box;
pub use cylinder::create_cylinder;
