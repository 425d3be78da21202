//! # Config Crate
//!
//! Centralized configuration constants for the parametric part generator.
//! Every magic number shared between the generator, the triangulator and the
//! WASM boundary is defined here so the crates stay consistent.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{scaled_segments, DEFAULT_SEGMENTS, HOLE_COLOR};
//!
//! // Bores are always drawn in the fixed dark hole color
//! assert_eq!(HOLE_COLOR, 0x303841);
//!
//! // Draft quality halves the radial resolution of cylinders
//! assert_eq!(scaled_segments(DEFAULT_SEGMENTS, 0.5), 16);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Reference Units**: Builders scale from fixed reference dimensions so
//!   scene geometry stays numerically small

pub mod constants;

#[cfg(test)]
mod tests;
