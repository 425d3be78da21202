//! # Configuration Constants
//!
//! Centralized constants for the part generator. Colors, tessellation
//! resolution, reference dimensions and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Colors**: Fixed hole color and the builder default finish
//! - **Resolution**: Radial segment counts for cylinders
//! - **Reference Dimensions**: Base units the builders scale against
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum triangle area accepted by mesh validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Fixed color of bores and cavities (`#303841`).
///
/// Hole-tagged primitives always render in this color and are skipped by the
/// material and overlay passes.
///
/// # Example
///
/// ```rust
/// use config::constants::HOLE_COLOR;
///
/// assert_eq!(format!("#{:06x}", HOLE_COLOR), "#303841");
/// ```
pub const HOLE_COLOR: u32 = 0x303841;

/// Color builders give functional surfaces before a material is applied.
pub const DEFAULT_BODY_COLOR: u32 = 0x0072CE;

/// Metalness of the builder default finish.
pub const DEFAULT_METALNESS: f32 = 0.5;

/// Roughness of the builder default finish.
pub const DEFAULT_ROUGHNESS: f32 = 0.2;

/// Vertex color for triangles that carry no finish of their own.
pub const PLACEHOLDER_COLOR: u32 = 0x3DD2C0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default radial segment count for cylinders (bores, shafts, flanges).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Floor on the gear body tessellation.
///
/// The body uses `max(MIN_GEAR_SEGMENTS, 2 * teeth)` segments so higher tooth
/// counts get proportionally finer circles.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_GEAR_SEGMENTS;
///
/// let teeth = 8u32;
/// assert_eq!(MIN_GEAR_SEGMENTS.max(teeth * 2), 24);
/// ```
pub const MIN_GEAR_SEGMENTS: u32 = 24;

/// Lower clamp applied when render quality scales radial segments.
pub const MIN_SEGMENTS: u32 = 8;

/// Upper clamp applied when render quality scales radial segments up.
///
/// Never reduces a count below its unscaled value.
pub const MAX_SEGMENTS: u32 = 256;

// =============================================================================
// REFERENCE DIMENSIONS
// =============================================================================

/// Gear pitch diameter (mm) that maps to a unit body radius.
pub const GEAR_REFERENCE_DIAMETER: f64 = 30.0;

/// Gear face width (mm) that maps to a unit height scale.
pub const GEAR_REFERENCE_FACE_WIDTH: f64 = 10.0;

/// Heat sink width (mm) at which fins are exactly `HEAT_SINK_FIN_THICKNESS` thick.
pub const HEAT_SINK_REFERENCE_WIDTH: f64 = 60.0;

/// Fin thickness (mm) at the reference heat sink width.
pub const HEAT_SINK_FIN_THICKNESS: f64 = 2.0;

/// Factor by which holes are taller than the part they pierce, so bores
/// visibly break through both faces.
pub const HOLE_PIERCE_FACTOR: f64 = 1.1;

/// Millimetre to scene unit conversion for builders working in millimetres.
///
/// # Example
///
/// ```rust
/// use config::constants::MM_TO_SCENE;
///
/// // A 40 mm flange becomes a 2 unit wide disc in the viewport
/// assert_eq!(40.0 * MM_TO_SCENE, 2.0);
/// ```
pub const MM_TO_SCENE: f64 = 0.05;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of primitives in one generated assembly.
///
/// Guards against absurd tooth or fin counts before anything is allocated.
pub const MAX_PRIMITIVES: usize = 10_000;

/// Maximum number of vertices in a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Scales a radial segment count by a render-quality factor.
///
/// The result is rounded and clamped to `MIN_SEGMENTS..=MAX_SEGMENTS`, with
/// the upper bound raised to `base` so a count the builder asked for is kept.
///
/// # Example
///
/// ```rust
/// use config::constants::{scaled_segments, MAX_SEGMENTS, MIN_SEGMENTS};
///
/// assert_eq!(scaled_segments(40, 1.0), 40);
/// assert_eq!(scaled_segments(40, 2.0), 80);
/// assert_eq!(scaled_segments(10, 0.5), MIN_SEGMENTS);
/// assert_eq!(scaled_segments(200, 2.0), MAX_SEGMENTS);
/// assert_eq!(scaled_segments(400, 1.0), 400);
/// ```
pub fn scaled_segments(base: u32, factor: f64) -> u32 {
    let scaled = (base as f64 * factor).round();
    if !scaled.is_finite() || scaled <= MIN_SEGMENTS as f64 {
        return MIN_SEGMENTS;
    }
    let ceiling = MAX_SEGMENTS.max(base);
    if scaled >= ceiling as f64 {
        return ceiling;
    }
    (scaled as u32).max(MIN_SEGMENTS)
}
