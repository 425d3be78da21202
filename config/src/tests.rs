//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// COLOR TESTS
// =============================================================================

#[test]
fn test_hole_color_is_fixed_dark_gray() {
    assert_eq!(HOLE_COLOR, 0x303841);
}

#[test]
fn test_hole_color_differs_from_body_color() {
    assert_ne!(HOLE_COLOR, DEFAULT_BODY_COLOR);
}

#[test]
fn test_default_finish_in_unit_range() {
    assert!((0.0..=1.0).contains(&DEFAULT_METALNESS));
    assert!((0.0..=1.0).contains(&DEFAULT_ROUGHNESS));
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_segment_bounds_ordered() {
    assert!(MIN_SEGMENTS >= 3, "a circle needs at least 3 points");
    assert!(MIN_SEGMENTS < DEFAULT_SEGMENTS);
    assert!(DEFAULT_SEGMENTS < MAX_SEGMENTS);
}

#[test]
fn test_gear_floor_matches_reference_teeth() {
    // 12 teeth is where 2 * teeth starts to exceed the floor
    assert_eq!(MIN_GEAR_SEGMENTS, 24);
}

#[test]
fn test_scaled_segments_identity() {
    assert_eq!(scaled_segments(DEFAULT_SEGMENTS, 1.0), DEFAULT_SEGMENTS);
}

#[test]
fn test_scaled_segments_draft_and_high() {
    assert_eq!(scaled_segments(DEFAULT_SEGMENTS, 0.5), 16);
    assert_eq!(scaled_segments(DEFAULT_SEGMENTS, 2.0), 64);
}

#[test]
fn test_scaled_segments_clamps() {
    assert_eq!(scaled_segments(4, 0.5), MIN_SEGMENTS);
    assert_eq!(scaled_segments(200, 2.0), MAX_SEGMENTS);
    assert_eq!(scaled_segments(32, f64::NAN), MIN_SEGMENTS);
}

#[test]
fn test_scaled_segments_keeps_fine_bases() {
    // 200 teeth ask for a 400-segment body
    assert_eq!(scaled_segments(400, 1.0), 400);
    assert_eq!(scaled_segments(400, 2.0), 400);
    assert_eq!(scaled_segments(400, 0.5), 200);
}

// =============================================================================
// REFERENCE DIMENSION TESTS
// =============================================================================

#[test]
fn test_reference_dimensions_positive() {
    assert!(GEAR_REFERENCE_DIAMETER > 0.0);
    assert!(GEAR_REFERENCE_FACE_WIDTH > 0.0);
    assert!(HEAT_SINK_REFERENCE_WIDTH > 0.0);
    assert!(HEAT_SINK_FIN_THICKNESS > 0.0);
}

#[test]
fn test_holes_pierce_through() {
    assert!(HOLE_PIERCE_FACTOR > 1.0);
}

#[test]
fn test_mm_to_scene_shrinks() {
    assert!(MM_TO_SCENE > 0.0 && MM_TO_SCENE < 1.0);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_primitives_reasonable() {
    // Room for the largest slider values with plenty to spare
    assert!(MAX_PRIMITIVES >= 1_000);
}

#[test]
fn test_max_vertices_reasonable() {
    assert!(MAX_VERTICES >= 1_000_000);
    assert!(MAX_TRIANGLES >= 1_000_000);
}
