//! # Mounting Bracket
//!
//! A flat plate with mounting holes placed from a fixed table for one to four
//! holes and on a circle beyond that. Built in millimetres.
//!
//! The plate stands upright in the XY plane facing the camera: both the plate
//! and its holes are turned 90° about X, so the holes pierce the thickness.

use super::{budget, ensure_primitive_budget};
use crate::assembly::{MeshAssembly, PartGroup};
use crate::error::GenerateError;
use crate::model::ModelType;
use crate::params::ResolvedParameters;
use crate::primitive::{Primitive, Role};
use config::constants::{DEFAULT_SEGMENTS, HOLE_PIERCE_FACTOR, MM_TO_SCENE};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Mounting bracket inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingBracketParams {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub hole_count: u32,
}

impl MountingBracketParams {
    pub fn from_resolved(params: &ResolvedParameters) -> Result<Self, GenerateError> {
        Ok(Self {
            width: params.dimension("width")?,
            height: params.dimension("height")?,
            thickness: params.dimension("thickness")?,
            hole_count: params.count("holeCount")?,
        })
    }
}

/// Normalized hole centers: `x` as a fraction of width, `y` of height.
///
/// # Example
///
/// ```rust
/// use partgen::builders::mounting_bracket::hole_layout;
/// use glam::DVec2;
///
/// // Four holes: top-left, top-right, bottom-left, bottom-right
/// assert_eq!(
///     hole_layout(4),
///     vec![
///         DVec2::new(-0.3, 0.3),
///         DVec2::new(0.3, 0.3),
///         DVec2::new(-0.3, -0.3),
///         DVec2::new(0.3, -0.3),
///     ]
/// );
/// ```
pub fn hole_layout(count: u32) -> Vec<DVec2> {
    match count {
        0 => Vec::new(),
        1 => vec![DVec2::ZERO],
        2 => vec![DVec2::new(-0.3, 0.0), DVec2::new(0.3, 0.0)],
        3 => vec![
            DVec2::new(0.0, 0.3),
            DVec2::new(-0.3, -0.15),
            DVec2::new(0.3, -0.15),
        ],
        4 => vec![
            DVec2::new(-0.3, 0.3),
            DVec2::new(0.3, 0.3),
            DVec2::new(-0.3, -0.3),
            DVec2::new(0.3, -0.3),
        ],
        n => (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                DVec2::new(0.3 * angle.cos(), 0.3 * angle.sin())
            })
            .collect(),
    }
}

/// Builds a mounting bracket.
pub fn build(params: &MountingBracketParams) -> Result<MeshAssembly, GenerateError> {
    ensure_primitive_budget(budget(&[1, params.hole_count]))?;

    let mut group = PartGroup::with_capacity(1 + params.hole_count as usize);
    group.push(
        Primitive::cuboid(
            "base-plate",
            Role::Body,
            params.width,
            params.thickness,
            params.height,
        )
        .rotated(FRAC_PI_2, 0.0, 0.0),
    );

    let radius = 0.6 * params.thickness;
    let hole_height = params.thickness * HOLE_PIERCE_FACTOR;
    for (i, uv) in hole_layout(params.hole_count).into_iter().enumerate() {
        group.push(
            Primitive::hole(format!("mounting-hole-{i}"), radius, hole_height, DEFAULT_SEGMENTS)
                .at(uv.x * params.width, uv.y * params.height, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        );
    }

    Ok(MeshAssembly::new(ModelType::MountingBracket, MM_TO_SCENE, group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Shape;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn params(hole_count: u32) -> MountingBracketParams {
        MountingBracketParams {
            width: 50.0,
            height: 40.0,
            thickness: 5.0,
            hole_count,
        }
    }

    fn hole_positions(assembly: &MeshAssembly) -> Vec<DVec3> {
        assembly
            .root()
            .with_role(Role::Hole)
            .map(|p| p.position)
            .collect()
    }

    #[test]
    fn test_base_plate() {
        let bracket = build(&params(4)).unwrap();
        let base = bracket.body().unwrap();
        assert_eq!(
            base.shape,
            Shape::Box { width: 50.0, height: 5.0, depth: 40.0 }
        );
        assert_eq!(base.rotation, DVec3::new(FRAC_PI_2, 0.0, 0.0));
    }

    #[test]
    fn test_single_hole_centered() {
        assert_eq!(hole_positions(&build(&params(1)).unwrap()), vec![DVec3::ZERO]);
    }

    #[test]
    fn test_two_holes_side_by_side() {
        assert_eq!(
            hole_positions(&build(&params(2)).unwrap()),
            vec![DVec3::new(-15.0, 0.0, 0.0), DVec3::new(15.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn test_three_holes_triangle() {
        let bracket = build(&params(3)).unwrap();
        assert_eq!(bracket.primitive_count(), 4);
        let holes = hole_positions(&bracket);
        assert_relative_eq!(holes[0].x, 0.0);
        assert_relative_eq!(holes[0].y, 12.0);
        assert_relative_eq!(holes[1].x, -15.0);
        assert_relative_eq!(holes[1].y, -6.0);
        assert_relative_eq!(holes[2].x, 15.0);
        assert_relative_eq!(holes[2].y, -6.0);
    }

    #[test]
    fn test_four_holes_corners_in_order() {
        let holes = hole_positions(&build(&params(4)).unwrap());
        assert_eq!(
            holes,
            vec![
                DVec3::new(-15.0, 12.0, 0.0),
                DVec3::new(15.0, 12.0, 0.0),
                DVec3::new(-15.0, -12.0, 0.0),
                DVec3::new(15.0, -12.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_five_or_more_holes_on_circle() {
        for count in [5, 6, 8] {
            let layout = hole_layout(count);
            assert_eq!(layout.len(), count as usize);
            assert_relative_eq!(layout[0].x, 0.3);
            for uv in layout {
                assert_relative_eq!(uv.length(), 0.3, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_hole_shape_and_orientation() {
        let bracket = build(&params(2)).unwrap();
        for hole in bracket.root().with_role(Role::Hole) {
            assert_eq!(hole.rotation, DVec3::new(FRAC_PI_2, 0.0, 0.0));
            match hole.shape {
                Shape::Cylinder { radius_top, height, .. } => {
                    assert_relative_eq!(radius_top, 3.0);
                    assert_relative_eq!(height, 5.5);
                }
                Shape::Box { .. } => panic!("hole must be a cylinder"),
            }
        }
    }

    #[test]
    fn test_no_holes() {
        assert_eq!(build(&params(0)).unwrap().primitive_count(), 1);
    }
}
