//! # Flanged Coupling
//!
//! A flat flange with a center bore and a ring of bolt holes. Built in
//! millimetres.

use super::{budget, ensure_primitive_budget};
use super::layout::polar_slots;
use crate::assembly::{MeshAssembly, PartGroup};
use crate::error::GenerateError;
use crate::model::ModelType;
use crate::params::ResolvedParameters;
use crate::primitive::{Primitive, Role};
use config::constants::{DEFAULT_SEGMENTS, HOLE_PIERCE_FACTOR, MM_TO_SCENE};

/// Flanged coupling inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlangedCouplingParams {
    pub diameter: f64,
    pub thickness: f64,
    pub hole_count: u32,
    pub bolt_circle_diameter: f64,
}

impl FlangedCouplingParams {
    pub fn from_resolved(params: &ResolvedParameters) -> Result<Self, GenerateError> {
        Ok(Self {
            diameter: params.dimension("diameter")?,
            thickness: params.dimension("faceWidth")?,
            hole_count: params.count("holeCount")?,
            bolt_circle_diameter: params.dimension("boltCircleDiameter")?,
        })
    }
}

/// Builds a flanged coupling.
pub fn build(params: &FlangedCouplingParams) -> Result<MeshAssembly, GenerateError> {
    ensure_primitive_budget(budget(&[2, params.hole_count]))?;

    let d = params.diameter;
    let hole_height = params.thickness * HOLE_PIERCE_FACTOR;

    let mut group = PartGroup::with_capacity(2 + params.hole_count as usize);
    group.push(Primitive::cylinder(
        "flange",
        Role::Body,
        0.5 * d,
        params.thickness,
        DEFAULT_SEGMENTS,
    ));
    group.push(Primitive::hole("center-bore", 0.2 * d, hole_height, DEFAULT_SEGMENTS));

    for (i, slot) in polar_slots(params.hole_count, 0.5 * params.bolt_circle_diameter).enumerate() {
        group.push(
            Primitive::hole(format!("bolt-hole-{i}"), 0.05 * d, hole_height, DEFAULT_SEGMENTS)
                .at(slot.x, 0.0, slot.z),
        );
    }

    Ok(MeshAssembly::new(ModelType::FlangedCoupling, MM_TO_SCENE, group))
}
