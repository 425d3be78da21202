//! # Gearbox Assembly
//!
//! A base plate carrying two gears on shafts: an input gear and a 1.5x output
//! gear placed so their pitch circles touch. Each gear is its own
//! sub-assembly built by the shared single-gear builder. Built in millimetres.

use super::{budget, ensure_primitive_budget};
use super::spur_gear::{gear_core, GearProfile};
use crate::assembly::{MeshAssembly, PartGroup, SubAssembly};
use crate::error::GenerateError;
use crate::model::ModelType;
use crate::params::ResolvedParameters;
use crate::primitive::{Primitive, Role};
use config::constants::{DEFAULT_SEGMENTS, MM_TO_SCENE};
use glam::DVec3;

/// Output gear size relative to the input gear.
pub const OUTPUT_RATIO: f64 = 1.5;

/// Gearbox inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearboxParams {
    /// Input gear diameter, mm; also the scale of the whole assembly
    pub diameter: f64,
    /// Input gear teeth
    pub teeth: u32,
}

impl GearboxParams {
    pub fn from_resolved(params: &ResolvedParameters) -> Result<Self, GenerateError> {
        Ok(Self {
            diameter: params.dimension("diameter")?,
            teeth: params.count("teeth")?,
        })
    }

    /// Teeth on the output gear.
    pub fn output_teeth(&self) -> u32 {
        ((self.teeth as f64 * OUTPUT_RATIO).round() as u32).max(1)
    }
}

/// Builds the gearbox.
pub fn build(params: &GearboxParams) -> Result<MeshAssembly, GenerateError> {
    let output_teeth = params.output_teeth();
    ensure_primitive_budget(budget(&[3, 2, params.teeth, 2, output_teeth]))?;

    let d = params.diameter;
    let plate_height = 0.2 * d;
    let gear_thickness = 0.2 * d;
    let shaft_height = 0.4 * d;

    let input_radius = 0.5 * d;
    let output_radius = OUTPUT_RATIO * input_radius;
    // Pitch circles touch: centre distance equals the sum of the radii.
    let input_x = -0.5 * d;
    let output_x = input_x + input_radius + output_radius;

    let shaft_y = plate_height / 2.0 + shaft_height / 2.0;
    let gear_y = plate_height / 2.0 + shaft_height + gear_thickness / 2.0;

    let mut root = PartGroup::with_capacity(3);
    root.push(Primitive::cuboid("base-plate", Role::Body, 3.0 * d, plate_height, 2.0 * d));
    for (name, x) in [("input-shaft", input_x), ("output-shaft", output_x)] {
        root.push(
            Primitive::cylinder(name, Role::Feature, 0.08 * d, shaft_height, DEFAULT_SEGMENTS)
                .at(x, shaft_y, 0.0),
        );
    }

    let gears = [
        ("input-gear", input_x, input_radius, params.teeth),
        ("output-gear", output_x, output_radius, output_teeth),
    ];
    for (name, x, radius, teeth) in gears {
        let gear = gear_core(
            &GearProfile {
                radius,
                thickness: gear_thickness,
                bore_height: gear_thickness * 4.0 / 3.0,
                teeth,
            },
            0,
        );
        root.push_sub_assembly(SubAssembly::new(name, DVec3::new(x, gear_y, 0.0), gear));
    }

    Ok(MeshAssembly::new(ModelType::GearboxAssembly, MM_TO_SCENE, root))
}
