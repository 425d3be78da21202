//! # Spur Gear
//!
//! A disc body ringed by box teeth, a center bore, and optional mounting
//! holes. Geometry is normalized: a 30 mm pitch diameter maps to a unit body
//! radius and a 10 mm face width to a unit height scale.

use super::layout::polar_slots;
use super::{budget, ensure_primitive_budget};
use crate::assembly::{MeshAssembly, PartGroup};
use crate::error::GenerateError;
use crate::model::ModelType;
use crate::params::ResolvedParameters;
use crate::primitive::{Primitive, Role};
use config::constants::{
    DEFAULT_SEGMENTS, GEAR_REFERENCE_DIAMETER, GEAR_REFERENCE_FACE_WIDTH, MIN_GEAR_SEGMENTS,
};

/// Spur gear inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpurGearParams {
    /// Pitch diameter, mm
    pub diameter: f64,
    /// Face width, mm
    pub face_width: f64,
    pub teeth: u32,
    pub show_holes: bool,
    pub hole_count: u32,
}

impl SpurGearParams {
    pub fn from_resolved(params: &ResolvedParameters) -> Result<Self, GenerateError> {
        Ok(Self {
            diameter: params.dimension("diameter")?,
            face_width: params.dimension("faceWidth")?,
            teeth: params.count("teeth")?,
            show_holes: params.flag("showHoles")?,
            hole_count: params.count("holeCount")?,
        })
    }

    /// Mounting holes actually emitted.
    pub fn mounting_holes(&self) -> u32 {
        if self.show_holes {
            self.hole_count
        } else {
            0
        }
    }
}

/// Radial segments of the gear body: finer for more teeth, never below 24.
///
/// # Example
///
/// ```rust
/// use partgen::builders::spur_gear::body_segments;
///
/// assert_eq!(body_segments(8), 24);
/// assert_eq!(body_segments(20), 40);
/// ```
pub fn body_segments(teeth: u32) -> u32 {
    MIN_GEAR_SEGMENTS.max(teeth.saturating_mul(2))
}

/// Dimensions of a single gear, in whatever units the caller works in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GearProfile {
    pub radius: f64,
    /// Body and tooth height
    pub thickness: f64,
    pub bore_height: f64,
    pub teeth: u32,
}

/// Body, teeth and center bore of one gear centered on the origin.
///
/// Shared by the spur gear and the gearbox.
pub(crate) fn gear_core(profile: &GearProfile, extra_capacity: usize) -> PartGroup {
    let GearProfile {
        radius,
        thickness,
        bore_height,
        teeth,
    } = *profile;

    let mut group = PartGroup::with_capacity(teeth as usize + 2 + extra_capacity);
    group.push(Primitive::cylinder(
        "gear-body",
        Role::Body,
        radius,
        thickness,
        body_segments(teeth),
    ));

    let tooth_radius = 1.2 * radius;
    for (i, slot) in polar_slots(teeth, tooth_radius).enumerate() {
        group.push(
            Primitive::cuboid(
                format!("tooth-{i}"),
                Role::Feature,
                0.2 * radius,
                thickness,
                0.4 * radius,
            )
            .at(slot.x, 0.0, slot.z)
            .rotated(0.0, slot.angle, 0.0),
        );
    }

    group.push(Primitive::hole(
        "center-bore",
        0.3 * radius,
        bore_height,
        DEFAULT_SEGMENTS,
    ));
    group
}

/// Builds a spur gear.
pub fn build(params: &SpurGearParams) -> Result<MeshAssembly, GenerateError> {
    let holes = params.mounting_holes();
    ensure_primitive_budget(budget(&[2, params.teeth, holes]))?;

    let radius_scale = params.diameter / GEAR_REFERENCE_DIAMETER;
    let height_scale = params.face_width / GEAR_REFERENCE_FACE_WIDTH;
    let bore_height = 0.4 * height_scale;

    let mut group = gear_core(
        &GearProfile {
            radius: radius_scale,
            thickness: 0.3 * height_scale,
            bore_height,
            teeth: params.teeth,
        },
        holes as usize,
    );

    for (i, slot) in polar_slots(holes, 0.7 * radius_scale).enumerate() {
        group.push(
            Primitive::hole(
                format!("mounting-hole-{i}"),
                0.15 * radius_scale,
                bore_height,
                DEFAULT_SEGMENTS,
            )
            .at(slot.x, 0.0, slot.z),
        );
    }

    Ok(MeshAssembly::new(ModelType::SpurGear, 1.0, group))
}
