//! # Builders
//!
//! One builder per model type. Each takes its typed parameter struct and
//! returns a fresh [`MeshAssembly`](crate::MeshAssembly) with exactly one body
//! primitive per (sub-)assembly.

pub mod flanged_coupling;
pub mod gearbox;
pub mod heat_sink;
pub mod layout;
pub mod mounting_bracket;
pub mod spur_gear;

use crate::assembly::MeshAssembly;
use crate::error::GenerateError;
use crate::model::ModelType;
use crate::params::ResolvedParameters;
use config::constants::MAX_PRIMITIVES;

/// Dispatches to the builder of `params.model()`.
pub fn build(params: &ResolvedParameters) -> Result<MeshAssembly, GenerateError> {
    match params.model() {
        ModelType::SpurGear => {
            spur_gear::build(&spur_gear::SpurGearParams::from_resolved(params)?)
        }
        ModelType::FlangedCoupling => flanged_coupling::build(
            &flanged_coupling::FlangedCouplingParams::from_resolved(params)?,
        ),
        ModelType::MountingBracket => mounting_bracket::build(
            &mounting_bracket::MountingBracketParams::from_resolved(params)?,
        ),
        ModelType::HeatSink => {
            heat_sink::build(&heat_sink::HeatSinkParams::from_resolved(params)?)
        }
        ModelType::GearboxAssembly => {
            gearbox::build(&gearbox::GearboxParams::from_resolved(params)?)
        }
    }
}

/// Sums per-part primitive counts without overflowing on 32-bit targets.
pub(crate) fn budget(parts: &[u32]) -> usize {
    parts
        .iter()
        .fold(0usize, |total, &n| total.saturating_add(n as usize))
}

/// Fails before allocation when an assembly would exceed `MAX_PRIMITIVES`.
pub(crate) fn ensure_primitive_budget(count: usize) -> Result<(), GenerateError> {
    if count > MAX_PRIMITIVES {
        return Err(GenerateError::TooManyPrimitives {
            count,
            max: MAX_PRIMITIVES,
        });
    }
    Ok(())
}
