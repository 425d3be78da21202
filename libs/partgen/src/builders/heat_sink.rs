//! # Heat Sink
//!
//! A base plate with a row of equally spaced fins. Built in millimetres.
//!
//! Fin thickness scales with width (2 mm at the 60 mm reference) and the gaps
//! are sized so `n` fins and `n + 1` gaps exactly fill the width. A fin count
//! that cannot fit with a positive gap is clamped to the largest count that
//! does.

use super::{budget, ensure_primitive_budget};
use crate::assembly::{MeshAssembly, PartGroup};
use crate::error::GenerateError;
use crate::model::ModelType;
use crate::params::ResolvedParameters;
use crate::primitive::{Primitive, Role};
use config::constants::{
    EPSILON, HEAT_SINK_FIN_THICKNESS, HEAT_SINK_REFERENCE_WIDTH, MM_TO_SCENE,
};
use log::warn;

/// Heat sink inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSinkParams {
    pub width: f64,
    pub length: f64,
    pub base_height: f64,
    pub fin_count: u32,
    pub fin_height: f64,
}

impl HeatSinkParams {
    pub fn from_resolved(params: &ResolvedParameters) -> Result<Self, GenerateError> {
        Ok(Self {
            width: params.dimension("width")?,
            length: params.dimension("length")?,
            base_height: params.dimension("baseHeight")?,
            fin_count: params.count("finCount")?,
            fin_height: params.dimension("finHeight")?,
        })
    }
}

/// Horizontal placement of the fins across the base.
///
/// # Example
///
/// ```rust
/// use partgen::builders::heat_sink::FinLayout;
///
/// let layout = FinLayout::new(60.0, 12);
/// assert_eq!(layout.count, 12);
/// assert_eq!(layout.thickness, 2.0);
/// assert!((layout.spacing - 36.0 / 13.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinLayout {
    /// Fins actually placed (after clamping)
    pub count: u32,
    pub thickness: f64,
    /// Gap between neighbouring fins and between the outer fins and the edges
    pub spacing: f64,
    pub width: f64,
}

impl FinLayout {
    /// Lays out `requested` fins across `width`.
    pub fn new(width: f64, requested: u32) -> Self {
        let thickness = HEAT_SINK_FIN_THICKNESS * (width / HEAT_SINK_REFERENCE_WIDTH);
        let count = max_fins(width, thickness).min(requested);
        if count < requested {
            warn!(
                "heat sink: {requested} fins of {thickness:.3} mm do not fit in {width} mm, clamping to {count}"
            );
        }
        let spacing = if count == 0 {
            width
        } else {
            (width - count as f64 * thickness) / (count as f64 + 1.0)
        };
        Self {
            count,
            thickness,
            spacing,
            width,
        }
    }

    /// Center X of fin `index`, with the base centered on the origin.
    pub fn center_x(&self, index: u32) -> f64 {
        let i = index as f64;
        -self.width / 2.0 + (i + 1.0) * self.spacing + (i + 0.5) * self.thickness
    }
}

/// Largest fin count leaving a strictly positive gap (wider than `EPSILON`).
fn max_fins(width: f64, thickness: f64) -> u32 {
    let mut n = (width / thickness).ceil() as u32;
    while n > 0 && width - n as f64 * thickness < EPSILON {
        n -= 1;
    }
    n
}

/// Builds a heat sink.
pub fn build(params: &HeatSinkParams) -> Result<MeshAssembly, GenerateError> {
    let layout = FinLayout::new(params.width, params.fin_count);
    ensure_primitive_budget(budget(&[1, layout.count]))?;

    let mut group = PartGroup::with_capacity(1 + layout.count as usize);
    group.push(Primitive::cuboid(
        "base",
        Role::Body,
        params.width,
        params.base_height,
        params.length,
    ));

    let fin_y = params.base_height / 2.0 + params.fin_height / 2.0;
    for i in 0..layout.count {
        group.push(
            Primitive::cuboid(
                format!("fin-{i}"),
                Role::Feature,
                layout.thickness,
                params.fin_height,
                params.length,
            )
            .at(layout.center_x(i), fin_y, 0.0),
        );
    }

    Ok(MeshAssembly::new(ModelType::HeatSink, MM_TO_SCENE, group))
}
