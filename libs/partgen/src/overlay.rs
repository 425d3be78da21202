//! # Simulation Overlays
//!
//! Presentation-only recoloring standing in for a simulation result. The
//! overlay carries a magnitude for display but no per-primitive field data.

use crate::assembly::MeshAssembly;
use crate::error::GenerateError;
use crate::primitive::{Color, Finish};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simulation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Stress,
    Flow,
    Thermal,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [OverlayKind::Stress, OverlayKind::Flow, OverlayKind::Thermal];

    /// Lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Stress => "stress",
            OverlayKind::Flow => "flow",
            OverlayKind::Thermal => "thermal",
        }
    }

    /// Fixed shading profile of this category.
    pub fn finish(self) -> Finish {
        match self {
            // Yellow with an orange glow
            OverlayKind::Stress => Finish {
                emissive: Color(0xFF8C00),
                emissive_intensity: 0.4,
                ..Finish::solid(Color(0xFFD700), 0.3, 0.5)
            },
            OverlayKind::Flow => Finish {
                opacity: 0.6,
                transparent: true,
                ..Finish::solid(Color(0x3B82F6), 0.1, 0.3)
            },
            OverlayKind::Thermal => Finish {
                emissive: Color(0xFF4500),
                emissive_intensity: 0.5,
                ..Finish::solid(Color(0xFF6B00), 0.2, 0.6)
            },
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OverlayKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GenerateError::UnknownOverlay(s.to_string()))
    }
}

/// An active simulation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOverlay {
    pub kind: OverlayKind,
    /// Scalar result shown next to the preview
    pub magnitude: f64,
}

impl SimulationOverlay {
    pub fn new(kind: OverlayKind, magnitude: f64) -> Self {
        Self { kind, magnitude }
    }
}

/// Replaces the finish of every non-hole primitive with the overlay profile.
///
/// Run after [`apply_material`](crate::apply_material); the overlay wins.
///
/// # Example
///
/// ```rust
/// use partgen::{apply_overlay, generate, ModelType, OverlayKind, ParameterSet, SimulationOverlay};
///
/// let mut sink = generate(ModelType::HeatSink, &ParameterSet::new()).unwrap();
/// apply_overlay(&mut sink, &SimulationOverlay::new(OverlayKind::Thermal, 72.0));
/// assert_eq!(sink.body().unwrap().finish, OverlayKind::Thermal.finish());
/// ```
pub fn apply_overlay(assembly: &mut MeshAssembly, overlay: &SimulationOverlay) {
    let finish = overlay.kind.finish();
    assembly.for_each_primitive_mut(|primitive| {
        if !primitive.is_hole() {
            primitive.finish = finish;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{apply_material, MaterialChoice};
    use crate::{generate, ModelType, ParameterSet, Role};

    #[test]
    fn test_overlay_profiles() {
        let stress = OverlayKind::Stress.finish();
        assert_eq!(stress.emissive, Color(0xFF8C00));
        assert!(!stress.transparent);

        let flow = OverlayKind::Flow.finish();
        assert!(flow.transparent);
        assert!(flow.opacity < 1.0);

        let thermal = OverlayKind::Thermal.finish();
        assert!(thermal.emissive_intensity > 0.0);
    }

    #[test]
    fn test_overlay_skips_holes() {
        let mut gear = generate(ModelType::SpurGear, &ParameterSet::new()).unwrap();
        apply_overlay(&mut gear, &SimulationOverlay::new(OverlayKind::Flow, 10.0));
        for primitive in gear.primitives() {
            if primitive.role == Role::Hole {
                assert!(primitive.finish.is_hole_color());
            } else {
                assert_eq!(primitive.finish, OverlayKind::Flow.finish());
            }
        }
    }

    #[test]
    fn test_overlay_wins_over_material() {
        let stress = SimulationOverlay::new(OverlayKind::Stress, 50.0);
        let mut gear = generate(ModelType::SpurGear, &ParameterSet::new()).unwrap();
        apply_overlay(&mut gear, &stress);
        let first = gear.clone();
        apply_material(&mut gear, MaterialChoice::Steel);
        apply_overlay(&mut gear, &stress);
        assert_eq!(gear, first);
    }

    #[test]
    fn test_overlay_reaches_sub_assemblies() {
        let mut gearbox = generate(ModelType::GearboxAssembly, &ParameterSet::new()).unwrap();
        apply_overlay(&mut gearbox, &SimulationOverlay::new(OverlayKind::Thermal, 1.0));
        let gear_body = gearbox.sub_assemblies()[0].group.body().unwrap();
        assert_eq!(gear_body.finish, OverlayKind::Thermal.finish());
    }

    #[test]
    fn test_overlay_tags() {
        assert_eq!("thermal".parse::<OverlayKind>().unwrap(), OverlayKind::Thermal);
        assert_eq!(
            "acoustic".parse::<OverlayKind>().unwrap_err(),
            GenerateError::UnknownOverlay("acoustic".into())
        );
    }
}
