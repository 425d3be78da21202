//! # Model Tags
//!
//! Closed enumerations selecting what gets built and how finely it is
//! triangulated. Tags parse from and print as the kebab-case strings the UI
//! uses (`spur-gear`, `heat-sink`, ...).

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Part family selecting which builder runs.
///
/// # Example
///
/// ```rust
/// use partgen::ModelType;
///
/// let model: ModelType = "heat-sink".parse().unwrap();
/// assert_eq!(model, ModelType::HeatSink);
/// assert_eq!(model.to_string(), "heat-sink");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelType {
    #[default]
    SpurGear,
    FlangedCoupling,
    MountingBracket,
    HeatSink,
    GearboxAssembly,
}

impl ModelType {
    /// Every model type, in UI order.
    pub const ALL: [ModelType; 5] = [
        ModelType::SpurGear,
        ModelType::FlangedCoupling,
        ModelType::MountingBracket,
        ModelType::HeatSink,
        ModelType::GearboxAssembly,
    ];

    /// Kebab-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::SpurGear => "spur-gear",
            ModelType::FlangedCoupling => "flanged-coupling",
            ModelType::MountingBracket => "mounting-bracket",
            ModelType::HeatSink => "heat-sink",
            ModelType::GearboxAssembly => "gearbox-assembly",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            ModelType::SpurGear => "Spur Gear",
            ModelType::FlangedCoupling => "Flanged Coupling",
            ModelType::MountingBracket => "Mounting Bracket",
            ModelType::HeatSink => "Heat Sink",
            ModelType::GearboxAssembly => "Gearbox Assembly",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelType::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| GenerateError::UnknownModelType(s.to_string()))
    }
}

/// Triangulation resolution chosen in the settings tab.
///
/// Quality never changes the assembly, only how many radial segments each
/// cylinder gets when it is turned into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    Draft,
    #[default]
    Standard,
    High,
}

impl RenderQuality {
    /// Multiplier applied to cylinder radial segments.
    pub fn segment_factor(self) -> f64 {
        match self {
            RenderQuality::Draft => 0.5,
            RenderQuality::Standard => 1.0,
            RenderQuality::High => 2.0,
        }
    }

    /// Lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            RenderQuality::Draft => "draft",
            RenderQuality::Standard => "standard",
            RenderQuality::High => "high",
        }
    }
}

impl fmt::Display for RenderQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderQuality {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(RenderQuality::Draft),
            "standard" => Ok(RenderQuality::Standard),
            "high" => Ok(RenderQuality::High),
            other => Err(GenerateError::UnknownQuality(other.to_string())),
        }
    }
}
