//! # Parameters
//!
//! Named numeric and boolean inputs, the static default table per model type,
//! and resolution of a user parameter set against that table.
//!
//! Defaults are consulted exactly once, in [`ParameterSet::resolve`]; builders
//! only ever see a fully resolved and validated [`ResolvedParameters`].

use crate::error::GenerateError;
use crate::model::ModelType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// VALUES
// =============================================================================

/// A single parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Number(f64),
}

impl ParamValue {
    /// The numeric value, if this is a number.
    pub fn as_number(self) -> Option<f64> {
        match self {
            ParamValue::Number(value) => Some(value),
            ParamValue::Flag(_) => None,
        }
    }

    /// The boolean value, if this is a flag.
    pub fn as_flag(self) -> Option<bool> {
        match self {
            ParamValue::Flag(value) => Some(value),
            ParamValue::Number(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag(value) => write!(f, "{value}"),
            ParamValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

/// Wire form accepted from the UI: slider values arrive as one-element arrays.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawParamValue {
    Flag(bool),
    Number(f64),
    Slider(Vec<f64>),
}

impl RawParamValue {
    fn into_value(self) -> Option<ParamValue> {
        match self {
            RawParamValue::Flag(value) => Some(ParamValue::Flag(value)),
            RawParamValue::Number(value) => Some(ParamValue::Number(value)),
            RawParamValue::Slider(values) => values.first().copied().map(ParamValue::Number),
        }
    }
}

// =============================================================================
// PARAMETER SET
// =============================================================================

/// User supplied parameters, keyed by name.
///
/// Keys the selected model does not use are ignored, so one set can be shared
/// across model types.
///
/// # Example
///
/// ```rust
/// use partgen::{ParameterSet, ParamValue};
///
/// let params = ParameterSet::new().with("teeth", 24).with("showHoles", false);
/// assert_eq!(params.get("teeth"), Some(ParamValue::Number(24.0)));
///
/// // Slider style arrays are accepted when deserializing
/// let parsed: ParameterSet = serde_json::from_str(r#"{"diameter": [45], "showHoles": true}"#).unwrap();
/// assert_eq!(parsed.get("diameter"), Some(ParamValue::Number(45.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, RawParamValue>",
    into = "BTreeMap<String, ParamValue>"
)]
pub struct ParameterSet {
    values: BTreeMap<String, ParamValue>,
}

impl From<BTreeMap<String, RawParamValue>> for ParameterSet {
    fn from(raw: BTreeMap<String, RawParamValue>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(name, value)| value.into_value().map(|value| (name, value)))
            .collect();
        Self { values }
    }
}

impl From<ParameterSet> for BTreeMap<String, ParamValue> {
    fn from(set: ParameterSet) -> Self {
        set.values
    }
}

impl ParameterSet {
    /// Creates an empty set; every parameter falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Looks up a value.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.values.get(name).copied()
    }

    /// Removes a value so the default applies again.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    /// Iterates values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of explicitly set values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merges this set over the default table of `model` and validates every
    /// value the model uses.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::WrongParameterKind`] for a flag given where a number
    ///   is needed, or the reverse
    /// - [`GenerateError::InvalidParameter`] for non-finite or non-positive
    ///   dimensions and for fractional or too small counts
    pub fn resolve(&self, model: ModelType) -> Result<ResolvedParameters, GenerateError> {
        let specs = parameter_specs(model);
        let mut values = BTreeMap::new();

        for spec in specs {
            let value = self.get(spec.name).unwrap_or(spec.default);
            spec.validate(value)?;
            values.insert(spec.name, value);
        }

        Ok(ResolvedParameters { model, values })
    }
}

// =============================================================================
// DEFAULT TABLES
// =============================================================================

/// How a parameter is validated and presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParamKind {
    /// Length in millimetres; finite and strictly positive.
    Dimension,
    /// Whole number no smaller than `min`.
    Count { min: u32 },
    /// On/off switch.
    Flag,
}

/// Slider hint for the UI. Not a validation bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// One row of a model's parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ParamKind,
    pub default: ParamValue,
    pub slider: Option<SliderRange>,
}

impl ParamSpec {
    const fn dimension(name: &'static str, label: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Dimension,
            default: ParamValue::Number(default),
            slider: Some(SliderRange { min, max, step: 1.0 }),
        }
    }

    const fn count(name: &'static str, label: &'static str, least: u32, default: f64, min: f64, max: f64) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Count { min: least },
            default: ParamValue::Number(default),
            slider: Some(SliderRange { min, max, step: 1.0 }),
        }
    }

    const fn flag(name: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Flag,
            default: ParamValue::Flag(default),
            slider: None,
        }
    }

    fn validate(&self, value: ParamValue) -> Result<(), GenerateError> {
        match self.kind {
            ParamKind::Flag => value
                .as_flag()
                .map(|_| ())
                .ok_or_else(|| GenerateError::wrong_kind(self.name, "flag")),
            ParamKind::Dimension => {
                let number = value
                    .as_number()
                    .ok_or_else(|| GenerateError::wrong_kind(self.name, "number"))?;
                if !number.is_finite() {
                    return Err(GenerateError::invalid(self.name, number, "must be finite"));
                }
                if number <= 0.0 {
                    return Err(GenerateError::invalid(self.name, number, "must be positive"));
                }
                Ok(())
            }
            ParamKind::Count { min } => {
                let number = value
                    .as_number()
                    .ok_or_else(|| GenerateError::wrong_kind(self.name, "number"))?;
                if !number.is_finite() || number.fract() != 0.0 {
                    return Err(GenerateError::invalid(self.name, number, "must be a whole number"));
                }
                if number < min as f64 {
                    return Err(GenerateError::invalid(
                        self.name,
                        number,
                        format!("must be at least {min}"),
                    ));
                }
                if number > u32::MAX as f64 {
                    return Err(GenerateError::invalid(self.name, number, "is too large"));
                }
                Ok(())
            }
        }
    }
}

static SPUR_GEAR: [ParamSpec; 5] = [
    ParamSpec::dimension("diameter", "Pitch Diameter (mm)", 30.0, 10.0, 100.0),
    ParamSpec::dimension("faceWidth", "Face Width (mm)", 10.0, 5.0, 30.0),
    ParamSpec::count("teeth", "Number of Teeth", 1, 20.0, 8.0, 50.0),
    ParamSpec::flag("showHoles", "Center Holes", true),
    ParamSpec::count("holeCount", "Hole Count", 0, 6.0, 1.0, 12.0),
];

static FLANGED_COUPLING: [ParamSpec; 4] = [
    ParamSpec::dimension("diameter", "Flange Diameter (mm)", 40.0, 20.0, 120.0),
    ParamSpec::dimension("faceWidth", "Flange Thickness (mm)", 15.0, 5.0, 40.0),
    ParamSpec::count("holeCount", "Bolt Holes", 0, 6.0, 0.0, 12.0),
    ParamSpec::dimension("boltCircleDiameter", "Bolt Circle Diameter (mm)", 30.0, 10.0, 110.0),
];

static MOUNTING_BRACKET: [ParamSpec; 4] = [
    ParamSpec::dimension("width", "Width (mm)", 50.0, 20.0, 150.0),
    ParamSpec::dimension("height", "Height (mm)", 40.0, 20.0, 150.0),
    ParamSpec::dimension("thickness", "Thickness (mm)", 5.0, 1.0, 20.0),
    ParamSpec::count("holeCount", "Mounting Holes", 0, 4.0, 0.0, 8.0),
];

static HEAT_SINK: [ParamSpec; 5] = [
    ParamSpec::dimension("width", "Width (mm)", 60.0, 20.0, 200.0),
    ParamSpec::dimension("length", "Length (mm)", 60.0, 20.0, 200.0),
    ParamSpec::dimension("baseHeight", "Base Height (mm)", 5.0, 1.0, 20.0),
    ParamSpec::count("finCount", "Fin Count", 0, 12.0, 0.0, 40.0),
    ParamSpec::dimension("finHeight", "Fin Height (mm)", 15.0, 5.0, 60.0),
];

static GEARBOX_ASSEMBLY: [ParamSpec; 2] = [
    ParamSpec::dimension("diameter", "Input Gear Diameter (mm)", 30.0, 10.0, 100.0),
    ParamSpec::count("teeth", "Input Gear Teeth", 1, 20.0, 8.0, 50.0),
];

/// The parameter table of a model type: names, defaults, kinds and slider hints.
///
/// # Example
///
/// ```rust
/// use partgen::{parameter_specs, ModelType, ParamValue};
///
/// let specs = parameter_specs(ModelType::SpurGear);
/// let teeth = specs.iter().find(|s| s.name == "teeth").unwrap();
/// assert_eq!(teeth.default, ParamValue::Number(20.0));
/// ```
pub fn parameter_specs(model: ModelType) -> &'static [ParamSpec] {
    match model {
        ModelType::SpurGear => &SPUR_GEAR,
        ModelType::FlangedCoupling => &FLANGED_COUPLING,
        ModelType::MountingBracket => &MOUNTING_BRACKET,
        ModelType::HeatSink => &HEAT_SINK,
        ModelType::GearboxAssembly => &GEARBOX_ASSEMBLY,
    }
}

// =============================================================================
// RESOLVED PARAMETERS
// =============================================================================

/// Every parameter of one model, defaults filled in and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters {
    model: ModelType,
    values: BTreeMap<&'static str, ParamValue>,
}

impl ResolvedParameters {
    /// The model these parameters were resolved for.
    pub fn model(&self) -> ModelType {
        self.model
    }

    fn lookup(&self, name: &str) -> Result<ParamValue, GenerateError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| GenerateError::MissingParameter {
                name: name.to_string(),
                model: self.model.to_string(),
            })
    }

    /// A dimension in millimetres.
    pub fn dimension(&self, name: &str) -> Result<f64, GenerateError> {
        self.lookup(name)?
            .as_number()
            .ok_or_else(|| GenerateError::wrong_kind(name, "number"))
    }

    /// A whole-number count.
    pub fn count(&self, name: &str) -> Result<u32, GenerateError> {
        // Resolution already checked the value is a whole number in range.
        self.dimension(name).map(|value| value as u32)
    }

    /// An on/off flag.
    pub fn flag(&self, name: &str) -> Result<bool, GenerateError> {
        self.lookup(name)?
            .as_flag()
            .ok_or_else(|| GenerateError::wrong_kind(name, "flag"))
    }
}
