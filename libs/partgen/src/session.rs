//! # Design State
//!
//! The parameter store behind the editor panels: current model type,
//! parameters, material, render quality, an optional simulation overlay and an
//! append-only history of design actions.
//!
//! History entries are numbered in the order they were recorded.

use crate::assembly::MeshAssembly;
use crate::error::GenerateError;
use crate::material::{apply_material, MaterialChoice};
use crate::model::{ModelType, RenderQuality};
use crate::overlay::{apply_overlay, OverlayKind, SimulationOverlay};
use crate::params::{ParamValue, ParameterSet};
use serde::{Deserialize, Serialize};

/// One recorded design action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sequence: u64,
    pub action: String,
}

/// Editable design state.
///
/// # Example
///
/// ```rust
/// use partgen::{DesignState, MaterialChoice, ModelType, OverlayKind};
///
/// let mut state = DesignState::new();
/// state.update_parameter("teeth", 24);
/// state.set_material(MaterialChoice::Brass);
/// state.run_simulation(OverlayKind::Stress, 42.0);
///
/// let assembly = state.build().unwrap();
/// assert_eq!(assembly.model(), ModelType::SpurGear);
/// assert_eq!(state.history()[1].action, "Parameter teeth updated to 24");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignState {
    model_type: ModelType,
    parameters: ParameterSet,
    material: MaterialChoice,
    render_quality: RenderQuality,
    simulation: Option<SimulationOverlay>,
    history: Vec<HistoryEntry>,
}

impl Default for DesignState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignState {
    /// Fresh state: spur gear, steel, standard quality, no overlay.
    pub fn new() -> Self {
        let mut state = Self {
            model_type: ModelType::default(),
            parameters: ParameterSet::new(),
            material: MaterialChoice::default(),
            render_quality: RenderQuality::default(),
            simulation: None,
            history: Vec::new(),
        };
        state.record("Model Created");
        state
    }

    fn record(&mut self, action: impl Into<String>) {
        let sequence = self.history.len() as u64;
        self.history.push(HistoryEntry {
            sequence,
            action: action.into(),
        });
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn material(&self) -> MaterialChoice {
        self.material
    }

    pub fn render_quality(&self) -> RenderQuality {
        self.render_quality
    }

    /// The active overlay, if a simulation has run since the last model change.
    pub fn simulation(&self) -> Option<&SimulationOverlay> {
        self.simulation.as_ref()
    }

    /// Every recorded action, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Switches the part family. Clears any simulation overlay.
    pub fn set_model_type(&mut self, model_type: ModelType) {
        self.model_type = model_type;
        self.simulation = None;
        self.record(format!("Model type set to {model_type}"));
    }

    /// Sets one parameter. Values are validated when the assembly is built.
    pub fn update_parameter(&mut self, name: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        self.parameters.set(name, value);
        self.record(format!("Parameter {name} updated to {value}"));
    }

    /// Drops an explicit value so the model default applies again.
    pub fn reset_parameter(&mut self, name: &str) {
        if self.parameters.remove(name).is_some() {
            self.record(format!("Parameter {name} reset"));
        }
    }

    pub fn set_material(&mut self, material: MaterialChoice) {
        self.material = material;
        self.record(format!("Material set to {material}"));
    }

    pub fn set_render_quality(&mut self, quality: RenderQuality) {
        self.render_quality = quality;
        self.record(format!("Render quality set to {quality}"));
    }

    /// Activates an overlay with a precomputed magnitude.
    pub fn run_simulation(&mut self, kind: OverlayKind, magnitude: f64) {
        self.record(format!("{kind} simulation started"));
        self.simulation = Some(SimulationOverlay::new(kind, magnitude));
        self.record(format!("{kind} simulation completed"));
    }

    /// Removes the overlay so the material shows again.
    pub fn clear_simulation(&mut self) {
        if self.simulation.take().is_some() {
            self.record("Simulation cleared");
        }
    }

    /// Generates the current model, then applies material and overlay.
    pub fn build(&self) -> Result<MeshAssembly, GenerateError> {
        let mut assembly = crate::generate(self.model_type, &self.parameters)?;
        apply_material(&mut assembly, self.material);
        if let Some(overlay) = &self.simulation {
            apply_overlay(&mut assembly, overlay);
        }
        Ok(assembly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Role;

    fn actions(state: &DesignState) -> Vec<&str> {
        state.history().iter().map(|e| e.action.as_str()).collect()
    }

    #[test]
    fn test_new_state_records_creation() {
        let state = DesignState::new();
        assert_eq!(actions(&state), ["Model Created"]);
        assert_eq!(state.model_type(), ModelType::SpurGear);
        assert_eq!(state.material(), MaterialChoice::Steel);
        assert_eq!(state.render_quality(), RenderQuality::Standard);
        assert!(state.simulation().is_none());
    }

    #[test]
    fn test_history_messages() {
        let mut state = DesignState::new();
        state.set_model_type(ModelType::HeatSink);
        state.update_parameter("finCount", 8);
        state.update_parameter("showHoles", false);
        state.set_material(MaterialChoice::Brass);
        state.run_simulation(OverlayKind::Thermal, 63.5);

        assert_eq!(
            actions(&state),
            [
                "Model Created",
                "Model type set to heat-sink",
                "Parameter finCount updated to 8",
                "Parameter showHoles updated to false",
                "Material set to brass",
                "thermal simulation started",
                "thermal simulation completed",
            ]
        );
        let sequences: Vec<u64> = state.history().iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_model_change_clears_overlay() {
        let mut state = DesignState::new();
        state.run_simulation(OverlayKind::Stress, 10.0);
        state.update_parameter("teeth", 30);
        assert!(state.simulation().is_some());

        state.set_model_type(ModelType::FlangedCoupling);
        assert!(state.simulation().is_none());
    }

    #[test]
    fn test_build_applies_overlay_over_material() {
        let mut state = DesignState::new();
        state.set_material(MaterialChoice::Aluminum);
        assert_eq!(
            state.build().unwrap().body().unwrap().finish,
            MaterialChoice::Aluminum.finish()
        );

        state.run_simulation(OverlayKind::Flow, 20.0);
        let assembly = state.build().unwrap();
        assert_eq!(assembly.body().unwrap().finish, OverlayKind::Flow.finish());
        assert!(assembly
            .primitives()
            .iter()
            .filter(|p| p.role == Role::Hole)
            .all(|p| p.finish.is_hole_color()));

        state.clear_simulation();
        assert_eq!(
            state.build().unwrap().body().unwrap().finish,
            MaterialChoice::Aluminum.finish()
        );
    }

    #[test]
    fn test_shared_keys_carry_across_models() {
        let mut state = DesignState::new();
        state.update_parameter("diameter", 60);
        state.set_model_type(ModelType::GearboxAssembly);
        let gearbox = state.build().unwrap();
        // Plate width is three diameters
        let plate = gearbox.body().unwrap();
        assert!(matches!(plate.shape, crate::Shape::Box { width, .. } if width == 180.0));
    }

    #[test]
    fn test_build_reports_invalid_parameter() {
        let mut state = DesignState::new();
        state.update_parameter("teeth", 0);
        assert!(matches!(
            state.build(),
            Err(GenerateError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_reset_parameter_restores_default() {
        let mut state = DesignState::new();
        state.update_parameter("teeth", 10);
        state.reset_parameter("teeth");
        state.reset_parameter("teeth");
        assert_eq!(state.build().unwrap().primitive_count(), 28);
        assert_eq!(state.history().last().unwrap().action, "Parameter teeth reset");
        assert_eq!(state.history().len(), 3);
    }
}
