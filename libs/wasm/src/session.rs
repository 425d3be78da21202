//! # Design Session
//!
//! JavaScript handle on a [`DesignState`]. Tags arrive as strings and are
//! parsed here; every setter records a history entry.

use crate::{mesh_handle::MeshHandle, to_js, WasmError};
use partgen::{DesignState, MaterialChoice, ModelType, OverlayKind, RenderQuality};
use partgen_mesh::assembly_to_mesh;
use wasm_bindgen::prelude::*;

/// Stateful editor session.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const session = new DesignSession();
/// session.set_model_type("heat-sink");
/// session.update_parameter("finCount", 16);
/// session.run_simulation("thermal", 72.4);
/// const mesh = session.render();
/// const history = JSON.parse(session.history_json());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DesignSession {
    state: DesignState,
}

#[wasm_bindgen]
impl DesignSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn model_type(&self) -> String {
        self.state.model_type().to_string()
    }

    pub fn set_model_type(&mut self, model_type: &str) -> Result<(), JsValue> {
        let model: ModelType = model_type.parse().map_err(to_js)?;
        self.state.set_model_type(model);
        Ok(())
    }

    /// Sets a numeric parameter (slider value).
    pub fn update_parameter(&mut self, name: &str, value: f64) {
        self.state.update_parameter(name, value);
    }

    /// Sets an on/off parameter (switch value).
    pub fn update_flag(&mut self, name: &str, value: bool) {
        self.state.update_parameter(name, value);
    }

    pub fn reset_parameter(&mut self, name: &str) {
        self.state.reset_parameter(name);
    }

    pub fn set_material(&mut self, material: &str) -> Result<(), JsValue> {
        let material: MaterialChoice = material.parse().map_err(to_js)?;
        self.state.set_material(material);
        Ok(())
    }

    pub fn set_render_quality(&mut self, quality: &str) -> Result<(), JsValue> {
        let quality: RenderQuality = quality.parse().map_err(to_js)?;
        self.state.set_render_quality(quality);
        Ok(())
    }

    /// Activates a simulation overlay with the given result magnitude.
    pub fn run_simulation(&mut self, kind: &str, magnitude: f64) -> Result<(), JsValue> {
        let kind: OverlayKind = kind.parse().map_err(to_js)?;
        self.state.run_simulation(kind, magnitude);
        Ok(())
    }

    pub fn clear_simulation(&mut self) {
        self.state.clear_simulation();
    }

    /// Design history as a JSON array of `{ sequence, action }`.
    pub fn history_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.state.history()).map_err(to_js)
    }

    /// Shaded assembly as JSON, for building a scene graph primitive by primitive.
    pub fn assembly_json(&self) -> Result<String, JsValue> {
        self.assembly_json_internal().map_err(to_js)
    }

    /// Shaded, triangulated mesh at the session's render quality.
    pub fn render(&self) -> Result<MeshHandle, JsValue> {
        self.render_internal().map_err(to_js)
    }
}

impl DesignSession {
    pub fn state(&self) -> &DesignState {
        &self.state
    }

    pub fn assembly_json_internal(&self) -> Result<String, WasmError> {
        let assembly = self.state.build()?;
        Ok(serde_json::to_string(&assembly)?)
    }

    pub fn render_internal(&self) -> Result<MeshHandle, WasmError> {
        let assembly = self.state.build()?;
        let mesh = assembly_to_mesh(&assembly, self.state.render_quality())?;
        Ok(MeshHandle::from_mesh(&mesh))
    }
}
