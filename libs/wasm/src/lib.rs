//! WASM-facing entry points for the part generation pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust error types instead of `JsValue`.
//!
//! ```
//! let json = partgen_wasm::generate_assembly_internal("spur-gear", r#"{"teeth": [12]}"#).unwrap();
//! assert!(json.contains("tooth-11"));
//! ```

mod mesh_handle;
mod session;

pub use mesh_handle::MeshHandle;
pub use session::DesignSession;

use partgen::{
    apply_material, apply_overlay, generate, GenerateError, MaterialChoice, ModelType,
    OverlayKind, ParameterSet, RenderQuality, SimulationOverlay,
};
use partgen_mesh::{assembly_to_mesh, MeshError};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced by the WASM entry points.
#[derive(Debug, Error)]
pub enum WasmError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "partgen-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` records to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::info!("partgen logging initialised");
    }
}

/// Parses a parameter object; slider arrays (`{"teeth": [20]}`) are accepted
/// and an empty string means "all defaults".
fn parse_parameters(parameters_json: &str) -> Result<ParameterSet, WasmError> {
    if parameters_json.trim().is_empty() {
        return Ok(ParameterSet::new());
    }
    Ok(serde_json::from_str(parameters_json)?)
}

/// Generates an assembly and returns it as JSON.
///
/// # Errors
/// Returns a JavaScript error value with a human-readable message for an
/// unknown model type, malformed JSON or an invalid parameter.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const assembly = JSON.parse(generate_assembly("heat-sink", '{"finCount": [8]}'));
/// ```
#[wasm_bindgen]
pub fn generate_assembly(model_type: &str, parameters_json: &str) -> Result<String, JsValue> {
    generate_assembly_internal(model_type, parameters_json).map_err(to_js)
}

/// Host-side version of [`generate_assembly`].
pub fn generate_assembly_internal(
    model_type: &str,
    parameters_json: &str,
) -> Result<String, WasmError> {
    let model: ModelType = model_type.parse()?;
    let params = parse_parameters(parameters_json)?;
    let assembly = generate(model, &params)?;
    Ok(serde_json::to_string(&assembly)?)
}

/// Generates, shades and triangulates a part.
///
/// `overlay` is one of `stress`, `flow`, `thermal`, or absent for none;
/// `magnitude` defaults to 0.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = render("spur-gear", '{"teeth": [24]}', "brass", "stress", 64.0, "high");
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn render(
    model_type: &str,
    parameters_json: &str,
    material: &str,
    overlay: Option<String>,
    magnitude: Option<f64>,
    quality: &str,
) -> Result<MeshHandle, JsValue> {
    render_internal(
        model_type,
        parameters_json,
        material,
        overlay.as_deref(),
        magnitude,
        quality,
    )
    .map_err(to_js)
}

/// Host-side version of [`render`].
pub fn render_internal(
    model_type: &str,
    parameters_json: &str,
    material: &str,
    overlay: Option<&str>,
    magnitude: Option<f64>,
    quality: &str,
) -> Result<MeshHandle, WasmError> {
    let model: ModelType = model_type.parse()?;
    let material: MaterialChoice = material.parse()?;
    let quality: RenderQuality = quality.parse()?;
    let overlay = overlay
        .map(|kind| kind.parse::<OverlayKind>())
        .transpose()?
        .map(|kind| SimulationOverlay::new(kind, magnitude.unwrap_or(0.0)));
    let params = parse_parameters(parameters_json)?;

    let mut assembly = generate(model, &params)?;
    apply_material(&mut assembly, material);
    if let Some(overlay) = &overlay {
        apply_overlay(&mut assembly, overlay);
    }
    let mesh = assembly_to_mesh(&assembly, quality)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Parameter table of a model type as JSON (name, label, kind, default,
/// slider range).
#[wasm_bindgen]
pub fn parameter_specs(model_type: &str) -> Result<String, JsValue> {
    parameter_specs_internal(model_type).map_err(to_js)
}

/// Host-side version of [`parameter_specs`].
pub fn parameter_specs_internal(model_type: &str) -> Result<String, WasmError> {
    let model: ModelType = model_type.parse()?;
    Ok(serde_json::to_string(partgen::parameter_specs(model))?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialInfo {
    id: MaterialChoice,
    name: &'static str,
    color: String,
    density: f64,
    yield_strength: f64,
}

/// Material table as JSON: id, display name, color, density (g/cm³) and
/// yield strength (MPa).
#[wasm_bindgen]
pub fn materials() -> Result<String, JsValue> {
    materials_internal().map_err(to_js)
}

/// Host-side version of [`materials`].
pub fn materials_internal() -> Result<String, WasmError> {
    let table: Vec<MaterialInfo> = MaterialChoice::ALL
        .into_iter()
        .map(|material| MaterialInfo {
            id: material,
            name: material.display_name(),
            color: material.finish().color.to_string(),
            density: material.density(),
            yield_strength: material.yield_strength(),
        })
        .collect();
    Ok(serde_json::to_string(&table)?)
}
