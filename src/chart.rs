//! JavaScript interop for the Plotly chart.
//! Provides Rust bindings to chart helper functions defined in chart_helpers.js.

use crate::utils::js_failure;
use shot_chart::figure::ChartSpec;
use shot_chart::ShotChartError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = renderShootingChart, catch)]
    fn render_shooting_chart(element_id: &str, spec: JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_name = clearShootingChart, catch)]
    fn clear_shooting_chart(element_id: &str) -> Result<(), JsValue>;
}

/// Draw `spec` into the element with id `element_id`.
///
/// Resolves once the frames are attached; playback is started from the
/// chart's Play button. Both synchronous throws and a rejected Plotly
/// promise come back as `Unexpected`.
pub async fn render_chart(element_id: &str, spec: &ChartSpec) -> Result<(), ShotChartError> {
    let value = serde_wasm_bindgen::to_value(spec).map_err(ShotChartError::unexpected)?;
    let promise = render_shooting_chart(element_id, value).map_err(js_failure)?;
    JsFuture::from(promise).await.map_err(js_failure)?;
    Ok(())
}

/// Remove any chart left over from a previous selection.
pub fn clear_chart(element_id: &str) -> Result<(), ShotChartError> {
    clear_shooting_chart(element_id).map_err(js_failure)
}
