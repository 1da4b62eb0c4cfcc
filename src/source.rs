//! Browser side of the season data source: fetches
//! `nba_data/shotdetail_{year}.csv` relative to the page.

use crate::config::DATA_DIR;
use crate::utils::js_failure;
use log::{debug, info};
use shot_chart::{SeasonTable, ShotChartError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

pub fn season_url(year: u16) -> String {
    format!("{}/{}", DATA_DIR, SeasonTable::file_name(year))
}

/// Download and parse one season's shot log.
///
/// A 404, or an HTML page served in place of the CSV by a dev server's
/// fallback route, means the season is not available.
pub async fn fetch_season(year: u16) -> Result<SeasonTable, ShotChartError> {
    let url = season_url(year);
    debug!("Fetching {}", url);

    let response = JsFuture::from(gloo_utils::window().fetch_with_str(&url))
        .await
        .map_err(js_failure)?;
    let response: Response = response.dyn_into().map_err(js_failure)?;

    if response.status() == 404 {
        return Err(ShotChartError::DataUnavailable { year });
    }
    if !response.ok() {
        return Err(ShotChartError::unexpected(format!(
            "fetching {} returned HTTP {}",
            url,
            response.status()
        )));
    }
    let content_type = response
        .headers()
        .get("content-type")
        .map_err(js_failure)?
        .unwrap_or_default();
    if content_type.starts_with("text/html") {
        return Err(ShotChartError::DataUnavailable { year });
    }

    let body = JsFuture::from(response.text().map_err(js_failure)?)
        .await
        .map_err(js_failure)?;
    let text = body
        .as_string()
        .ok_or_else(|| ShotChartError::unexpected(format!("{} did not return text", url)))?;
    info!("Downloaded {} ({} bytes)", url, text.len());

    SeasonTable::from_csv_str(year, &text)
}
