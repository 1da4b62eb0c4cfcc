use crate::config::SPEED_SLIDER_MAX_INDEX;
use shot_chart::selection::SEASON_YEARS;
use shot_chart::{AnimationSpeed, ShotChartError, ShotTypeFilter};
use wasm_bindgen::{JsCast, JsValue};

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &'static str,
) -> Result<T, ShotChartError>
where
    T: std::str::FromStr + PartialOrd,
{
    let trimmed = input.trim();
    let val = trimmed
        .parse::<T>()
        .map_err(|_| ShotChartError::invalid(field_name, trimmed))?;

    if min.is_some_and(|min_val| val < min_val) || max.is_some_and(|max_val| val > max_val) {
        return Err(ShotChartError::invalid(field_name, trimmed));
    }
    Ok(val)
}

/// Parse the season selector's value.
pub fn parse_year(input: &str) -> Result<u16, ShotChartError> {
    validate_numeric_input(
        input,
        Some(*SEASON_YEARS.start()),
        Some(*SEASON_YEARS.end()),
        "season",
    )
}

/// Map the speed slider's position onto an animation speed.
pub fn parse_speed_index(input: &str) -> Result<AnimationSpeed, ShotChartError> {
    let idx = validate_numeric_input(input, Some(0), Some(SPEED_SLIDER_MAX_INDEX), "animation speed")?;
    AnimationSpeed::from_index(idx).ok_or_else(|| ShotChartError::invalid("animation speed", input))
}

pub fn parse_shot_type(input: &str) -> Result<ShotTypeFilter, ShotChartError> {
    input.parse()
}

/// Best-effort text for a value thrown from JavaScript.
pub fn js_error_text(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

pub fn js_failure(err: JsValue) -> ShotChartError {
    ShotChartError::unexpected(js_error_text(&err))
}
