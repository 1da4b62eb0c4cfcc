//! Pure Yew view components for the shot chart UI.
//!
//! Components only render props and forward raw widget values; parsing and
//! validation happen in the main component.

use crate::config::SPEED_SLIDER_MAX_INDEX;
use shot_chart::figure::format_pct;
use shot_chart::pipeline::ShootingChart;
use shot_chart::selection::SEASON_YEARS;
use shot_chart::{AnimationSpeed, ErrorKind, ShotChartError, ShotTypeFilter};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Forward the value of a `<select>` on change.
fn select_value(callback: &Callback<String>) -> Callback<Event> {
    callback.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    })
}

#[derive(Properties, PartialEq)]
pub struct YearSelectProps {
    pub year: u16,
    pub onchange: Callback<String>,
}

#[function_component(YearSelect)]
pub fn year_select(props: &YearSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label for="year">{ "Select Year" }</label>
            <select id="year" onchange={select_value(&props.onchange)}>
                { SEASON_YEARS.map(|y| html! {
                    <option value={y.to_string()} selected={y == props.year}>{ y }</option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlayerSelectProps {
    pub players: Rc<Vec<String>>,
    pub selected: Option<String>,
    pub onchange: Callback<String>,
}

#[function_component(PlayerSelect)]
pub fn player_select(props: &PlayerSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label for="player">{ "Select Player" }</label>
            <select id="player"
                disabled={props.players.is_empty()}
                onchange={select_value(&props.onchange)}
            >
                { props.players.iter().map(|name| {
                    let selected = props.selected.as_deref() == Some(name.as_str());
                    html! { <option value={name.clone()} selected={selected}>{ name }</option> }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShotTypeSelectProps {
    pub selected: ShotTypeFilter,
    pub onchange: Callback<String>,
}

#[function_component(ShotTypeSelect)]
pub fn shot_type_select(props: &ShotTypeSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label for="shot_type">{ "Select Shot Type" }</label>
            <select id="shot_type" onchange={select_value(&props.onchange)}>
                { ShotTypeFilter::ALL.iter().map(|filter| html! {
                    <option value={filter.label()} selected={*filter == props.selected}>
                        { filter.label() }
                    </option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Five-step slider for the animation speed.
#[derive(Properties, PartialEq)]
pub struct SpeedSliderProps {
    pub speed: AnimationSpeed,
    pub oninput: Callback<InputEvent>,
}

#[function_component(SpeedSlider)]
pub fn speed_slider(props: &SpeedSliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for="speed">{ "Speed of Animation" }</label>
            <div class="slider-with-value">
                <input type="range"
                    id="speed"
                    min="0"
                    max={SPEED_SLIDER_MAX_INDEX.to_string()}
                    step="1"
                    value={props.speed.index().to_string()}
                    oninput={props.oninput.clone()}
                />
                <span class="slider-value">{ props.speed.label() }</span>
            </div>
        </div>
    }
}

/// Made/attempted and final FG% next to the chart.
pub fn render_summary(chart: &ShootingChart) -> Html {
    let request = chart.request();
    html! {
        <div class="summary">
            <span class="summary-player">{ &request.player }</span>
            <span>{ format!("{} made of {} attempts", chart.made(), chart.attempts()) }</span>
            <span class="summary-pct">
                { format!("Final FG%: {}", format_pct(chart.final_fg_pct(), 1)) }
            </span>
        </div>
    }
}

/// Error banner shown in place of the chart.
pub fn render_error(err: &ShotChartError) -> Html {
    let class = match err.kind() {
        ErrorKind::EmptySelection | ErrorKind::TooManyShots => "current-warning",
        _ => "current-error",
    };
    html! {
        <div class={class}>{ err.user_message() }</div>
    }
}
