//! Main module for the shot chart application using Yew.
//! Wires UI components, the season loader, and the per-selection pipeline run.

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use shot_chart::figure::ChartSpec;
use shot_chart::pipeline::{self, ShootingChart};
use shot_chart::{AnimationSpeed, SeasonTable, SelectionRequest, ShotChartError, ShotTypeFilter};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod cache;
mod chart;
mod components;
mod config;
mod hooks;
mod source;
mod utils;

use chart::{clear_chart, render_chart};
use components::{
    render_error, render_summary, PlayerSelect, ShotTypeSelect, SpeedSlider, YearSelect,
};
use config::*;
use hooks::{use_season_table, SeasonState};
use utils::{parse_shot_type, parse_speed_index, parse_year};

type Outcome = Result<ShootingChart, ShotChartError>;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Filter, accumulate and lay out the chart for `request`.
fn compute(
    request: &SelectionRequest,
    table: &SeasonTable,
) -> Result<(ShootingChart, ChartSpec), ShotChartError> {
    let chart = pipeline::run(request, table)?;
    let spec = chart.chart_spec()?;
    Ok((chart, spec))
}

/// A chart only counts as shown once the renderer has accepted it.
fn settle(chart: ShootingChart, rendered: Result<(), ShotChartError>) -> Outcome {
    rendered.map(|()| chart)
}

/// Text of the status line; a failed season load leaves nothing in progress.
fn status_text(season: &SeasonState, is_computing: bool) -> Option<String> {
    match season {
        SeasonState::Loading(y) => Some(format!("Loading {} shot data…", y)),
        SeasonState::Failed(_) => None,
        SeasonState::Ready(_) if is_computing => Some("Computing shooting percentage…".to_string()),
        SeasonState::Ready(_) => None,
    }
}

fn clear_or_log() {
    if let Err(err) = clear_chart(CHART_ELEMENT_ID) {
        warn!("Could not clear the chart: {}", err);
    }
}

fn log_failure(request: &SelectionRequest, err: &ShotChartError) {
    if let ShotChartError::Unexpected(cause) = err {
        error!("Chart for {:?} failed: {}", request, cause);
    }
}

/// Schedule a fresh pipeline run, dropping any run that has not started yet.
fn schedule_recompute(
    timer_handle: &UseStateHandle<Option<Timeout>>,
    outcome: UseStateHandle<Option<Outcome>>,
    is_computing: UseStateHandle<bool>,
    request: SelectionRequest,
    table: Rc<SeasonTable>,
) {
    // Cancel any pending run by replacing it
    timer_handle.set(None);
    is_computing.set(true);

    let timer_handle_clone = timer_handle.clone();
    let handle = Timeout::new(RECOMPUTE_DELAY_MS, move || {
        timer_handle_clone.set(None);
        match compute(&request, &table) {
            Ok((chart, spec)) => {
                debug!("Rendering {} animation frames", spec.frames.len());
                wasm_bindgen_futures::spawn_local(async move {
                    let result = settle(chart, render_chart(CHART_ELEMENT_ID, &spec).await);
                    if let Err(err) = &result {
                        log_failure(&request, err);
                    }
                    outcome.set(Some(result));
                    is_computing.set(false);
                });
            }
            Err(err) => {
                clear_or_log();
                log_failure(&request, &err);
                outcome.set(Some(Err(err)));
                is_computing.set(false);
            }
        }
    });
    timer_handle.set(Some(handle));
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let year = use_state(|| DEFAULT_YEAR);
    let player = use_state(|| None::<String>);
    let shot_type = use_state(ShotTypeFilter::default);
    let speed = use_state(AnimationSpeed::default);

    let season = use_season_table(*year);
    let outcome = use_state(|| None::<Outcome>);
    let is_computing = use_state(|| false);
    let recompute_timer = use_state(|| None::<Timeout>);

    let players = use_memo(season.clone(), |season| {
        season
            .table()
            .map(|table| {
                table
                    .players()
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default()
    });

    // Keep the selected player if the new season has them, else pick the first
    {
        let player = player.clone();
        let players = players.clone();
        use_effect_with(players, move |players| {
            let current = (*player).clone();
            let keep = current
                .as_deref()
                .is_some_and(|name| players.iter().any(|p| p == name));
            if !keep {
                player.set(players.first().cloned());
            }
            || ()
        });
    }

    // Recompute on every selection or season change
    {
        let outcome = outcome.clone();
        let is_computing = is_computing.clone();
        let recompute_timer = recompute_timer.clone();
        use_effect_with(
            (season.clone(), (*player).clone(), *shot_type, *speed, *year),
            move |(season, player, shot_type, speed, year)| {
                match season {
                    SeasonState::Loading(_) => {
                        recompute_timer.set(None);
                        is_computing.set(false);
                        clear_or_log();
                        outcome.set(None);
                    }
                    SeasonState::Failed(err) => {
                        recompute_timer.set(None);
                        is_computing.set(false);
                        clear_or_log();
                        outcome.set(Some(Err(err.clone())));
                    }
                    SeasonState::Ready(table) if table.year() != *year => {
                        // Previous season still in the hook until the new one loads
                    }
                    SeasonState::Ready(table) => match player {
                        // The player effect above picks a valid name and triggers another run
                        Some(name) if table.has_player(name) => {
                            match SelectionRequest::new(*year, name.as_str(), *shot_type, *speed) {
                                Ok(request) => schedule_recompute(
                                    &recompute_timer,
                                    outcome,
                                    is_computing,
                                    request,
                                    table.clone(),
                                ),
                                Err(err) => outcome.set(Some(Err(err))),
                            }
                        }
                        _ => outcome.set(None),
                    },
                }
                || ()
            },
        );
    }

    // --- Selection handlers ---
    let on_year_change = {
        let year = year.clone();
        let outcome = outcome.clone();
        Callback::from(move |value: String| match parse_year(&value) {
            Ok(y) => year.set(y),
            Err(err) => outcome.set(Some(Err(err))),
        })
    };
    let on_player_change = {
        let player = player.clone();
        Callback::from(move |value: String| player.set(Some(value)))
    };
    let on_shot_type_change = {
        let shot_type = shot_type.clone();
        let outcome = outcome.clone();
        Callback::from(move |value: String| match parse_shot_type(&value) {
            Ok(filter) => shot_type.set(filter),
            Err(err) => outcome.set(Some(Err(err))),
        })
    };
    let on_speed_input = {
        let speed = speed.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_speed_index(&input.value()) {
                Ok(s) => speed.set(s),
                Err(err) => outcome.set(Some(Err(err))),
            }
        })
    };

    let status = status_text(&season, *is_computing);

    html! {
        <div class="container">
            <h1>{ PAGE_TITLE }</h1>

            <div class="controls">
                <YearSelect year={*year} onchange={on_year_change} />
                <PlayerSelect
                    players={players.clone()}
                    selected={(*player).clone()}
                    onchange={on_player_change}
                />
                <ShotTypeSelect selected={*shot_type} onchange={on_shot_type_change} />
                <SpeedSlider speed={*speed} oninput={on_speed_input} />
            </div>

            if let Some(text) = status {
                <div class="status">{ text }</div>
            }

            <div class="results-area">
                {
                    match &*outcome {
                        Some(Ok(chart)) => render_summary(chart),
                        Some(Err(err)) => render_error(err),
                        None => html! {},
                    }
                }
                <div id={CHART_ELEMENT_ID} class="chart"></div>
            </div>
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders the app.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(LOG_LEVEL);
    yew::Renderer::<Main>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use shot_chart::selection::TWO_POINT_CATEGORY;
    use shot_chart::{ErrorKind, ShotRecord};

    fn season() -> Rc<SeasonTable> {
        Rc::new(SeasonTable::new(
            2003,
            vec![
                ShotRecord::new("Yao Ming", true, TWO_POINT_CATEGORY),
                ShotRecord::new("Yao Ming", false, TWO_POINT_CATEGORY),
            ],
        ))
    }

    fn request() -> SelectionRequest {
        SelectionRequest::new(2003, "Yao Ming", ShotTypeFilter::All, AnimationSpeed::Slow).unwrap()
    }

    #[test]
    fn test_compute_builds_chart_and_spec() {
        let (chart, spec) = compute(&request(), &season()).unwrap();
        assert_eq!(chart.attempts(), 2);
        assert_eq!(spec.frames.len(), 2);
        assert_eq!(spec.reference_line.label, "Final FG%: 50.0%");
    }

    #[test]
    fn test_render_failure_becomes_unexpected() {
        let (chart, _) = compute(&request(), &season()).unwrap();
        let rendered = Err(ShotChartError::unexpected("the Plotly charting library did not load"));
        let err = settle(chart, rendered).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(
            err.user_message(),
            "An error occurred: the Plotly charting library did not load"
        );
    }

    #[test]
    fn test_render_success_keeps_chart() {
        let (chart, _) = compute(&request(), &season()).unwrap();
        let shown = settle(chart.clone(), Ok(())).unwrap();
        assert_eq!(shown, chart);
    }

    #[test]
    fn test_failed_season_shows_no_computing_status() {
        let failed = SeasonState::Failed(ShotChartError::DataUnavailable { year: 2003 });
        assert_eq!(status_text(&failed, true), None);
        assert_eq!(status_text(&failed, false), None);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(&SeasonState::Loading(2003), true).as_deref(),
            Some("Loading 2003 shot data…")
        );
        let ready = SeasonState::Ready(season());
        assert_eq!(
            status_text(&ready, true).as_deref(),
            Some("Computing shooting percentage…")
        );
        assert_eq!(status_text(&ready, false), None);
    }
}
