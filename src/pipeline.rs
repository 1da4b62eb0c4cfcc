//! One chart invocation: selection request + season table in, chart or
//! tagged error out. Nothing here is cached; every call starts fresh.

use crate::figure::{format_pct, ChartSpec};
use crate::selection::SelectionRequest;
use crate::{
    build_animation_frames, compute_running_series, filter_shots, AnimationFrame, RunningPoint,
    SeasonTable, ShotChartError,
};
use log::{info, warn};

/// Largest selection that will be animated. Frames are prefixes of the
/// series, so the serialized chart grows with the square of this.
pub const MAX_ANIMATED_SHOTS: usize = 5_000;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingChart {
    request: SelectionRequest,
    series: Vec<RunningPoint>,
}

impl ShootingChart {
    pub fn request(&self) -> &SelectionRequest {
        &self.request
    }

    pub fn series(&self) -> &[RunningPoint] {
        &self.series
    }

    pub fn attempts(&self) -> usize {
        self.series.len()
    }

    pub fn made(&self) -> usize {
        self.series.last().map_or(0, |p| p.shots_made)
    }

    pub fn final_fg_pct(&self) -> f64 {
        self.series.last().map_or(0.0, |p| p.fg_pct)
    }

    pub fn summary(&self) -> String {
        format!(
            "{}/{} made, final FG% {}",
            self.made(),
            self.attempts(),
            format_pct(self.final_fg_pct(), 1)
        )
    }

    pub fn frames(&self) -> Vec<AnimationFrame<'_>> {
        build_animation_frames(&self.series)
    }

    pub fn chart_spec(&self) -> Result<ChartSpec, ShotChartError> {
        ChartSpec::build(&self.request, &self.series)
            .ok_or_else(|| ShotChartError::unexpected("cannot chart an empty series"))
    }
}

/// Filter, accumulate and bound-check the selection against `table`.
pub fn run(request: &SelectionRequest, table: &SeasonTable) -> Result<ShootingChart, ShotChartError> {
    if table.year() != request.year {
        return Err(ShotChartError::unexpected(format!(
            "loaded season {} does not match selected season {}",
            table.year(),
            request.year
        )));
    }

    let shots = filter_shots(table.shots(), &request.player, request.shot_type);
    if shots.is_empty() {
        return Err(ShotChartError::EmptySelection {
            player: request.player.clone(),
            shot_type: request.shot_type.to_string(),
        });
    }
    if shots.len() > MAX_ANIMATED_SHOTS {
        warn!(
            "{} has {} shots in {}, above the animation limit",
            request.player,
            shots.len(),
            request.year
        );
        return Err(ShotChartError::TooManyShots {
            count: shots.len(),
            limit: MAX_ANIMATED_SHOTS,
        });
    }

    let chart = ShootingChart {
        request: request.clone(),
        series: compute_running_series(shots),
    };
    info!(
        "{} ({}, {}): {}",
        request.player,
        request.shot_type,
        request.year,
        chart.summary()
    );
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{
        AnimationSpeed, ShotTypeFilter, THREE_POINT_CATEGORY, TWO_POINT_CATEGORY,
    };
    use crate::{ErrorKind, ShotRecord};

    fn table() -> SeasonTable {
        SeasonTable::new(
            2012,
            vec![
                ShotRecord::new("Kevin Durant", true, TWO_POINT_CATEGORY),
                ShotRecord::new("Kevin Durant", false, THREE_POINT_CATEGORY),
                ShotRecord::new("Russell Westbrook", false, TWO_POINT_CATEGORY),
                ShotRecord::new("Kevin Durant", true, TWO_POINT_CATEGORY),
                ShotRecord::new("Kevin Durant", true, THREE_POINT_CATEGORY),
            ],
        )
    }

    fn request(player: &str, shot_type: ShotTypeFilter) -> SelectionRequest {
        SelectionRequest::new(2012, player, shot_type, AnimationSpeed::Medium).unwrap()
    }

    #[test]
    fn test_run_all_shots() {
        let chart = run(&request("Kevin Durant", ShotTypeFilter::All), &table()).unwrap();
        assert_eq!(chart.attempts(), 4);
        assert_eq!(chart.made(), 3);
        assert_eq!(chart.final_fg_pct(), 0.75);
        assert_eq!(chart.frames().len(), 4);
        assert_eq!(chart.summary(), "3/4 made, final FG% 75.0%");
    }

    #[test]
    fn test_run_three_pointers() {
        let chart = run(
            &request("Kevin Durant", ShotTypeFilter::ThreePointers),
            &table(),
        )
        .unwrap();
        let made: Vec<usize> = chart.series().iter().map(|p| p.shots_made).collect();
        assert_eq!(made, vec![0, 1]);
        assert_eq!(chart.chart_spec().unwrap().x_axis.range, [1.0, 2.0]);
    }

    #[test]
    fn test_run_empty_selection() {
        let err = run(
            &request("Russell Westbrook", ShotTypeFilter::ThreePointers),
            &table(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySelection);
        assert_eq!(
            err.user_message(),
            "No data found for Russell Westbrook with 3 pointers."
        );

        let err = run(&request("Nobody", ShotTypeFilter::All), &table()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySelection);
    }

    #[test]
    fn test_run_rejects_mismatched_season() {
        let other = SeasonTable::new(2013, table().shots().to_vec());
        let err = run(&request("Kevin Durant", ShotTypeFilter::All), &other).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_run_enforces_shot_limit() {
        let shots = vec![ShotRecord::new("Volume", false, TWO_POINT_CATEGORY); MAX_ANIMATED_SHOTS + 1];
        let big = SeasonTable::new(2012, shots);
        let err = run(&request("Volume", ShotTypeFilter::All), &big).unwrap_err();
        assert_eq!(
            err,
            ShotChartError::TooManyShots {
                count: MAX_ANIMATED_SHOTS + 1,
                limit: MAX_ANIMATED_SHOTS,
            }
        );

        let shots = vec![ShotRecord::new("Volume", true, TWO_POINT_CATEGORY); MAX_ANIMATED_SHOTS];
        let at_limit = SeasonTable::new(2012, shots);
        let chart = run(&request("Volume", ShotTypeFilter::All), &at_limit).unwrap();
        assert_eq!(chart.attempts(), MAX_ANIMATED_SHOTS);
        assert_eq!(chart.final_fg_pct(), 1.0);
    }
}
