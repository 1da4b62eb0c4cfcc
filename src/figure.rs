//! Renderer-agnostic description of the animated FG% line chart.
//!
//! The UI serializes a [`ChartSpec`] and hands it to `chart_helpers.js`,
//! which only maps fields onto the charting library; every number, label
//! and range is decided here.

use crate::selection::SelectionRequest;
use crate::{build_animation_frames, RunningPoint};
use serde::Serialize;

pub const X_AXIS_TITLE: &str = "Shot Number";
pub const Y_AXIS_TITLE: &str = "Field Goal Percentage";
/// d3-format string for whole-number percentage ticks.
pub const Y_TICK_FORMAT: &str = ".0%";
pub const SERIES_COLOR: &str = "blue";
pub const REFERENCE_COLOR: &str = "red";
pub const LINE_WIDTH: f64 = 2.0;

/// Format a ratio as a percentage, e.g. `0.4567` with one decimal → `45.7%`.
pub fn format_pct(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: &'static str,
    pub range: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<&'static str>,
}

/// Parallel x/y arrays, the shape line-chart libraries consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<usize>,
    pub y: Vec<f64>,
}

impl Trace {
    fn from_points(points: &[RunningPoint]) -> Self {
        Self {
            x: points.iter().map(|p| p.shot_number).collect(),
            y: points.iter().map(|p| p.fg_pct).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSpec {
    /// 1-based frame index, rendered as text for the slider label.
    pub name: String,
    pub trace: Trace,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: String,
    pub color: &'static str,
    pub width: f64,
    pub dash: &'static str,
    pub label_position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub line: LineStyle,
    pub show_legend: bool,
    /// The complete series, drawn before playback starts.
    pub trace: Trace,
    pub frames: Vec<FrameSpec>,
    pub reference_line: ReferenceLine,
    pub frame_duration_ms: f64,
    pub transition_duration_ms: f64,
}

impl ChartSpec {
    /// Build the chart for a non-empty series.
    ///
    /// Returns `None` for an empty series; there is no meaningful x range
    /// or final percentage to draw.
    pub fn build(request: &SelectionRequest, series: &[RunningPoint]) -> Option<Self> {
        let last = series.last()?;
        let final_pct = last.fg_pct;

        let frames = build_animation_frames(series)
            .into_iter()
            .map(|frame| FrameSpec {
                name: frame.index.to_string(),
                trace: Trace::from_points(frame.points),
            })
            .collect();

        Some(Self {
            title: format!(
                "{}'s Field Goal Percentage ({}) - {} Season",
                request.player, request.shot_type, request.year
            ),
            x_axis: Axis {
                title: X_AXIS_TITLE,
                range: [1.0, last.shot_number as f64],
                tick_format: None,
            },
            y_axis: Axis {
                title: Y_AXIS_TITLE,
                range: [0.0, 1.0],
                tick_format: Some(Y_TICK_FORMAT),
            },
            line: LineStyle {
                color: SERIES_COLOR,
                width: LINE_WIDTH,
            },
            show_legend: false,
            trace: Trace::from_points(series),
            frames,
            reference_line: ReferenceLine {
                y: final_pct,
                label: format!("Final FG%: {}", format_pct(final_pct, 1)),
                color: REFERENCE_COLOR,
                width: LINE_WIDTH,
                dash: "dash",
                label_position: "top right",
            },
            frame_duration_ms: request.speed.frame_duration_ms(),
            transition_duration_ms: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{AnimationSpeed, ShotTypeFilter, TWO_POINT_CATEGORY};
    use crate::{compute_running_series, ShotRecord};

    fn request() -> SelectionRequest {
        SelectionRequest::new(
            2016,
            "Stephen Curry",
            ShotTypeFilter::ThreePointers,
            AnimationSpeed::Fast,
        )
        .unwrap()
    }

    fn series(flags: &[bool]) -> Vec<RunningPoint> {
        let shots: Vec<ShotRecord> = flags
            .iter()
            .map(|&made| ShotRecord::new("Stephen Curry", made, TWO_POINT_CATEGORY))
            .collect();
        compute_running_series(&shots)
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(0.75, 1), "75.0%");
        assert_eq!(format_pct(2.0 / 3.0, 1), "66.7%");
        assert_eq!(format_pct(0.4567, 0), "46%");
        assert_eq!(format_pct(1.0, 1), "100.0%");
    }

    #[test]
    fn test_empty_series_has_no_chart() {
        assert!(ChartSpec::build(&request(), &[]).is_none());
    }

    #[test]
    fn test_chart_layout() {
        let series = series(&[true, false, true, true]);
        let spec = ChartSpec::build(&request(), &series).unwrap();

        assert_eq!(
            spec.title,
            "Stephen Curry's Field Goal Percentage (3 pointers) - 2016 Season"
        );
        assert_eq!(spec.x_axis.range, [1.0, 4.0]);
        assert_eq!(spec.y_axis.range, [0.0, 1.0]);
        assert_eq!(spec.y_axis.tick_format, Some(".0%"));
        assert_eq!(spec.frame_duration_ms, 2.5);
        assert_eq!(spec.transition_duration_ms, 0.0);
        assert_eq!(spec.reference_line.y, 0.75);
        assert_eq!(spec.reference_line.label, "Final FG%: 75.0%");
    }

    #[test]
    fn test_chart_frames() {
        let series = series(&[false, true, true]);
        let spec = ChartSpec::build(&request(), &series).unwrap();

        assert_eq!(spec.frames.len(), 3);
        let names: Vec<&str> = spec.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "3"]);
        assert_eq!(spec.frames[1].trace.x, vec![1, 2]);
        assert_eq!(spec.frames[1].trace.y, vec![0.0, 0.5]);
        assert_eq!(spec.frames[2].trace, spec.trace);
    }

    #[test]
    fn test_single_shot_chart() {
        let series = series(&[false]);
        let spec = ChartSpec::build(&request(), &series).unwrap();
        assert_eq!(spec.x_axis.range, [1.0, 1.0]);
        assert_eq!(spec.reference_line.label, "Final FG%: 0.0%");
    }

    #[test]
    fn test_serialized_shape() {
        let series = series(&[true, false]);
        let spec = ChartSpec::build(&request(), &series).unwrap();
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["x_axis"]["title"], "Shot Number");
        assert!(json["x_axis"].get("tick_format").is_none());
        assert_eq!(json["y_axis"]["tick_format"], ".0%");
        assert_eq!(json["frames"][1]["trace"]["y"][1], 0.5);
        assert_eq!(json["reference_line"]["dash"], "dash");
        assert_eq!(json["show_legend"], false);
    }
}
