//! Typed versions of the values a user can pick, and the immutable request
//! that bundles them for one pipeline run.

use crate::error::ShotChartError;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Seasons for which shot logs are published.
pub const SEASON_YEARS: RangeInclusive<u16> = 1996..=2024;

/// Category values of the `SHOT_TYPE` column.
pub const TWO_POINT_CATEGORY: &str = "2PT Field Goal";
pub const THREE_POINT_CATEGORY: &str = "3PT Field Goal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShotTypeFilter {
    #[default]
    All,
    TwoPointers,
    ThreePointers,
}

impl ShotTypeFilter {
    pub const ALL: [ShotTypeFilter; 3] = [
        ShotTypeFilter::All,
        ShotTypeFilter::TwoPointers,
        ShotTypeFilter::ThreePointers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShotTypeFilter::All => "all",
            ShotTypeFilter::TwoPointers => "2 pointers",
            ShotTypeFilter::ThreePointers => "3 pointers",
        }
    }

    /// The `SHOT_TYPE` category this filter keeps, or `None` for everything.
    pub fn category(self) -> Option<&'static str> {
        match self {
            ShotTypeFilter::All => None,
            ShotTypeFilter::TwoPointers => Some(TWO_POINT_CATEGORY),
            ShotTypeFilter::ThreePointers => Some(THREE_POINT_CATEGORY),
        }
    }

    pub fn accepts(self, category: &str) -> bool {
        self.category().map_or(true, |c| c == category)
    }
}

impl fmt::Display for ShotTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShotTypeFilter {
    type Err = ShotChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShotTypeFilter::ALL
            .into_iter()
            .find(|filter| filter.label() == s)
            .ok_or_else(|| ShotChartError::invalid("shot type", s))
    }
}

/// Per-frame display duration of the chart animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationSpeed {
    #[default]
    VerySlow,
    Slow,
    Medium,
    Fast,
    VeryFast,
}

impl AnimationSpeed {
    /// Slowest first, matching the slider's left-to-right order.
    pub const ALL: [AnimationSpeed; 5] = [
        AnimationSpeed::VerySlow,
        AnimationSpeed::Slow,
        AnimationSpeed::Medium,
        AnimationSpeed::Fast,
        AnimationSpeed::VeryFast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::VerySlow => "very slow",
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
            AnimationSpeed::VeryFast => "very fast",
        }
    }

    pub fn frame_duration_ms(self) -> f64 {
        match self {
            AnimationSpeed::VerySlow => 50.0,
            AnimationSpeed::Slow => 25.0,
            AnimationSpeed::Medium => 10.0,
            AnimationSpeed::Fast => 2.5,
            AnimationSpeed::VeryFast => 0.5,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        AnimationSpeed::ALL.get(idx).copied()
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnimationSpeed {
    type Err = ShotChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationSpeed::ALL
            .into_iter()
            .find(|speed| speed.label() == s)
            .ok_or_else(|| ShotChartError::invalid("animation speed", s))
    }
}

/// Everything one chart invocation depends on.
///
/// Built by the UI from the current widget values and passed by reference
/// into [`crate::pipeline::run`]; it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionRequest {
    pub year: u16,
    pub player: String,
    pub shot_type: ShotTypeFilter,
    pub speed: AnimationSpeed,
}

impl SelectionRequest {
    pub fn new(
        year: u16,
        player: impl Into<String>,
        shot_type: ShotTypeFilter,
        speed: AnimationSpeed,
    ) -> Result<Self, ShotChartError> {
        if !SEASON_YEARS.contains(&year) {
            return Err(ShotChartError::invalid("season", year.to_string()));
        }
        Ok(Self {
            year,
            player: player.into(),
            shot_type,
            speed,
        })
    }

    /// Build a request from raw widget text, validating every field.
    pub fn parse(
        year: u16,
        player: &str,
        shot_type: &str,
        speed: &str,
    ) -> Result<Self, ShotChartError> {
        Self::new(year, player, shot_type.parse()?, speed.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_shot_type_labels_round_trip() {
        for filter in ShotTypeFilter::ALL {
            assert_eq!(filter.label().parse::<ShotTypeFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_unknown_shot_type_is_invalid_argument() {
        let err = "4 pointers".parse::<ShotTypeFilter>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // Labels are matched exactly, not case-folded
        assert!("All".parse::<ShotTypeFilter>().is_err());
    }

    #[test]
    fn test_filter_categories() {
        assert!(ShotTypeFilter::All.accepts(TWO_POINT_CATEGORY));
        assert!(ShotTypeFilter::All.accepts("Free Throw"));
        assert!(ShotTypeFilter::TwoPointers.accepts(TWO_POINT_CATEGORY));
        assert!(!ShotTypeFilter::TwoPointers.accepts(THREE_POINT_CATEGORY));
        assert!(ShotTypeFilter::ThreePointers.accepts(THREE_POINT_CATEGORY));
    }

    #[test]
    fn test_speed_durations() {
        let durations: Vec<f64> = AnimationSpeed::ALL
            .iter()
            .map(|s| s.frame_duration_ms())
            .collect();
        assert_eq!(durations, vec![50.0, 25.0, 10.0, 2.5, 0.5]);
        assert_eq!("medium".parse::<AnimationSpeed>(), Ok(AnimationSpeed::Medium));
        assert!("ludicrous".parse::<AnimationSpeed>().is_err());
    }

    #[test]
    fn test_speed_slider_index() {
        for (i, speed) in AnimationSpeed::ALL.into_iter().enumerate() {
            assert_eq!(speed.index(), i);
            assert_eq!(AnimationSpeed::from_index(i), Some(speed));
        }
        assert_eq!(AnimationSpeed::from_index(5), None);
    }

    #[test]
    fn test_request_year_range() {
        assert!(SelectionRequest::parse(1996, "A", "all", "slow").is_ok());
        assert!(SelectionRequest::parse(2024, "A", "all", "slow").is_ok());

        let err = SelectionRequest::parse(1995, "A", "all", "slow").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(SelectionRequest::parse(2025, "A", "all", "slow").is_err());
    }

    #[test]
    fn test_request_rejects_bad_shot_type() {
        let err = SelectionRequest::parse(2010, "A", "4 pointers", "slow").unwrap_err();
        assert_eq!(err, ShotChartError::invalid("shot type", "4 pointers"));
    }
}
