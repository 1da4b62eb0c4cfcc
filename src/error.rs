//! Error taxonomy shared by the library and the UI.
//!
//! Every failure of one chart invocation ends up as a [`ShotChartError`]; the
//! UI matches on [`ShotChartError::kind`] and shows
//! [`ShotChartError::user_message`] instead of string-matching error text.

use thiserror::Error;

/// Plain tag for each error variant, handy for tests and for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DataUnavailable,
    EmptySelection,
    InvalidArgument,
    TooManyShots,
    Unexpected,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShotChartError {
    /// The shot log for the requested season could not be located.
    #[error("shot data for the {year} season is not available")]
    DataUnavailable { year: u16 },

    /// The player/shot-type combination matched no rows.
    #[error("no shots for {player} with {shot_type}")]
    EmptySelection { player: String, shot_type: String },

    /// A selection value outside the allowed set.
    #[error("invalid {field}: '{value}'")]
    InvalidArgument { field: &'static str, value: String },

    #[error("{count} shots exceed the animation limit of {limit}")]
    TooManyShots { count: usize, limit: usize },

    #[error("{0}")]
    Unexpected(String),
}

impl ShotChartError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        ShotChartError::InvalidArgument {
            field,
            value: value.into(),
        }
    }

    pub fn unexpected(cause: impl std::fmt::Display) -> Self {
        ShotChartError::Unexpected(cause.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ShotChartError::DataUnavailable { .. } => ErrorKind::DataUnavailable,
            ShotChartError::EmptySelection { .. } => ErrorKind::EmptySelection,
            ShotChartError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ShotChartError::TooManyShots { .. } => ErrorKind::TooManyShots,
            ShotChartError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Text shown to the user in place of the chart.
    pub fn user_message(&self) -> String {
        match self {
            ShotChartError::DataUnavailable { year } => format!(
                "Data file not found. Please check the path to shotdetail_{}.csv.",
                year
            ),
            ShotChartError::EmptySelection { player, shot_type } => {
                format!("No data found for {} with {}.", player, shot_type)
            }
            ShotChartError::InvalidArgument { field, value } => {
                format!("Invalid {} selected: '{}'.", field, value)
            }
            ShotChartError::TooManyShots { count, limit } => format!(
                "This selection has {} shots; animations are limited to {} shots.",
                count, limit
            ),
            ShotChartError::Unexpected(cause) => format!("An error occurred: {}", cause),
        }
    }
}

impl From<csv::Error> for ShotChartError {
    fn from(err: csv::Error) -> Self {
        ShotChartError::unexpected(err)
    }
}
