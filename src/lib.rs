use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod error;
pub mod figure;
pub mod pipeline;
pub mod selection;

pub use error::{ErrorKind, ShotChartError};
pub use selection::{AnimationSpeed, SelectionRequest, ShotTypeFilter};

/// Columns every season file has to provide; anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "PLAYER_NAME",
    "SHOT_ATTEMPTED_FLAG",
    "SHOT_MADE_FLAG",
    "SHOT_TYPE",
];

/// One shot attempt as it appears in a season's shot log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShotRecord {
    #[serde(rename = "PLAYER_NAME")]
    pub player: String,
    #[serde(rename = "SHOT_ATTEMPTED_FLAG")]
    pub attempted: u8,
    #[serde(rename = "SHOT_MADE_FLAG")]
    pub made: u8,
    #[serde(rename = "SHOT_TYPE")]
    pub shot_type: String,
}

impl ShotRecord {
    pub fn new(player: &str, made: bool, shot_type: &str) -> Self {
        Self {
            player: player.to_string(),
            attempted: 1,
            made: made as u8,
            shot_type: shot_type.to_string(),
        }
    }

    pub fn is_made(&self) -> bool {
        self.made == 1
    }
}

/// All shots of one season, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTable {
    year: u16,
    shots: Vec<ShotRecord>,
}

impl SeasonTable {
    pub fn new(year: u16, shots: Vec<ShotRecord>) -> Self {
        Self { year, shots }
    }

    /// File name of a season's shot log, e.g. `shotdetail_2024.csv`.
    pub fn file_name(year: u16) -> String {
        format!("shotdetail_{}.csv", year)
    }

    /// Parse a season's shot log from CSV text with a header row.
    ///
    /// Flags must be `0` or `1`; a bad value is reported with the line it
    /// was found on.
    pub fn from_csv_str(year: u16, csv_content: &str) -> Result<Self, ShotChartError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv_content.as_bytes());

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ShotChartError::unexpected(format!(
                    "{} is missing the {} column",
                    Self::file_name(year),
                    column
                )));
            }
        }

        let mut shots = Vec::new();
        for row in reader.records() {
            let row = row?;
            let shot: ShotRecord = row.deserialize(Some(&headers))?;
            if shot.attempted > 1 || shot.made > 1 {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                return Err(ShotChartError::unexpected(format!(
                    "line {} of {}: shot flags must be 0 or 1",
                    line,
                    Self::file_name(year)
                )));
            }
            shots.push(shot);
        }

        info!("Loaded {} shots for the {} season", shots.len(), year);
        Ok(Self { year, shots })
    }

    /// Read `{dir}/shotdetail_{year}.csv` from disk.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_dir(dir: impl AsRef<std::path::Path>, year: u16) -> Result<Self, ShotChartError> {
        let path = dir.as_ref().join(Self::file_name(year));
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_csv_str(year, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No shot log at {}", path.display());
                Err(ShotChartError::DataUnavailable { year })
            }
            Err(e) => Err(ShotChartError::unexpected(format!(
                "could not read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Distinct player names in order of first appearance.
    pub fn players(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.shots
            .iter()
            .map(|shot| shot.player.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn has_player(&self, player: &str) -> bool {
        self.shots.iter().any(|shot| shot.player == player)
    }
}

/// Keep one player's shots, optionally restricted to one shot type.
///
/// Row order is preserved. An unknown player simply yields no rows.
pub fn filter_shots<'a>(
    shots: &'a [ShotRecord],
    player: &str,
    shot_type: ShotTypeFilter,
) -> Vec<&'a ShotRecord> {
    let filtered: Vec<&ShotRecord> = shots
        .iter()
        .filter(|shot| shot.player == player && shot_type.accepts(&shot.shot_type))
        .collect();
    debug!(
        "{} of {} shots match {} / {}",
        filtered.len(),
        shots.len(),
        player,
        shot_type
    );
    filtered
}

/// One point of the running field-goal percentage line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunningPoint {
    /// 1-based position of the shot in the filtered sequence.
    pub shot_number: usize,
    pub shots_made: usize,
    pub fg_pct: f64,
}

/// Cumulative makes and FG% after every shot.
///
/// Produces exactly one point per shot, so an empty input gives an empty
/// series and no division ever happens with a zero denominator.
pub fn compute_running_series<'a, I>(shots: I) -> Vec<RunningPoint>
where
    I: IntoIterator<Item = &'a ShotRecord>,
{
    shots
        .into_iter()
        .enumerate()
        .scan(0usize, |made, (i, shot)| {
            if shot.is_made() {
                *made += 1;
            }
            let shot_number = i + 1;
            Some(RunningPoint {
                shot_number,
                shots_made: *made,
                fg_pct: *made as f64 / shot_number as f64,
            })
        })
        .collect()
}

/// FG% after the last shot, `None` for an empty series.
pub fn final_fg_pct(series: &[RunningPoint]) -> Option<f64> {
    series.last().map(|p| p.fg_pct)
}

/// A snapshot of the first `index` points of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationFrame<'a> {
    pub index: usize,
    pub points: &'a [RunningPoint],
}

/// One frame per prefix length: frame `i` holds the first `i` points.
pub fn build_animation_frames(series: &[RunningPoint]) -> Vec<AnimationFrame<'_>> {
    (1..=series.len())
        .map(|index| AnimationFrame {
            index,
            points: &series[..index],
        })
        .collect()
}
