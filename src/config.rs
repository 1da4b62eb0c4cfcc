//! Application-level configuration constants.

// Data location
pub const DATA_DIR: &str = "nba_data";

// Page
pub const PAGE_TITLE: &str = "NBA Player Shooting Percentage Animation";
pub const CHART_ELEMENT_ID: &str = "fg-chart";

// Default values for the selection widgets
pub const DEFAULT_YEAR: u16 = 1996;

// Speed slider
pub const SPEED_SLIDER_MAX_INDEX: usize = 4;

/// Delay before a recomputation runs, giving the status line a frame to paint.
pub const RECOMPUTE_DELAY_MS: u32 = 0;

// Logging
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};
