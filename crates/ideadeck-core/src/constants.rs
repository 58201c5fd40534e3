//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Default scoring-service base URL (overridable via `--api-url` or
/// `IDEADECK_API_URL`)
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Hard deadline for the one-shot idea listing request. Past this the
/// request is abandoned and the session runs on the bundled dataset.
pub const LIST_TIMEOUT_SECS: u64 = 5;

/// Deadline for a single favorite/hide toggle round-trip.
pub const TOGGLE_TIMEOUT_SECS: u64 = 10;

/// Number of idea cards shown when a filter combination is first opened.
pub const INITIAL_PAGE_SIZE: usize = 6;

/// How many more cards each "load more" reveals.
pub const PAGE_INCREMENT: usize = 6;

/// Score (0-10 scale) at or above which an idea counts as high-rated
/// in the dashboard metrics.
pub const HIGH_SCORE_THRESHOLD: f64 = 7.5;

// Scoring-service endpoints
pub mod paths {
    /// Idea listing
    pub const IDEAS_LIST: &str = "/api/v1/ideas/";
    /// Favorite toggle for one idea (append `{id}/favorite`)
    pub const IDEAS_BASE: &str = "/api/v1/ideas";
}

// Score tier cutoffs (0-10 scale)
pub mod tiers {
    pub const S_MIN: f64 = 8.5;
    pub const A_MIN: f64 = 7.5;
    pub const B_MIN: f64 = 6.5;
}
