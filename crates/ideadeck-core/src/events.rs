use anyhow::Result;

use crate::models::{CurationFlags, Idea};

/// Completion of a spawned remote operation, delivered to the UI loop.
#[derive(Debug)]
pub enum ApiEvent {
    /// The one-shot idea listing finished (success, failure, or timeout -
    /// the loader policy decides what becomes of it).
    Listing(Result<Vec<Idea>>),
    /// A favorite/hide toggle round-trip finished. `seq` ties the response
    /// back to the request so superseded responses can be discarded.
    ToggleResolved {
        id: String,
        seq: u64,
        result: Result<CurationFlags>,
    },
}
