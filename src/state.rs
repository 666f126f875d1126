use std::sync::Arc;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared state handed to every request handler.
///
/// The dataset is loaded once at startup and never mutated afterwards, so
/// handlers share it read-only behind `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
