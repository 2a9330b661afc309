//! Application state for shared services

use std::sync::Arc;

use crate::domain::PredictorClient;

/// Application state shared across handlers, using dynamic dispatch so tests
/// can swap the real predictor client for a mock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub predictor: Arc<dyn PredictorClient>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn PredictorClient>) -> Self {
        Self { predictor }
    }
}
