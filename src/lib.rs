//! Student Performance Gateway
//!
//! A small gateway in front of an external grade predictor:
//! - serves the student data entry form
//! - relays submitted records to the predictor service
//! - narrows predictor responses to the public API contract

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::predictor::HttpPredictorClient;

/// Build the shared application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let predictor = HttpPredictorClient::new(&config.predictor.base_url);
    AppState::new(Arc::new(predictor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_uses_configured_backend() {
        let config = AppConfig::default();
        let state = create_app_state(&config);

        // The default wiring points at the local predictor service.
        assert!(format!("{:?}", state.predictor).contains("127.0.0.1:5000"));
    }
}
