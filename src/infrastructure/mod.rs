//! Infrastructure layer - external service implementations

pub mod logging;
pub mod predictor;

pub use predictor::HttpPredictorClient;
