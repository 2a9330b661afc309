use async_trait::async_trait;
use std::fmt::Debug;

use super::{PredictionResult, PredictorError, StudentInput};

/// Trait for prediction backends (for mocking the HTTP call in tests)
#[async_trait]
pub trait PredictorClient: Send + Sync + Debug {
    /// Submit one student record and obtain a grade prediction
    async fn predict(&self, student: &StudentInput) -> Result<PredictionResult, PredictorError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    #[derive(Debug, Default)]
    pub struct MockPredictorClient {
        result: Option<PredictionResult>,
        upstream_error: Option<String>,
        transport_error: Option<String>,
    }

    impl MockPredictorClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_result(mut self, result: PredictionResult) -> Self {
            self.result = Some(result);
            self
        }

        pub fn with_upstream_error(mut self, message: impl Into<String>) -> Self {
            self.upstream_error = Some(message.into());
            self
        }

        pub fn with_transport_error(mut self, message: impl Into<String>) -> Self {
            self.transport_error = Some(message.into());
            self
        }
    }

    #[async_trait]
    impl PredictorClient for MockPredictorClient {
        async fn predict(
            &self,
            _student: &StudentInput,
        ) -> Result<PredictionResult, PredictorError> {
            if let Some(ref message) = self.upstream_error {
                return Err(PredictorError::upstream(message));
            }

            if let Some(ref message) = self.transport_error {
                return Err(PredictorError::transport(message));
            }

            self.result
                .clone()
                .ok_or_else(|| PredictorError::transport("No mock result configured"))
        }
    }
}
