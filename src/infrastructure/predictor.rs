use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    PredictionResult, PredictorClient, PredictorError, StudentInput, TRANSPORT_FALLBACK_MESSAGE,
    UPSTREAM_FALLBACK_MESSAGE,
};

/// HTTP client for the external predictor service.
///
/// One POST per prediction, no retries. The service answers
/// `POST {base_url}/predict` with a prediction document, and signals
/// rejections with a non-success status and a JSON body carrying an
/// `error` field.
#[derive(Debug, Clone)]
pub struct HttpPredictorClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPredictorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait]
impl PredictorClient for HttpPredictorClient {
    async fn predict(&self, student: &StudentInput) -> Result<PredictionResult, PredictorError> {
        let response = self
            .client
            .post(self.predict_url())
            .json(student)
            .send()
            .await
            .map_err(|e| PredictorError::transport(transport_message(e)))?;

        if !response.status().is_success() {
            // A non-JSON error body or one without an `error` field falls
            // back to the generic message rather than failing differently.
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string());
            return Err(PredictorError::upstream(message));
        }

        response.json::<PredictionResult>().await.map_err(|e| {
            PredictorError::transport(format!("Failed to parse prediction response: {}", e))
        })
    }
}

fn transport_message(err: reqwest::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        TRANSPORT_FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}

// Predictor wire types

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpPredictorClient::new("http://localhost:5000/");
        assert_eq!(client.predict_url(), "http://localhost:5000/predict");
    }

    #[tokio::test]
    async fn test_posts_record_with_dataset_casing_and_parses_prediction() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_partial_json(json!({
                "age": 16,
                "Medu": 2,
                "Pstatus": "T",
                "Mjob": "other",
                "romantic": "no"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prediction": "B",
                "probabilities": { "A": 0.1, "B": 0.6, "C": 0.2, "F": 0.1 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpPredictorClient::new(server.uri());
        let result = client.predict(&StudentInput::default()).await.unwrap();

        assert_eq!(result.prediction.as_str(), "B");
        assert_eq!(result.probabilities.b, 0.6);
    }

    #[tokio::test]
    async fn test_relays_upstream_error_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "Missing features" })),
            )
            .mount(&server)
            .await;

        let client = HttpPredictorClient::new(server.uri());
        let err = client.predict(&StudentInput::default()).await.unwrap_err();

        assert!(matches!(err, PredictorError::Upstream { .. }));
        assert_eq!(err.message(), "Missing features");
    }

    #[tokio::test]
    async fn test_error_status_without_error_field_uses_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = HttpPredictorClient::new(server.uri());
        let err = client.predict(&StudentInput::default()).await.unwrap_err();

        assert_eq!(err.message(), UPSTREAM_FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        let client = HttpPredictorClient::new("http://127.0.0.1:9");
        let err = client.predict(&StudentInput::default()).await.unwrap_err();

        assert!(matches!(err, PredictorError::Transport { .. }));
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_predictions_are_independent() {
        let server = MockServer::start().await;
        let client = HttpPredictorClient::new(server.uri());

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prediction": "A",
                "probabilities": { "A": 0.9, "B": 0.05, "C": 0.03, "F": 0.02 }
            })))
            .mount(&server)
            .await;

        let first = client.predict(&StudentInput::default()).await.unwrap();
        assert_eq!(first.prediction.as_str(), "A");

        // Nothing from the first round trip carries over to the second.
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "model not loaded" })),
            )
            .mount(&server)
            .await;

        let second = client.predict(&StudentInput::default()).await.unwrap_err();
        assert_eq!(second.message(), "model not loaded");
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_a_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpPredictorClient::new(server.uri());
        let err = client.predict(&StudentInput::default()).await.unwrap_err();

        assert!(matches!(err, PredictorError::Transport { .. }));
        assert!(err.message().contains("Failed to parse prediction response"));
    }
}
