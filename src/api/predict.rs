//! Prediction endpoint handler

use axum::extract::State;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{PredictionResult, StudentInput};

/// POST /api/predict
///
/// Relays the submitted record to the external predictor and returns its
/// answer narrowed to the prediction and the per-grade probabilities. A
/// failing upstream surfaces as a 500 with the relayed or fallback message.
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(student): Json<StudentInput>,
) -> Result<Json<PredictionResult>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        school = ?student.school,
        age = student.age,
        "Processing prediction request"
    );

    let result = state.predictor.predict(&student).await.map_err(|err| {
        error!(request_id = %request_id, error = %err, "Prediction request failed");
        ApiError::from(err)
    })?;

    info!(
        request_id = %request_id,
        prediction = %result.prediction,
        "Prediction request completed"
    );

    Ok(Json(result))
}
