//! Crop prediction endpoint

use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

use crate::observation::Observation;
use crate::recommend::Recommendation;
use crate::state::SharedState;

/// POST /predict - run the recommendation pipeline on one observation.
///
/// Malformed or missing numeric fields are rejected by the `Json`
/// extractor before this handler runs; errors surfacing here are
/// inference contract violations and map to a 500.
pub async fn predict(
    State(state): State<SharedState>,
    Json(observation): Json<Observation>,
) -> Result<Json<Recommendation>, (StatusCode, String)> {
    let recommendation = state
        .recommender
        .recommend(&observation)
        .await
        .map_err(|e| {
            error!("recommendation failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Recommendation failed".to_string(),
            )
        })?;

    Ok(Json(recommendation))
}
