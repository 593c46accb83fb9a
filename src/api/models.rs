//! Model endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ModelsResponse};
use crate::domain::ModelRecord;

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Result<Json<ModelsResponse>, ApiError> {
    debug!("Listing all models");

    let models = state
        .model_service
        .list()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ModelsResponse::new(models)))
}

/// GET /api/models/{model_directory}
pub async fn get_model(
    State(state): State<AppState>,
    Path(model_directory): Path<String>,
) -> Result<Json<ModelRecord>, ApiError> {
    debug!(model_directory = %model_directory, "Getting model");

    let model = state
        .model_service
        .get_required(&model_directory)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(model))
}

/// GET /api/models/{model_directory}/predictions/{filename}
pub async fn get_predictions(
    State(state): State<AppState>,
    Path((model_directory, filename)): Path<(String, String)>,
) -> Result<String, ApiError> {
    debug!(model_directory = %model_directory, filename = %filename, "Getting predictions");

    state
        .model_service
        .get_predictions(&model_directory, &filename)
        .await
        .map_err(ApiError::from)
}
