//! Map configuration handler

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::{
    error::ApiResult, handlers::blocking, models::ConfigureResponse, state::AppState,
};
use crate::mission::MapSettings;

/// `POST /mars/configure`
///
/// Regenerates the map and resets the rover. Omitted fields take the
/// session defaults, and the response echoes the values actually used.
pub async fn configure_map(
    State(state): State<AppState>,
    payload: Result<Json<MapSettings>, JsonRejection>,
) -> ApiResult<Json<ConfigureResponse>> {
    let Json(settings) = payload?;
    let mission = state.mission.clone();
    let config = blocking(move || mission.configure(settings)).await?;

    Ok(Json(ConfigureResponse {
        success: true,
        message: "Map configured successfully".to_string(),
        config,
    }))
}
