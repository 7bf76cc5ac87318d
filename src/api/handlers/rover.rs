//! Rover position and command handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::{
    error::ApiResult,
    handlers::blocking,
    models::{CommandRequest, CommandResponse, RoverState},
    state::AppState,
};

/// `GET /rover/position`
pub async fn get_position(State(state): State<AppState>) -> ApiResult<Json<RoverState>> {
    let mission = state.mission.clone();
    let rover = blocking(move || mission.rover()).await?;
    Ok(Json(RoverState::from(&rover)))
}

/// `POST /rover/command`
///
/// An unknown command character rejects the request with 400 before the
/// rover moves, as does a malformed body. Movement failures are reported
/// inside the step results.
pub async fn execute_commands(
    State(state): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> ApiResult<Json<CommandResponse>> {
    let Json(request) = payload?;
    let mission = state.mission.clone();
    let report = blocking(move || mission.execute(&request.commands)).await?;
    Ok(Json(CommandResponse::from(report)))
}
