use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::core::error::AppError;
use crate::features::debate::dto::{DebateRequestDto, DebateResponseDto};
use crate::server::AppState;

pub async fn handle_debate(
    State(state): State<AppState>,
    payload: Result<Json<DebateRequestDto>, JsonRejection>,
) -> Result<Json<DebateResponseDto>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    state.debate.run_debate(request).map(Json)
}
