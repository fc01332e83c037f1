use std::convert::Infallible;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::StreamExt;

use crate::core::error::AppError;
use crate::features::generation::dto::GenerateDebateRequestDto;
use crate::server::AppState;

const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

pub async fn handle_generate_debate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateDebateRequestDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let prompt = state.generation.prepare_prompt(&request)?;

    let fragments = state.generation.stream_debate(prompt);
    let body = Body::from_stream(fragments.map(Ok::<_, Infallible>));

    Ok(([(header::CONTENT_TYPE, PLAIN_TEXT)], body).into_response())
}
