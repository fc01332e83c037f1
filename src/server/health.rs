use axum::Json;
use serde_json::{Value, json};

use crate::core::error::AppError;

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}
