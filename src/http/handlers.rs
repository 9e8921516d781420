//! Axum HTTP handlers for the web server

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{errors::AppError, AppState};

pub const ALIVE_MESSAGE: &str = "Backend is alive! Go to /api/vibe to check the vibe.";

#[derive(Debug, Serialize)]
pub struct VibeResponse {
    pub message: &'static str,
}

pub async fn home() -> &'static str {
    ALIVE_MESSAGE
}

pub async fn vibe_check(State(state): State<AppState>) -> Result<Json<VibeResponse>, AppError> {
    let message = state
        .vibes
        .pick(&mut rand::thread_rng())
        .ok_or_else(|| AppError::internal("vibe set is empty"))?;

    Ok(Json(VibeResponse { message }))
}
