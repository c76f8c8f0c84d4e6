use axum::{Json, extract::State};
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether a profile has been registered since startup.
    pub registered: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        registered: state.profile_store_concrete.is_registered(),
    })
}
