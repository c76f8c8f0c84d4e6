use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use pocketpal_infrastructure::UserDetails;
use serde_json::Value;

use crate::app::AppState;
use crate::error::ApiError;

/// Returns the registered profile, or the default profile if none is registered.
pub async fn get_profile(State(state): State<AppState>) -> Json<UserDetails> {
    Json(state.user_api.get_user_details().into())
}

/// Replaces the registered profile.
///
/// Responds `204 No Content` on success and `400` with `invalid_profile`
/// when the body is not a JSON object with all three string fields. A
/// body that cannot be read keeps its own status (e.g. `413`). A rejected
/// request leaves the stored profile untouched.
pub async fn put_profile(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = payload?;
    let profile = UserDetails::from_json(body)?.into_profile()?;

    state.user_api.register_user(profile).await?;

    Ok(StatusCode::NO_CONTENT)
}
