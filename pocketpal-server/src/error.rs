use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pocketpal_core::PocketPalError;
use serde_json::json;

/// HTTP-facing error.
///
/// Rendered as `{"error": {"type", "message", "status"}}`.
#[derive(Debug)]
pub enum ApiError {
    /// A domain error; `InvalidProfile` is the caller's fault, everything
    /// else is internal.
    Domain(PocketPalError),
    /// The request body could not be read at all (too large, aborted).
    /// Keeps the status axum assigned to it.
    Rejected(JsonRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(PocketPalError::InvalidProfile { .. }) => StatusCode::BAD_REQUEST,
            Self::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected(rejection) => rejection.status(),
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Domain(PocketPalError::InvalidProfile { .. }) => "invalid_profile",
            Self::Domain(_) => "internal",
            Self::Rejected(_) => "request_rejected",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::Rejected(rejection) => rejection.body_text(),
        }
    }
}

impl From<PocketPalError> for ApiError {
    fn from(err: PocketPalError) -> Self {
        Self::Domain(err)
    }
}

/// Unparseable JSON and a missing JSON content type are malformed profile
/// input; failures to read the body are passed through with their own status.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                Self::Domain(PocketPalError::invalid_profile(rejection.body_text()))
            }
            other => Self::Rejected(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        } else {
            tracing::warn!("Request rejected: {}", message);
        }

        let body = Json(json!({
            "error": {
                "type": self.error_type(),
                "message": message,
                "status": status.as_u16(),
            }
        }));

        (status, body).into_response()
    }
}
