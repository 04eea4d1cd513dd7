//! Application error type and its HTTP rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::maps::MapsError;
use crate::ns::NsError;

use super::dto::ErrorResponse;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    /// An upstream provider failed or answered with an error
    BadGateway { message: String },
    Internal { message: String },
}

impl AppError {
    /// Wrap an NS failure, prefixing the message with what was being done.
    pub fn ns(context: &str, e: NsError) -> Self {
        let message = format!("{context}: {e}");
        match e {
            NsError::Config(_) => AppError::Internal { message },
            // Callers that know a 404 means "unknown station" map it themselves
            NsError::Http(_)
            | NsError::Unauthorized
            | NsError::NotFound(_)
            | NsError::Api { .. }
            | NsError::Json { .. } => AppError::BadGateway { message },
        }
    }

    /// Wrap a Maps failure, prefixing the message with what was being done.
    pub fn maps(context: &str, e: MapsError) -> Self {
        let message = format!("{context}: {e}");
        match e {
            MapsError::Config(_) => AppError::Internal { message },
            MapsError::Http(_)
            | MapsError::Api { .. }
            | MapsError::Json { .. }
            | MapsError::Status { .. }
            | MapsError::NoResults(_) => AppError::BadGateway { message },
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::BadGateway { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message().to_string();

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { detail: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ns_not_found_is_502() {
        let err = AppError::ns("Error fetching train stations", NsError::NotFound("nope".into()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.message(), "Error fetching train stations: not found: nope");
    }

    #[test]
    fn ns_upstream_failures_are_502() {
        let err = AppError::ns("ctx", NsError::Unauthorized);
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);

        let err = AppError::ns(
            "ctx",
            NsError::Api {
                status: 500,
                message: "down".into(),
            },
        );
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn maps_status_is_502() {
        let err = AppError::maps(
            "Error fetching car routes",
            MapsError::Status {
                api: "Directions",
                status: "NOT_FOUND".into(),
                message: None,
            },
        );
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.message(),
            "Error fetching car routes: Directions API error: NOT_FOUND"
        );
    }

    #[test]
    fn config_errors_are_500() {
        let err = AppError::maps("ctx", MapsError::Config("bad".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn renders_detail_body() {
        let response = AppError::BadRequest {
            message: "address is required".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["detail"], "address is required");
    }
}
