use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::posting::{PostingServiceError, SessionStoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Posting(PostingServiceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Posting(PostingServiceError::Wizard(_)) => StatusCode::CONFLICT,
            AppError::Posting(PostingServiceError::Store(SessionStoreError::NotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Posting(PostingServiceError::Store(SessionStoreError::Conflict)) => {
                StatusCode::CONFLICT
            }
            AppError::Posting(PostingServiceError::Store(SessionStoreError::Unavailable(_)))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Posting(err) => write!(f, "posting error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Posting(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PostingServiceError> for AppError {
    fn from(value: PostingServiceError) -> Self {
        Self::Posting(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::posting::{WizardError, WizardStep};

    #[test]
    fn posting_errors_map_to_client_statuses() {
        let not_on_review = AppError::from(PostingServiceError::Wizard(
            WizardError::NotOnReviewStep {
                current: WizardStep::Details,
            },
        ));
        assert_eq!(not_on_review.status(), StatusCode::CONFLICT);

        let missing = AppError::from(PostingServiceError::Store(SessionStoreError::NotFound));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        let down = AppError::from(PostingServiceError::Store(SessionStoreError::Unavailable(
            "offline".to_string(),
        )));
        assert_eq!(down.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let io = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "bind"));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(io.to_string().starts_with("io error"));
    }

    #[test]
    fn listener_failures_convert_through_question_mark() {
        fn bind() -> Result<(), AppError> {
            let listener: Result<(), std::io::Error> = Err(std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                "port taken",
            ));
            listener?;
            Ok(())
        }

        let err = bind().expect_err("bind fails");
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "io error: port taken");
    }
}
