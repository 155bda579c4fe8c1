use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] foodgram_shared::Error),

    #[error("Authentication credentials were not provided")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Domain(foodgram_shared::Error::Validate(_))
            | AppError::Domain(foodgram_shared::Error::User(_)) => StatusCode::BAD_REQUEST,
            AppError::Domain(foodgram_shared::Error::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(e) => {
                tracing::error!(err = %e, "Internal error");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "errors": "An unexpected error occurred. Please try again later."
                    })),
                )
                    .into_response();
            }
        };

        (status_code, Json(json!({ "errors": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                foodgram_shared::Error::User("recipe already removed".to_owned()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                foodgram_shared::Error::NotFound("recipe 1".to_owned()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                foodgram_shared::Error::Server("boom".to_owned()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
