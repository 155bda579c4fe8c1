use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// Header set by the authenticating gateway in front of the service.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Id of the user making the request
#[derive(Clone, Debug)]
pub struct CurrentUser(pub String);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();

        if user_id.is_empty() {
            tracing::warn!("Missing {USER_ID_HEADER} header");
            return Err(AppError::Unauthorized);
        }

        Ok(Self(user_id.to_owned()))
    }
}
