//! Opens one database session per request.
//!
//! Place it after `PathParam` so malformed paths are rejected first.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::api::AppState;
use crate::errors::AppError;
use crate::infra::Session;

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Session::begin(state.database.connection()).await
    }
}
