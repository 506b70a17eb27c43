//! Path and query extractors whose rejections use the application's
//! error body instead of axum's plain-text default.

use axum::extract::{FromRequestParts, Path, Query};

use crate::errors::AppError;

/// Typed path parameters; a malformed value yields 422.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Typed query string; a missing or malformed value yields 422.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
