//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use utoipa::openapi::{RefOr, Schema};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::{AppError, FieldError};

/// JSON extractor that deserializes and then validates the payload.
///
/// The body is checked in three passes, each reported as
/// `AppError::Validation` (422):
///
/// 1. syntax and content type, `loc: ["body"]`;
/// 2. every required key the payload schema declares but the body lacks,
///    one entry per key at `["body", <key>]`;
/// 3. the first value of the wrong type, at its path, then `validator`
///    rules for every field.
///
/// # Example
///
/// ```rust,ignore
/// use classroom_api::api::extractors::ValidatedJson;
/// use classroom_api::domain::UserFields;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserFields>) {
///     // payload.email is a well-formed address here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + for<'s> ToSchema<'s>,
    Json<Value>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;

        let missing = missing_fields::<T>(&body);
        if !missing.is_empty() {
            return Err(AppError::Validation(missing));
        }

        let value: T = serde_path_to_error::deserialize(body)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Required keys of `T`'s schema that are absent from an object body.
///
/// A non-object body yields nothing here; the type pass reports it.
fn missing_fields<T>(body: &Value) -> Vec<FieldError>
where
    T: for<'s> ToSchema<'s>,
{
    let Some(object) = body.as_object() else {
        return Vec::new();
    };

    let required = match T::schema().1 {
        RefOr::T(Schema::Object(schema)) => schema.required,
        _ => Vec::new(),
    };

    required
        .iter()
        .filter(|key| !object.contains_key(key.as_str()))
        .map(|key| FieldError::new(&["body", key.as_str()], "Field required", "missing"))
        .collect()
}
