//! User handlers.
//!
//! Path and body are extracted before any session is opened, so a
//! malformed request never borrows a pooled connection.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::config::ENTITY_USER;
use crate::domain::{User, UserFields, UserPatch};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{Session, UserRepository};

/// Create user routes (collection served with and without trailing slash)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = UserFields,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserFields>,
) -> AppResult<Json<User>> {
    let session = Session::begin(state.database.connection()).await?;
    let user = session.users().create(payload).await?;
    session.commit().await?;

    tracing::info!(user_id = user.id, "User created");
    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = [User])
    )
)]
pub async fn list_users(session: Session) -> AppResult<Json<Vec<User>>> {
    let users = session.users().list().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found"),
        (status = 422, description = "Malformed ID")
    )
)]
pub async fn get_user(PathParam(id): PathParam<i32>, session: Session) -> AppResult<Json<User>> {
    let user = session
        .users()
        .find_by_id(id)
        .await?
        .ok_or_not_found(ENTITY_USER)?;

    Ok(Json(user))
}

/// Update the fields present in the payload
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_user(
    PathParam(id): PathParam<i32>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPatch>,
) -> AppResult<Json<User>> {
    let session = Session::begin(state.database.connection()).await?;
    let user = session.users().update(id, payload).await?;
    session.commit().await?;

    Ok(Json(user))
}

/// Delete a user permanently
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(PathParam(id): PathParam<i32>, session: Session) -> AppResult<StatusCode> {
    session.users().delete(id).await?;
    session.commit().await?;

    tracing::info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
