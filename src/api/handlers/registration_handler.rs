//! Registration drills: typed payload validation with echo responses.
//!
//! Covers the constraint kinds the persisted entities do not: integers,
//! calendar dates (`YYYY-MM-DD`), RFC 3339 date-times and a business rule
//! checked after validation.

use axum::{response::Json, routing::post, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::ADULT_AGE;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterUser {
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub age: i32,
}

/// Product announcement with a release timestamp
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct DatedProduct {
    pub name: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct Event {
    pub name: String,
    /// e.g. `2024-05-18T12:30:00.0Z`
    pub date: DateTime<Utc>,
    pub num_of_participants: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct BookLoan {
    pub title: String,
    pub writer: String,
    pub loan_date: NaiveDate,
}

/// Club member signup
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct Member {
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub registration_date: NaiveDate,
}

/// Cafeteria menu entry
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct Menu {
    pub name: String,
    pub price: f64,
    pub provided_date: NaiveDate,
}

/// Study group
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct Study {
    pub name: String,
    pub topic: String,
    pub max_num: i32,
}

/// Create registration drill routes
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register_user))
        .route("/product/", post(add_product))
        .route("/event/", post(create_event))
        .route("/loan/", post(lend_book))
        .route("/lion/", post(add_member))
        .route("/lunch/", post(add_menu))
        .route("/study/", post(add_study))
}

/// Register a user; minors are turned away with 400.
pub async fn register_user(
    ValidatedJson(user): ValidatedJson<RegisterUser>,
) -> AppResult<Json<RegisterUser>> {
    if user.age < ADULT_AGE {
        return Err(AppError::bad_request(format!(
            "Age must be {} or over.",
            ADULT_AGE
        )));
    }
    Ok(Json(user))
}

pub async fn add_product(ValidatedJson(product): ValidatedJson<DatedProduct>) -> Json<DatedProduct> {
    Json(product)
}

pub async fn create_event(ValidatedJson(event): ValidatedJson<Event>) -> Json<Value> {
    Json(json!({ "message": "Event registered", "event": event }))
}

pub async fn lend_book(ValidatedJson(loan): ValidatedJson<BookLoan>) -> Json<Value> {
    Json(json!({ "message": "The book has been loaned.", "bookloan": loan }))
}

pub async fn add_member(ValidatedJson(member): ValidatedJson<Member>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome aboard, {}!", member.name),
        "member": member,
    }))
}

pub async fn add_menu(ValidatedJson(menu): ValidatedJson<Menu>) -> Json<Value> {
    Json(json!({
        "message": format!("Menu item {} registered.", menu.name),
        "menu": menu,
    }))
}

pub async fn add_study(ValidatedJson(study): ValidatedJson<Study>) -> Json<Value> {
    Json(json!({ "message": "Study group created.", "study": study }))
}
