//! Classroom drills: fixed lookups, query-string handling, status codes
//! and the in-memory student roster.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParam, QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::config::{ADULT_AGE, ENTITY_ITEM, ENTITY_STUDENT, ENTITY_USER};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::Student;
use crate::types::{Created, MessageResponse};

/// Name and age of a drill user
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct UserInfo {
    pub name: String,
    pub age: i32,
}

impl UserInfo {
    fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub keyword: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TraitQuery {
    pub color: Option<String>,
    pub taste: Option<String>,
}

/// Catalogue entry: name, color, taste
struct Fruit {
    name: &'static str,
    color: &'static str,
    taste: &'static str,
}

const CATALOGUE: [Fruit; 3] = [
    Fruit {
        name: "apple",
        color: "red",
        taste: "sweet",
    },
    Fruit {
        name: "banana",
        color: "yellow",
        taste: "sweet",
    },
    Fruit {
        name: "carrot",
        color: "orange",
        taste: "crunchy",
    },
];

/// Create classroom drill routes
pub fn classroom_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .route("/user/:user_id", get(fixed_user))
        .route("/create_user", post(create_user_info))
        .route("/students", post(student_from_query))
        .route("/age/:age", get(age_check))
        .route("/create_student", post(create_student))
        .route("/all_students", get(all_students))
        .route("/new_users/:user_id", get(new_user))
        .route("/likelion/:student_id", get(likelion_student))
        .route("/search", get(search))
        .route("/search_by_info", get(search_by_info))
        .route("/invalid-request", get(invalid_request))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, LikeLion!"))
}

/// Always the same user whatever the id
pub async fn fixed_user(PathParam(_user_id): PathParam<i32>) -> Json<UserInfo> {
    Json(UserInfo::new("Alice", 30))
}

pub async fn create_user_info(ValidatedJson(user): ValidatedJson<UserInfo>) -> Created<Value> {
    Created(json!({ "message": "User created successfully", "user": user }))
}

pub async fn student_from_query(QueryParams(query): QueryParams<StudentQuery>) -> Json<Value> {
    Json(json!({ "name": query.name, "email": query.email }))
}

pub async fn age_check(PathParam(age): PathParam<i32>) -> Json<MessageResponse> {
    let verdict = if age < ADULT_AGE { "Minor" } else { "Adult" };
    Json(MessageResponse::new(verdict))
}

/// Append a student to the process-wide roster
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(student): ValidatedJson<Student>,
) -> Created<Value> {
    let size = state.roster.add(student.clone()).await;
    tracing::debug!(roster_size = size, "Student added");

    Created(json!({ "message": "Student created successfully", "student": student }))
}

pub async fn all_students(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "students": state.roster.all().await }))
}

/// Index into a fixed two-entry list; anything outside it is 404
pub async fn new_user(PathParam(user_id): PathParam<i64>) -> AppResult<Json<UserInfo>> {
    let users = [UserInfo::new("John", 20), UserInfo::new("Alice", 24)];

    let user = usize::try_from(user_id)
        .ok()
        .and_then(|idx| users.get(idx).cloned())
        .ok_or_not_found(ENTITY_USER)?;

    Ok(Json(user))
}

pub async fn likelion_student(PathParam(student_id): PathParam<i32>) -> AppResult<Json<Student>> {
    let (name, email) = match student_id {
        1 => ("김멋사", "kimmutsa@example.com"),
        2 => ("이멋사", "leemutsa@example.com"),
        _ => return Err(AppError::NotFound(ENTITY_STUDENT)),
    };

    Ok(Json(Student {
        name: name.to_string(),
        email: email.to_string(),
    }))
}

/// Exact keyword lookup in the catalogue
pub async fn search(QueryParams(query): QueryParams<KeywordQuery>) -> AppResult<Json<Value>> {
    let fruit = CATALOGUE
        .iter()
        .find(|f| f.name == query.keyword)
        .ok_or_not_found(ENTITY_ITEM)?;

    Ok(Json(json!({
        "result": { "color": fruit.color, "taste": fruit.taste }
    })))
}

/// Names whose color or taste matches either supplied trait
pub async fn search_by_info(QueryParams(query): QueryParams<TraitQuery>) -> AppResult<Json<Value>> {
    let matches = |wanted: &Option<String>, actual: &str| wanted.as_deref() == Some(actual);

    let names: Vec<&str> = CATALOGUE
        .iter()
        .filter(|f| matches(&query.color, f.color) || matches(&query.taste, f.taste))
        .map(|f| f.name)
        .collect();

    if names.is_empty() {
        return Err(AppError::NotFound(ENTITY_ITEM));
    }

    Ok(Json(json!({ "result": names })))
}

pub async fn invalid_request() -> AppResult<Json<Value>> {
    Err(AppError::bad_request("Invalid request"))
}
