//! Item and project echo handlers.
//!
//! Nothing here is stored; each handler validates the payload and
//! reflects part of it back.

use axum::{
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::types::MessageResponse;

/// Item payload shared by the item and project drills
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ItemSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct ItemLookup {
    pub item_id: i32,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub description: Option<String>,
}

/// Create item and project routes
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/", post(create_item))
        .route("/items/:item_id", get(read_item).put(update_item).delete(delete_item))
        .route("/projects", post(create_project))
        .route("/projects/", post(create_project))
        .route("/projects/:project_id", delete(delete_project))
}

pub async fn create_item(ValidatedJson(item): ValidatedJson<Item>) -> Json<ItemSummary> {
    Json(ItemSummary {
        item_id: None,
        name: item.name,
        price: item.price,
    })
}

pub async fn read_item(PathParam(item_id): PathParam<i32>) -> Json<ItemLookup> {
    Json(ItemLookup {
        item_id,
        name: "Sample Item",
    })
}

pub async fn update_item(
    PathParam(item_id): PathParam<i32>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Json<ItemSummary> {
    Json(ItemSummary {
        item_id: Some(item_id),
        name: item.name,
        price: item.price,
    })
}

pub async fn delete_item(PathParam(_item_id): PathParam<i32>) -> Json<MessageResponse> {
    Json(MessageResponse::new("Item deleted"))
}

pub async fn create_project(ValidatedJson(item): ValidatedJson<Item>) -> Json<ProjectSummary> {
    Json(ProjectSummary {
        name: item.name,
        description: item.description,
    })
}

pub async fn delete_project(PathParam(project_id): PathParam<i32>) -> Json<MessageResponse> {
    tracing::debug!(project_id, "Project delete requested");
    Json(MessageResponse::new("Project deleted successfully"))
}
