//! Product handlers.
//!
//! Path and body are extracted before any session is opened, so a
//! malformed request never borrows a pooled connection.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::config::ENTITY_PRODUCT;
use crate::domain::{Product, ProductFields, ProductPatch};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{ProductRepository, Session};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products/",
    tag = "Products",
    request_body = ProductFields,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductFields>,
) -> AppResult<Json<Product>> {
    let session = Session::begin(state.database.connection()).await?;
    let product = session.products().create(payload).await?;
    session.commit().await?;

    tracing::info!(product_id = product.id, "Product created");
    Ok(Json(product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    responses(
        (status = 200, description = "Every stored product", body = [Product])
    )
)]
pub async fn list_products(session: Session) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(session.products().list().await?))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Malformed ID")
    )
)]
pub async fn get_product(
    PathParam(id): PathParam<i32>,
    session: Session,
) -> AppResult<Json<Product>> {
    let product = session
        .products()
        .find_by_id(id)
        .await?
        .ok_or_not_found(ENTITY_PRODUCT)?;

    Ok(Json(product))
}

/// Update the fields present in the payload
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_product(
    PathParam(id): PathParam<i32>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductPatch>,
) -> AppResult<Json<Product>> {
    let session = Session::begin(state.database.connection()).await?;
    let product = session.products().update(id, payload).await?;
    session.commit().await?;

    Ok(Json(product))
}

/// Delete a product permanently
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    PathParam(id): PathParam<i32>,
    session: Session,
) -> AppResult<StatusCode> {
    session.products().delete(id).await?;
    session.commit().await?;

    tracing::info!(product_id = id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
