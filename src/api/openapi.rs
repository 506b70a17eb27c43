//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{product_handler, user_handler};
use crate::api::routes::{self, HealthResponse};
use crate::domain::{Product, ProductFields, ProductPatch, User, UserFields, UserPatch};

/// OpenAPI documentation for the classroom API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classroom API",
        version = "0.1.0",
        description = "User and product records over a relational store, plus request handling drills",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        routes::health,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Product endpoints
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
    ),
    components(
        schemas(
            HealthResponse,
            User,
            UserFields,
            UserPatch,
            Product,
            ProductFields,
            ProductPatch,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Users", description = "User records"),
        (name = "Products", description = "Product records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_crud_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/users/", "/users/{id}", "/products/", "/products/{id}", "/health"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn record_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("User"));
        assert!(schemas.contains_key("Product"));
        assert!(schemas.contains_key("ProductPatch"));
    }
}
