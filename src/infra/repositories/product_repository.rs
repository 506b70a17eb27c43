//! Product repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::config::ENTITY_PRODUCT;
use crate::domain::{Product, ProductFields, ProductPatch};
use crate::errors::{AppError, AppResult, OptionExt};

/// Product persistence operations, one statement each.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, fields: ProductFields) -> AppResult<Product>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// List all products in insertion order
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Apply the present fields of `patch`; `description: null` clears it
    async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<Product>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed product repository bound to one session's transaction
pub struct ProductStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> ProductStore<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl ProductRepository for ProductStore<'_> {
    async fn create(&self, fields: ProductFields) -> AppResult<Product> {
        let model = ActiveModel::from(fields)
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(product_id = model.id, "Product inserted");
        Ok(Product::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<Product> {
        let model = ProductEntity::find_by_id(id)
            .one(self.txn)
            .await?
            .ok_or_not_found(ENTITY_PRODUCT)?;

        if patch.is_empty() {
            return Ok(Product::from(model));
        }

        let mut active = model.into_active_model();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(price) = patch.price {
            active.price = Set(price);
        }

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(ENTITY_PRODUCT));
        }

        tracing::debug!(product_id = id, "Product deleted");
        Ok(())
    }
}
