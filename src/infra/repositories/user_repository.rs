//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::ENTITY_USER;
use crate::domain::{User, UserFields, UserPatch};
use crate::errors::{AppError, AppResult, OptionExt};

/// User persistence operations, one statement each.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the identity is assigned by the database
    async fn create(&self, fields: UserFields) -> AppResult<User>;

    /// Find user by identity
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Apply the present fields of `patch`
    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<User>;

    /// Permanently delete user
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed user repository bound to one session's transaction
pub struct UserStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> UserStore<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl UserRepository for UserStore<'_> {
    async fn create(&self, fields: UserFields) -> AppResult<User> {
        let model = ActiveModel::from(fields)
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(user_id = model.id, "User inserted");
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(self.txn)
            .await?
            .ok_or_not_found(ENTITY_USER)?;

        if patch.is_empty() {
            return Ok(User::from(model));
        }

        let mut active = model.into_active_model();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(job) = patch.job {
            active.job = Set(job);
        }

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(ENTITY_USER));
        }

        tracing::debug!(user_id = id, "User deleted");
        Ok(())
    }
}
