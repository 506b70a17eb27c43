//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{User, UserFields};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub job: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a stored row to the domain record
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User::new(
            model.id,
            UserFields {
                name: model.name,
                email: model.email,
                job: model.job,
            },
        )
    }
}

/// Build an insertable row; the identity is left for the database
impl From<UserFields> for ActiveModel {
    fn from(fields: UserFields) -> Self {
        Self {
            id: NotSet,
            name: Set(fields.name),
            email: Set(fields.email),
            job: Set(fields.job),
        }
    }
}
