//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{Product, ProductFields};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a stored row to the domain record
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product::new(
            model.id,
            ProductFields {
                name: model.name,
                description: model.description,
                price: model.price,
            },
        )
    }
}

/// Build an insertable row; the identity is left for the database
impl From<ProductFields> for ActiveModel {
    fn from(fields: ProductFields) -> Self {
        Self {
            id: NotSet,
            name: Set(fields.name),
            description: Set(fields.description),
            price: Set(fields.price),
        }
    }
}
