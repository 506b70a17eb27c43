//! Identity wrapper shared by every persisted entity.
//!
//! An entity's field set is declared once; the stored record is that
//! field set composed with the generated identity, not a subtype of it.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::openapi::schema::{
    AllOfBuilder, KnownFormat, ObjectBuilder, Ref, Schema, SchemaFormat, SchemaType,
};
use utoipa::openapi::RefOr;

/// A stored entity: the generated identity plus the entity's fields.
///
/// Serializes flat, e.g. `{"id": 1, "name": "Ann", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: i32,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    pub fn new(id: i32, fields: T) -> Self {
        Self { id, fields }
    }
}

/// OpenAPI schema for a record: `allOf` of the identity and the field set.
pub(crate) fn record_schema(fields_schema: &str) -> RefOr<Schema> {
    let identity = ObjectBuilder::new()
        .property(
            "id",
            ObjectBuilder::new()
                .schema_type(SchemaType::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32))),
        )
        .required("id");

    RefOr::T(Schema::AllOf(
        AllOfBuilder::new()
            .item(identity)
            .item(Ref::from_schema_name(fields_schema))
            .build(),
    ))
}

/// Deserialize a field that may be absent, explicitly `null`, or set.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent → `None`, `null` → `Some(None)`, value → `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Deserialize an optional field that may be absent but never `null`.
///
/// Use with `#[serde(default, deserialize_with = "non_null")]`:
/// absent → `None`, value → `Some(v)`, `null` → error.
pub fn non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
