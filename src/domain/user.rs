//! User domain types.

use serde::{Deserialize, Serialize};
use utoipa::openapi::{RefOr, Schema};
use utoipa::ToSchema;
use validator::Validate;

use super::record::{non_null, record_schema, Record};

/// Fields every user carries. Doubles as the creation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserFields {
    /// Display name
    #[schema(example = "Ann")]
    pub name: String,
    /// Contact address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Job or role
    #[schema(example = "eng")]
    pub job: String,
}

/// Partial user update. Only fields present in the payload are applied;
/// none of them accepts an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "non_null")]
    #[schema(example = "Ann Lee")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[schema(example = "manager")]
    pub job: Option<String>,
}

impl UserPatch {
    /// True when the payload carried no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.job.is_none()
    }
}

/// A stored user
pub type User = Record<UserFields>;

impl<'s> ToSchema<'s> for Record<UserFields> {
    fn schema() -> (&'s str, RefOr<Schema>) {
        ("User", record_schema("UserFields"))
    }
}
