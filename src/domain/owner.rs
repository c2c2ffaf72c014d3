//! Owner domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A pet's caretaker.
///
/// The owner's pets are not held here; they are queried on demand by owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Owner {
    /// Caller-assigned identity, unique and immutable
    #[schema(example = 1)]
    pub id: i64,
    /// Display name (not unique)
    #[schema(example = "reddy")]
    pub name: String,
}

impl Owner {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
