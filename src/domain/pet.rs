//! Pet domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Owner;

/// A persisted pet with its owner resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    /// Store-generated identity
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "tina")]
    pub name: String,
    /// Owning side of the association; `null` while unassigned
    pub owner: Option<Owner>,
}

/// A pet that has not been persisted yet (no identity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub owner: Option<Owner>,
}

impl NewPet {
    /// Pet assigned to `owner`
    pub fn with_owner(name: impl Into<String>, owner: Owner) -> Self {
        Self {
            name: name.into(),
            owner: Some(owner),
        }
    }

    /// Foreign key value to store, if assigned
    pub fn owner_id(&self) -> Option<i64> {
        self.owner.as_ref().map(|owner| owner.id)
    }
}
