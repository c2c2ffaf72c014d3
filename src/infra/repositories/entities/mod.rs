//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod owner;
pub mod pet;

pub use owner::{ActiveModel as OwnerActiveModel, Entity as OwnerEntity, Model as OwnerModel};
pub use pet::{ActiveModel as PetActiveModel, Entity as PetEntity, Model as PetModel};
