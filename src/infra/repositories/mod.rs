//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub mod entities;
mod owner_repository;
mod pet_repository;

pub use base::{CrudRepository, DeleteRepository, ReadRepository, Repository, WriteRepository};
pub use owner_repository::{OwnerRepository, OwnerStore};
pub use pet_repository::{PetRepository, PetStore};
