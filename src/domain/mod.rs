//! Domain layer - Core business entities.
//!
//! Plain data with no infrastructure dependencies. Owner and Pet do not
//! reference each other in both directions: a pet holds its owner, while an
//! owner's pets are looked up through the pet repository.

mod owner;
mod pet;

pub use owner::Owner;
pub use pet::{NewPet, Pet};
