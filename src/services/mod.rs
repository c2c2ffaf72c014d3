//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate infrastructure to fulfill application use cases.
//! Each service method is one transaction boundary opened through the
//! Unit of Work; errors propagate unchanged to the HTTP layer.

pub mod container;
mod owner_service;
mod pet_service;
#[cfg(test)]
mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use owner_service::{OwnerManager, OwnerService};
pub use pet_service::{PetManager, PetService};

#[cfg(any(test, feature = "test-utils"))]
pub use owner_service::MockOwnerService;
#[cfg(any(test, feature = "test-utils"))]
pub use pet_service::MockPetService;
