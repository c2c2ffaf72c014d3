//! Service Container - Centralized service access.
//!
//! Services are wired by hand at startup: one `Persistence` unit of work is
//! shared by every service, and handlers reach services through this
//! container instead of a runtime DI framework.

use std::sync::Arc;

use super::{OwnerManager, OwnerService, PetManager, PetService};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get pet service
    fn pets(&self) -> Arc<dyn PetService>;

    /// Get owner service
    fn owners(&self) -> Arc<dyn OwnerService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    pet_service: Arc<dyn PetService>,
    owner_service: Arc<dyn OwnerService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(pet_service: Arc<dyn PetService>, owner_service: Arc<dyn OwnerService>) -> Self {
        Self {
            pet_service,
            owner_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let pet_service = Arc::new(PetManager::new(uow.clone(), config.pets_read_isolation));
        let owner_service = Arc::new(OwnerManager::new(uow, config.pets_read_isolation));

        Self {
            pet_service,
            owner_service,
        }
    }
}

impl ServiceContainer for Services {
    fn pets(&self) -> Arc<dyn PetService> {
        self.pet_service.clone()
    }

    fn owners(&self) -> Arc<dyn OwnerService> {
        self.owner_service.clone()
    }
}
