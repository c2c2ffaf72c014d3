//! Pet repository implementation.
//!
//! Besides plain CRUD this carries the two custom operations of the pet
//! store: the demonstration seed and the bulk delete by owner.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{ReadRepository, Repository, WriteRepository};
use super::entities::owner::Entity as OwnerEntity;
use super::entities::pet::{self, ActiveModel, Entity as PetEntity};
use super::owner_repository::{OwnerRepository, OwnerStore};
use crate::config::SEED_OWNERS;
use crate::domain::{NewPet, Owner, Pet};
use crate::errors::{AppResult, OptionExt};

/// Pet repository trait for dependency injection.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// List every pet with its owner, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Pet>>;

    /// Find pet by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Pet>>;

    /// Pets whose owner reference equals `owner_id`
    async fn find_by_owner_id(&self, owner_id: i64) -> AppResult<Vec<Pet>>;

    /// Persist a new pet; the store assigns its id
    async fn save(&self, pet: NewPet) -> AppResult<Pet>;

    /// Delete every pet owned by `owner_id`, returning the number of rows removed
    async fn delete_all_by_owner_id(&self, owner_id: i64) -> AppResult<u64>;

    /// Insert the fixed demonstration owners, each with one pet.
    ///
    /// Owner ids are fixed, so running this twice against the same store
    /// fails with a primary key violation.
    async fn insert_some_pets(&self) -> AppResult<()>;
}

/// Concrete implementation of PetRepository over any connection or transaction
pub struct PetStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PetStore<'a, C> {
    /// Create new repository instance
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

impl<C: ConnectionTrait> Repository for PetStore<'_, C> {
    type Conn = C;

    fn conn(&self) -> &C {
        self.conn
    }
}

impl<C: ConnectionTrait> ReadRepository<PetEntity> for PetStore<'_, C> {}
impl<C: ConnectionTrait> WriteRepository<PetEntity, ActiveModel> for PetStore<'_, C> {}

#[async_trait]
impl<'a, C: ConnectionTrait> PetRepository for PetStore<'a, C> {
    async fn find_all(&self) -> AppResult<Vec<Pet>> {
        let rows = PetEntity::find()
            .find_also_related(OwnerEntity)
            .order_by_asc(pet::Column::Id)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(Pet::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Pet>> {
        let row = PetEntity::find_by_id(id)
            .find_also_related(OwnerEntity)
            .one(self.conn)
            .await?;

        Ok(row.map(Pet::from))
    }

    async fn find_by_owner_id(&self, owner_id: i64) -> AppResult<Vec<Pet>> {
        let rows = PetEntity::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .find_also_related(OwnerEntity)
            .order_by_asc(pet::Column::Id)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(Pet::from).collect())
    }

    async fn save(&self, pet: NewPet) -> AppResult<Pet> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(pet.name.clone()),
            owner_id: Set(pet.owner_id()),
        };

        let model =
            <Self as WriteRepository<PetEntity, ActiveModel>>::insert(self, active_model).await?;

        Ok(Pet {
            id: model.id,
            name: model.name,
            owner: pet.owner,
        })
    }

    async fn delete_all_by_owner_id(&self, owner_id: i64) -> AppResult<u64> {
        let result = PetEntity::delete_many()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    async fn insert_some_pets(&self) -> AppResult<()> {
        let owners = OwnerStore::new(self.conn);

        for &(owner_id, owner_name, pet_name) in SEED_OWNERS {
            OwnerRepository::insert(&owners, Owner::new(owner_id, owner_name)).await?;

            // Resolve the owner through the same connection the pet is written on
            let owner = OwnerRepository::find_by_id(&owners, owner_id)
                .await?
                .ok_or_not_found()?;
            let pet = PetRepository::save(self, NewPet::with_owner(pet_name, owner)).await?;

            tracing::debug!(owner_id, pet_id = pet.id, "Seeded owner with pet");
        }

        Ok(())
    }
}
