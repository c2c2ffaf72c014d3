//! Integration tests for services, repositories and the Unit of Work.
//!
//! Every test runs against its own in-memory SQLite database with the
//! migrations applied, so foreign keys and transactions behave as they
//! would on a real store.

use std::sync::Arc;

use pet_registry::config::{DatabaseConfig, ReadIsolation};
use pet_registry::domain::{NewPet, Owner};
use pet_registry::errors::{AppError, AppResult};
use pet_registry::infra::repositories::entities::{OwnerActiveModel, OwnerEntity};
use pet_registry::infra::repositories::{CrudRepository, ReadRepository};
use pet_registry::infra::{
    Database, OwnerRepository, OwnerStore, PetRepository, PetStore, Persistence, UnitOfWork,
};
use pet_registry::services::{OwnerManager, OwnerService, PetManager, PetService};
use pet_registry::with_transaction;

// =============================================================================
// Test Setup
// =============================================================================

async fn setup() -> Database {
    // One connection keeps every query on the same in-memory database
    let mut config = DatabaseConfig::with_url("sqlite::memory:");
    config.max_connections = 1;
    config.min_connections = 1;

    Database::connect(&config).await.expect("in-memory sqlite")
}

struct Fixture {
    db: Database,
    pets: PetManager<Persistence>,
    owners: OwnerManager<Persistence>,
}

async fn fixture(isolation: ReadIsolation) -> Fixture {
    let db = setup().await;
    let uow = Arc::new(Persistence::new(db.get_connection()));

    Fixture {
        pets: PetManager::new(uow.clone(), isolation),
        owners: OwnerManager::new(uow, isolation),
        db,
    }
}

async fn owner_ids(db: &Database) -> Vec<i64> {
    OwnerRepository::find_all(&OwnerStore::new(db.connection()))
        .await
        .unwrap()
        .into_iter()
        .map(|owner| owner.id)
        .collect()
}

// =============================================================================
// Seed
// =============================================================================

#[tokio::test]
async fn test_seed_inserts_two_owners_with_one_pet_each() {
    let f = fixture(ReadIsolation::default()).await;

    f.pets.insert_some_pets().await.unwrap();

    let owners = OwnerRepository::find_all(&OwnerStore::new(f.db.connection()))
        .await
        .unwrap();
    assert_eq!(owners, vec![Owner::new(1, "reddy"), Owner::new(2, "mathan")]);

    let pets = f.pets.get_pets().await.unwrap();
    assert_eq!(pets.len(), 2);
    assert_eq!(pets[0].name, "tina");
    assert_eq!(pets[0].owner, Some(Owner::new(1, "reddy")));
    assert_eq!(pets[1].name, "nemo");
    assert_eq!(pets[1].owner, Some(Owner::new(2, "mathan")));
    assert_ne!(pets[0].id, pets[1].id);
}

#[tokio::test]
async fn test_second_seed_fails_and_leaves_store_unchanged() {
    let f = fixture(ReadIsolation::default()).await;

    f.pets.insert_some_pets().await.unwrap();
    let before = f.pets.get_pets().await.unwrap();

    let result = f.pets.insert_some_pets().await;
    assert!(matches!(result, Err(AppError::Database(_))));

    assert_eq!(f.pets.get_pets().await.unwrap(), before);
    assert_eq!(owner_ids(&f.db).await, vec![1, 2]);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_on_empty_store() {
    let f = fixture(ReadIsolation::default()).await;

    assert!(f.pets.get_pets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_works_at_every_isolation_level() {
    for isolation in [
        ReadIsolation::StoreDefault,
        ReadIsolation::ReadUncommitted,
        ReadIsolation::ReadCommitted,
        ReadIsolation::RepeatableRead,
        ReadIsolation::Serializable,
    ] {
        let f = fixture(isolation).await;
        f.pets.insert_some_pets().await.unwrap();

        assert_eq!(f.pets.get_pets().await.unwrap().len(), 2, "{}", isolation);
    }
}

#[tokio::test]
async fn test_pet_without_owner_lists_with_null_owner() {
    let f = fixture(ReadIsolation::default()).await;

    let stray = NewPet {
        name: "stray".to_string(),
        owner: None,
    };
    let saved = PetRepository::save(&PetStore::new(f.db.connection()), stray)
        .await
        .unwrap();

    let pets = f.pets.get_pets().await.unwrap();
    assert_eq!(pets, vec![saved]);
    assert_eq!(pets[0].owner, None);
}

// =============================================================================
// Cascade delete
// =============================================================================

#[tokio::test]
async fn test_delete_seeded_owner_removes_its_pets() {
    let f = fixture(ReadIsolation::default()).await;
    f.pets.insert_some_pets().await.unwrap();

    f.owners.delete(1).await.unwrap();

    let pets = f.pets.get_pets().await.unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].name, "nemo");
    assert_eq!(pets[0].owner, Some(Owner::new(2, "mathan")));
    assert_eq!(owner_ids(&f.db).await, vec![2]);
}

#[tokio::test]
async fn test_delete_removes_every_pet_of_the_owner() {
    let f = fixture(ReadIsolation::default()).await;
    f.pets.insert_some_pets().await.unwrap();

    let store = PetStore::new(f.db.connection());
    PetRepository::save(&store, NewPet::with_owner("rex", Owner::new(2, "mathan")))
        .await
        .unwrap();
    assert_eq!(f.owners.get_owner_pets(2).await.unwrap().len(), 2);

    f.owners.delete(2).await.unwrap();

    assert!(f.owners.get_owner_pets(2).await.unwrap().is_empty());
    assert_eq!(f.pets.get_pets().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_owner_is_a_no_op() {
    let f = fixture(ReadIsolation::default()).await;
    f.pets.insert_some_pets().await.unwrap();
    let before = f.pets.get_pets().await.unwrap();

    f.owners.delete(999).await.unwrap();

    assert_eq!(f.pets.get_pets().await.unwrap(), before);
    assert_eq!(owner_ids(&f.db).await, vec![1, 2]);
}

#[tokio::test]
async fn test_delete_on_empty_store_succeeds() {
    let f = fixture(ReadIsolation::default()).await;

    f.owners.delete(1).await.unwrap();
}

// =============================================================================
// Referential integrity
// =============================================================================

#[tokio::test]
async fn test_owner_with_pets_cannot_be_removed_directly() {
    let f = fixture(ReadIsolation::default()).await;
    f.pets.insert_some_pets().await.unwrap();

    let result = OwnerRepository::delete_by_id(&OwnerStore::new(f.db.connection()), 1).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(owner_ids(&f.db).await, vec![1, 2]);
}

#[tokio::test]
async fn test_pet_cannot_reference_missing_owner() {
    let f = fixture(ReadIsolation::default()).await;

    let result = PetRepository::save(
        &PetStore::new(f.db.connection()),
        NewPet::with_owner("ghost", Owner::new(42, "nobody")),
    )
    .await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert!(f.pets.get_pets().await.unwrap().is_empty());
}

// =============================================================================
// Repositories
// =============================================================================

#[tokio::test]
async fn test_owner_insert_rejects_duplicate_id() {
    let db = setup().await;
    let owners = OwnerStore::new(db.connection());

    OwnerRepository::insert(&owners, Owner::new(5, "first")).await.unwrap();
    let result = OwnerRepository::insert(&owners, Owner::new(5, "second")).await;

    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
async fn test_owner_save_merges_existing_id() {
    let db = setup().await;
    let owners = OwnerStore::new(db.connection());

    OwnerRepository::save(&owners, Owner::new(3, "before")).await.unwrap();
    let renamed = OwnerRepository::save(&owners, Owner::new(3, "after")).await.unwrap();

    assert_eq!(renamed, Owner::new(3, "after"));
    assert_eq!(
        OwnerRepository::find_by_id(&owners, 3).await.unwrap(),
        Some(Owner::new(3, "after"))
    );
    assert_eq!(ReadRepository::<OwnerEntity>::count(&owners).await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_pets_by_owner_id() {
    let f = fixture(ReadIsolation::default()).await;
    f.pets.insert_some_pets().await.unwrap();

    let pets = PetRepository::find_by_owner_id(&PetStore::new(f.db.connection()), 1)
        .await
        .unwrap();

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].name, "tina");
    assert!(f.owners.get_owner_pets(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pet_find_by_id_resolves_owner() {
    let f = fixture(ReadIsolation::default()).await;
    f.pets.insert_some_pets().await.unwrap();
    let first = f.pets.get_pets().await.unwrap().remove(0);

    let store = PetStore::new(f.db.connection());
    let found = PetRepository::find_by_id(&store, first.id).await.unwrap();

    assert_eq!(found, Some(first));
    assert_eq!(PetRepository::find_by_id(&store, -1).await.unwrap(), None);
}

fn assert_crud<R: CrudRepository<OwnerEntity, OwnerActiveModel>>(_: &R) {}

#[tokio::test]
async fn test_owner_store_is_a_crud_repository() {
    let db = setup().await;
    let owners = OwnerStore::new(db.connection());

    assert_crud(&owners);
    assert_eq!(ReadRepository::<OwnerEntity>::count(&owners).await.unwrap(), 0);
}

// =============================================================================
// Unit of Work
// =============================================================================

#[tokio::test]
async fn test_transaction_commits_on_success() {
    let db = setup().await;
    let uow = Persistence::new(db.get_connection());

    let owner: AppResult<Owner> = with_transaction!(uow, |ctx| {
        ctx.owners().insert(Owner::new(7, "kept")).await
    });

    assert_eq!(owner.unwrap(), Owner::new(7, "kept"));
    assert_eq!(owner_ids(&db).await, vec![7]);
}

#[tokio::test]
async fn test_transaction_rolls_back_on_error() {
    let db = setup().await;
    let uow = Persistence::new(db.get_connection());

    let result: AppResult<()> = with_transaction!(uow, |ctx| {
        ctx.owners().insert(Owner::new(7, "discarded")).await?;
        Err::<(), _>(AppError::BadRequest("abort".to_string()))
    });

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(owner_ids(&db).await.is_empty());
}

#[tokio::test]
async fn test_read_transaction_sees_committed_rows() {
    let f = fixture(ReadIsolation::default()).await;
    f.pets.insert_some_pets().await.unwrap();
    let uow = Persistence::new(f.db.get_connection());

    let count = with_transaction!(uow, read(ReadIsolation::ReadCommitted.level()), |ctx| {
        OwnerRepository::find_all(&ctx.owners()).await
    })
    .unwrap()
    .len();

    assert_eq!(count, 2);
}
