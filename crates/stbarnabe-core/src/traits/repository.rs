//! Generic repository trait for entity storage.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::persistable::Persistable;
use crate::types::pagination::{Page, PageRequest};

/// Generic CRUD repository trait.
///
/// Defined over the entity and identifier types so that every entity
/// gets a strongly typed store. One implementation exists per backing
/// store technology.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Persistable<Id>,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Find one page of entities, ordered as the request asks.
    async fn find_all(&self, page: &PageRequest) -> AppResult<Page<Entity>>;

    /// Insert a new entity and return it with its assigned identifier.
    async fn insert(&self, entity: &Entity) -> AppResult<Entity>;

    /// Replace an existing entity and return the stored version.
    ///
    /// Fails with a not-found error when no row carries the identifier.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete_by_id(&self, id: &Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;

    /// Insert when the identifier is absent, update otherwise.
    async fn save(&self, entity: &Entity) -> AppResult<Entity> {
        if entity.id().is_some() {
            self.update(entity).await
        } else {
            self.insert(entity).await
        }
    }

    /// Whether an entity with this key exists.
    async fn exists_by_id(&self, id: &Id) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
