//! Service implementation for managing versements.

use std::sync::Arc;

use tracing::debug;

use stbarnabe_core::result::AppResult;
use stbarnabe_core::traits::Repository;
use stbarnabe_core::types::{Page, PageRequest};
use stbarnabe_entity::Versement;

/// Store handle used by [`VersementService`].
pub type VersementStore = Arc<dyn Repository<Versement, i64>>;

/// Pass-through service over the versement store.
#[derive(Clone)]
pub struct VersementService {
    repository: VersementStore,
}

impl VersementService {
    /// Creates a new versement service.
    pub fn new(repository: VersementStore) -> Self {
        Self { repository }
    }

    /// Save a versement, inserting or replacing depending on its id.
    pub async fn save(&self, versement: &Versement) -> AppResult<Versement> {
        debug!(?versement, "Request to save Versement");
        self.repository.save(versement).await
    }

    /// Get one page of versements.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<Page<Versement>> {
        debug!(page = page.page, size = page.size, "Request to get all Versements");
        self.repository.find_all(page).await
    }

    /// Get one versement by id.
    pub async fn find_one(&self, id: i64) -> AppResult<Option<Versement>> {
        debug!(id, "Request to get Versement");
        self.repository.find_by_id(&id).await
    }

    /// Delete the versement by id. Absence is not an error.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        debug!(id, "Request to delete Versement");
        let deleted = self.repository.delete_by_id(&id).await?;
        if !deleted {
            debug!(id, "Versement was already absent");
        }
        Ok(())
    }
}
