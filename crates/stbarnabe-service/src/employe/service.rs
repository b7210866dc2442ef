//! Service implementation for managing employes.

use std::sync::Arc;

use tracing::debug;

use stbarnabe_core::result::AppResult;
use stbarnabe_core::traits::Repository;
use stbarnabe_core::types::{Page, PageRequest};
use stbarnabe_entity::Employe;

/// Store handle used by [`EmployeService`].
pub type EmployeStore = Arc<dyn Repository<Employe, i64>>;

/// Pass-through service over the employe store.
#[derive(Clone)]
pub struct EmployeService {
    repository: EmployeStore,
}

impl EmployeService {
    /// Creates a new employe service.
    pub fn new(repository: EmployeStore) -> Self {
        Self { repository }
    }

    /// Save an employe.
    pub async fn save(&self, employe: &Employe) -> AppResult<Employe> {
        debug!(?employe, "Request to save Employe");
        self.repository.save(employe).await
    }

    /// Get one page of employes.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<Page<Employe>> {
        debug!(page = page.page, size = page.size, "Request to get all Employes");
        self.repository.find_all(page).await
    }

    /// Get one employe by id.
    pub async fn find_one(&self, id: i64) -> AppResult<Option<Employe>> {
        debug!(id, "Request to get Employe");
        self.repository.find_by_id(&id).await
    }

    /// Delete the employe by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        debug!(id, "Request to delete Employe");
        self.repository.delete_by_id(&id).await?;
        Ok(())
    }
}
