//! Versement repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use stbarnabe_core::error::{AppError, ErrorKind};
use stbarnabe_core::result::AppResult;
use stbarnabe_core::traits::Repository;
use stbarnabe_core::types::{Page, PageRequest};
use stbarnabe_entity::Versement;

use super::order_by_clause;

/// PostgreSQL store for versements.
#[derive(Debug, Clone)]
pub struct VersementRepository {
    pool: PgPool,
}

impl VersementRepository {
    /// Create a new versement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Versement, i64> for VersementRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Versement>> {
        sqlx::query_as::<_, Versement>("SELECT * FROM versement WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find versement", e))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<Page<Versement>> {
        let order_by = order_by_clause::<Versement>(&page.sort)?;
        let total = self.count().await?;

        let versements = sqlx::query_as::<_, Versement>(&format!(
            "SELECT * FROM versement {order_by} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versements", e))?;

        Ok(Page::new(versements, page, total))
    }

    async fn insert(&self, entity: &Versement) -> AppResult<Versement> {
        sqlx::query_as::<_, Versement>(
            "INSERT INTO versement (montant, date_versement, libelle, employe_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(entity.montant)
        .bind(entity.date_versement)
        .bind(&entity.libelle)
        .bind(entity.employe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update(&self, entity: &Versement) -> AppResult<Versement> {
        let id = entity
            .id
            .ok_or_else(|| AppError::validation("Cannot update a versement without an id"))?;

        sqlx::query_as::<_, Versement>(
            "UPDATE versement SET montant = $2, date_versement = $3, libelle = $4, employe_id = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(entity.montant)
        .bind(entity.date_versement)
        .bind(&entity.libelle)
        .bind(entity.employe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Versement {id} not found")))
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM versement WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete versement", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM versement")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count versements", e)
            })?;
        Ok(total as u64)
    }
}
