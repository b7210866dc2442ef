//! Employe repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use stbarnabe_core::error::{AppError, ErrorKind};
use stbarnabe_core::result::AppResult;
use stbarnabe_core::traits::Repository;
use stbarnabe_core::types::{Page, PageRequest};
use stbarnabe_entity::Employe;

use super::order_by_clause;

/// PostgreSQL store for employees. No query beyond the generic contract.
#[derive(Debug, Clone)]
pub struct EmployeRepository {
    pool: PgPool,
}

impl EmployeRepository {
    /// Create a new employe repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Employe, i64> for EmployeRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Employe>> {
        sqlx::query_as::<_, Employe>("SELECT * FROM employe WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find employe", e))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<Page<Employe>> {
        let order_by = order_by_clause::<Employe>(&page.sort)?;
        let total = self.count().await?;

        let employes = sqlx::query_as::<_, Employe>(&format!(
            "SELECT * FROM employe {order_by} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employes", e))?;

        Ok(Page::new(employes, page, total))
    }

    async fn insert(&self, entity: &Employe) -> AppResult<Employe> {
        sqlx::query_as::<_, Employe>(
            "INSERT INTO employe (nom, prenom, email, date_embauche) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&entity.nom)
        .bind(&entity.prenom)
        .bind(&entity.email)
        .bind(entity.date_embauche)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update(&self, entity: &Employe) -> AppResult<Employe> {
        let id = entity
            .id
            .ok_or_else(|| AppError::validation("Cannot update an employe without an id"))?;

        sqlx::query_as::<_, Employe>(
            "UPDATE employe SET nom = $2, prenom = $3, email = $4, date_embauche = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&entity.nom)
        .bind(&entity.prenom)
        .bind(&entity.email)
        .bind(entity.date_embauche)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Employe {id} not found")))
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employe WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete employe", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employe")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count employes", e))?;
        Ok(total as u64)
    }
}
