use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::certificates::dtos::{CreateCertificateDto, UpdateCertificateDto};
use crate::features::certificates::model::Certificate;

const COLUMNS: &str = "id, name, description, image, company_id";

/// Service for certificate operations
pub struct CertificateService {
    pool: SqlitePool,
}

impl CertificateService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Certificate>> {
        sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {} FROM certificates ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list certificates: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: i64) -> Result<Certificate> {
        sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {} FROM certificates WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get certificate {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::not_found("Certificate", id))
    }

    pub async fn create(&self, dto: CreateCertificateDto) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO certificates (name, description, image, company_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.image)
        .bind(dto.company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert certificate: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Certificate created: id={}", id);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateCertificateDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query(
            "UPDATE certificates SET name = ?, description = ?, image = ?, company_id = ? \
             WHERE id = ?",
        )
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.description.or(current.description))
        .bind(dto.image.or(current.image))
        .bind(dto.company_id.unwrap_or(current.company_id))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update certificate {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete certificate {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Certificate", id));
        }
        Ok(())
    }
}
