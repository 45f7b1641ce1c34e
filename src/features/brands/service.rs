use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::brands::dtos::{CreateBrandDto, UpdateBrandDto};
use crate::features::brands::model::Brand;

const COLUMNS: &str = "id, name, slug, description, logo, company_id";

/// Service for brand operations
pub struct BrandService {
    pool: SqlitePool,
}

impl BrandService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Brand>> {
        sqlx::query_as::<_, Brand>(&format!("SELECT {} FROM brands ORDER BY id", COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list brands: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get(&self, id: i64) -> Result<Brand> {
        sqlx::query_as::<_, Brand>(&format!("SELECT {} FROM brands WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get brand {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::not_found("Brand", id))
    }

    pub async fn create(&self, dto: CreateBrandDto) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO brands (name, slug, description, logo, company_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .bind(&dto.description)
        .bind(&dto.logo)
        .bind(dto.company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert brand: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Brand created: id={}, slug={}", id, dto.slug);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateBrandDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query(
            "UPDATE brands SET name = ?, slug = ?, description = ?, logo = ?, company_id = ? \
             WHERE id = ?",
        )
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.slug.unwrap_or(current.slug))
        .bind(dto.description.or(current.description))
        .bind(dto.logo.or(current.logo))
        .bind(dto.company_id.unwrap_or(current.company_id))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update brand {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete brand {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Brand", id));
        }
        Ok(())
    }
}
