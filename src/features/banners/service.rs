use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::banners::dtos::{CreateBannerDto, UpdateBannerDto};
use crate::features::banners::model::Banner;

const COLUMNS: &str = "id, title, description, link, image";

/// Service for banner operations
pub struct BannerService {
    pool: SqlitePool,
}

impl BannerService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Banner>> {
        sqlx::query_as::<_, Banner>(&format!("SELECT {} FROM banners ORDER BY id", COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list banners: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get(&self, id: i64) -> Result<Banner> {
        sqlx::query_as::<_, Banner>(&format!("SELECT {} FROM banners WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get banner {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::not_found("Banner", id))
    }

    pub async fn create(&self, dto: CreateBannerDto) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO banners (title, description, link, image) VALUES (?, ?, ?, ?)",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.link)
        .bind(&dto.image)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert banner: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Banner created: id={}", id);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateBannerDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query(
            "UPDATE banners SET title = ?, description = ?, link = ?, image = ? WHERE id = ?",
        )
        .bind(dto.title.unwrap_or(current.title))
        .bind(dto.description.or(current.description))
        .bind(dto.link.or(current.link))
        .bind(dto.image.or(current.image))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update banner {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM banners WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete banner {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Banner", id));
        }
        Ok(())
    }
}
