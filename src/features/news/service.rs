use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::news::dtos::{CreateNewsDto, UpdateNewsDto};
use crate::features::news::model::News;

const COLUMNS: &str = "id, title, slug, body, image, publication_date, company_id";

/// Service for news operations
pub struct NewsService {
    pool: SqlitePool,
}

impl NewsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<News>> {
        sqlx::query_as::<_, News>(&format!(
            "SELECT {} FROM news ORDER BY publication_date DESC, id DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list news: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: i64) -> Result<News> {
        sqlx::query_as::<_, News>(&format!("SELECT {} FROM news WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get news {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::not_found("News", id))
    }

    pub async fn create(&self, dto: CreateNewsDto) -> Result<i64> {
        let publication_date = dto
            .publication_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let result = sqlx::query(
            "INSERT INTO news (title, slug, body, image, publication_date, company_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&dto.title)
        .bind(&dto.slug)
        .bind(&dto.body)
        .bind(&dto.image)
        .bind(publication_date)
        .bind(dto.company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert news: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("News created: id={}, slug={}", id, dto.slug);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateNewsDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query(
            "UPDATE news SET title = ?, slug = ?, body = ?, image = ?, publication_date = ?, \
             company_id = ? WHERE id = ?",
        )
        .bind(dto.title.unwrap_or(current.title))
        .bind(dto.slug.unwrap_or(current.slug))
        .bind(dto.body.or(current.body))
        .bind(dto.image.or(current.image))
        .bind(dto.publication_date.unwrap_or(current.publication_date))
        .bind(dto.company_id.unwrap_or(current.company_id))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update news {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete news {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("News", id));
        }
        Ok(())
    }
}
