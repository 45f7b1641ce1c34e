use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::newsletter::dtos::{
    CreateNewsletterSubscriberDto, UpdateNewsletterSubscriberDto,
};
use crate::features::newsletter::model::NewsletterSubscriber;

const COLUMNS: &str = "id, email, name, created_at";

/// Service for newsletter subscriber storage
pub struct NewsletterService {
    pool: SqlitePool,
}

impl NewsletterService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a subscription from the public form.
    pub async fn create(&self, dto: CreateNewsletterSubscriberDto) -> Result<i64> {
        let result =
            sqlx::query("INSERT INTO newsletter_subscribers (email, name) VALUES (?, ?)")
                .bind(&dto.email)
                .bind(&dto.name)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert subscriber: {:?}", e);
                    AppError::Database(e)
                })?;

        let id = result.last_insert_rowid();
        tracing::info!("Newsletter subscriber added: id={}", id);
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<NewsletterSubscriber>> {
        sqlx::query_as::<_, NewsletterSubscriber>(&format!(
            "SELECT {} FROM newsletter_subscribers ORDER BY created_at DESC, id DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list subscribers: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: i64) -> Result<NewsletterSubscriber> {
        sqlx::query_as::<_, NewsletterSubscriber>(&format!(
            "SELECT {} FROM newsletter_subscribers WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get subscriber {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::not_found("NewsletterSubscriber", id))
    }

    pub async fn update(&self, id: i64, dto: UpdateNewsletterSubscriberDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query("UPDATE newsletter_subscribers SET email = ?, name = ? WHERE id = ?")
            .bind(dto.email.unwrap_or(current.email))
            .bind(dto.name.or(current.name))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update subscriber {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM newsletter_subscribers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete subscriber {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("NewsletterSubscriber", id));
        }
        Ok(())
    }
}
