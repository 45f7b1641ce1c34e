use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::{CreateContactMessageDto, UpdateContactMessageDto};
use crate::features::contact::model::ContactMessage;

const COLUMNS: &str = "id, name, email, phone, message, created_at";

/// Service for contact message storage
pub struct ContactMessageService {
    pool: SqlitePool,
}

impl ContactMessageService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a submission from the public contact form.
    pub async fn create(&self, dto: CreateContactMessageDto) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO contact_messages (name, email, phone, message) VALUES (?, ?, ?, ?)",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert contact message: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Contact message received: id={}", id);
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<ContactMessage>> {
        sqlx::query_as::<_, ContactMessage>(&format!(
            "SELECT {} FROM contact_messages ORDER BY created_at DESC, id DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contact messages: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: i64) -> Result<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>(&format!(
            "SELECT {} FROM contact_messages WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get contact message {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::not_found("ContactMessage", id))
    }

    pub async fn update(&self, id: i64, dto: UpdateContactMessageDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query(
            "UPDATE contact_messages SET name = ?, email = ?, phone = ?, message = ? WHERE id = ?",
        )
        .bind(dto.name.or(current.name))
        .bind(dto.email.or(current.email))
        .bind(dto.phone.or(current.phone))
        .bind(dto.message.unwrap_or(current.message))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update contact message {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete contact message {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("ContactMessage", id));
        }
        Ok(())
    }
}
