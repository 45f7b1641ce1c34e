use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AdminUser;

const COLUMNS: &str = "id, username, password_hash, password_salt";

/// Service for admin account management and credential checks.
///
/// Passwords are stored as hex SHA-256 digests of a per-user random salt
/// concatenated with the password.
pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check a login form against the stored digest. `None` means the
    /// username is unknown or the password does not match; callers re-render
    /// the login view rather than surfacing an error body.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUser>> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {} FROM admin_users WHERE username = ?",
            COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up admin user: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user.filter(|u| hash_password(password, &u.password_salt) == u.password_hash))
    }

    /// Seed the first account from configuration when the table is empty.
    pub async fn ensure_seed_admin(&self, username: &str, password: &str) -> Result<()> {
        if self.count().await? > 0 {
            return Ok(());
        }

        let id = self.create_user(username, password).await?;
        tracing::info!("Seeded initial admin user: id={}, username={}", id, username);
        Ok(())
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<i64> {
        if username.trim().is_empty() {
            return Err(AppError::Validation("username is required".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }

        let salt = Uuid::new_v4().simple().to_string();
        let hash = hash_password(password, &salt);

        let result = sqlx::query(
            "INSERT INTO admin_users (username, password_hash, password_salt) VALUES (?, ?, ?)",
        )
        .bind(username.trim())
        .bind(hash)
        .bind(salt)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert admin user: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Rename and/or reset the password of an existing account. A `None`
    /// password keeps the current digest.
    pub async fn update_user(
        &self,
        id: i64,
        username: &str,
        password: Option<&str>,
    ) -> Result<()> {
        let current = self.get_user(id).await?;

        let (hash, salt) = match password {
            Some(p) if !p.is_empty() => {
                let salt = Uuid::new_v4().simple().to_string();
                (hash_password(p, &salt), salt)
            }
            _ => (current.password_hash, current.password_salt),
        };

        sqlx::query(
            "UPDATE admin_users SET username = ?, password_hash = ?, password_salt = ? \
             WHERE id = ?",
        )
        .bind(username.trim())
        .bind(hash)
        .bind(salt)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update admin user {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn get_user(&self, id: i64) -> Result<AdminUser> {
        sqlx::query_as::<_, AdminUser>(&format!("SELECT {} FROM admin_users WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get admin user {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::not_found("AdminUser", id))
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(&format!("SELECT {} FROM admin_users ORDER BY id", COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list admin users: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM admin_users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete admin user {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("AdminUser", id));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin_users")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

fn hash_password(password: &str, salt: &str) -> String {
    let digest = Sha256::digest(format!("{}{}", salt, password).as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn verify_accepts_correct_and_rejects_wrong_password() {
        let service = AuthService::new(test_pool().await);
        service.create_user("admin", "hunter2").await.unwrap();

        let user = service.verify_credentials("admin", "hunter2").await.unwrap();
        assert_eq!(user.map(|u| u.username), Some("admin".to_string()));

        assert!(service
            .verify_credentials("admin", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .verify_credentials("ghost", "hunter2")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn seed_runs_once_only() {
        let service = AuthService::new(test_pool().await);

        service.ensure_seed_admin("admin", "first").await.unwrap();
        service.ensure_seed_admin("other", "second").await.unwrap();

        assert_eq!(service.count().await.unwrap(), 1);
        assert!(service
            .verify_credentials("admin", "first")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn password_reset_invalidates_the_old_one() {
        let service = AuthService::new(test_pool().await);
        let id = service.create_user("admin", "old").await.unwrap();

        service.update_user(id, "admin", Some("new")).await.unwrap();

        assert!(service
            .verify_credentials("admin", "old")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .verify_credentials("admin", "new")
            .await
            .unwrap()
            .is_some());

        // rename without touching the password
        service.update_user(id, "root", None).await.unwrap();
        assert!(service
            .verify_credentials("root", "new")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn duplicate_usernames_are_rejected() {
        let service = AuthService::new(test_pool().await);
        service.create_user("admin", "x").await.unwrap();

        assert!(service.create_user("admin", "y").await.is_err());
    }
}
