use std::time::Duration;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedAdmin;

/// Service for issuing and resolving admin sessions.
///
/// Tokens are opaque UUIDs persisted in `admin_sessions`; expiry is checked
/// on every resolve and expired rows are deleted lazily on contact.
pub struct SessionService {
    pool: SqlitePool,
    ttl: Duration,
}

impl SessionService {
    pub fn new(pool: SqlitePool, ttl: Duration) -> Self {
        Self { pool, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a new session for the given admin and return its token.
    pub async fn create(&self, admin_user_id: i64) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        let expires_at =
            Utc::now().naive_utc() + chrono::Duration::seconds(self.ttl.as_secs() as i64);

        sqlx::query(
            "INSERT INTO admin_sessions (token, admin_user_id, expires_at) VALUES (?, ?, ?)",
        )
        .bind(&token)
        .bind(admin_user_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create session: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Session created for admin {}", admin_user_id);
        Ok(token)
    }

    /// Resolve a token to the admin identity it belongs to. Expired or
    /// unknown tokens resolve to `None`.
    pub async fn resolve(&self, token: &str) -> Result<Option<AuthenticatedAdmin>> {
        let row = sqlx::query_as::<_, (i64, String, chrono::NaiveDateTime)>(
            "SELECT u.id, u.username, s.expires_at \
             FROM admin_sessions s JOIN admin_users u ON u.id = s.admin_user_id \
             WHERE s.token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve session: {:?}", e);
            AppError::Database(e)
        })?;

        let Some((id, username, expires_at)) = row else {
            return Ok(None);
        };

        if expires_at <= Utc::now().naive_utc() {
            self.revoke(token).await?;
            return Ok(None);
        }

        Ok(Some(AuthenticatedAdmin { id, username }))
    }

    /// Drop a session; a no-op for tokens that no longer exist.
    pub async fn revoke(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM admin_sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to revoke session: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::services::AuthService;
    use crate::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn create_resolve_revoke_cycle() {
        let pool = test_pool().await;
        let auth = AuthService::new(pool.clone());
        let sessions = SessionService::new(pool, Duration::from_secs(3600));

        let admin_id = auth.create_user("admin", "pw").await.unwrap();
        let token = sessions.create(admin_id).await.unwrap();

        let admin = sessions.resolve(&token).await.unwrap().unwrap();
        assert_eq!(admin.id, admin_id);
        assert_eq!(admin.username, "admin");

        sessions.revoke(&token).await.unwrap();
        assert!(sessions.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let sessions = SessionService::new(test_pool().await, Duration::from_secs(3600));
        assert!(sessions.resolve("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_sessions_are_dropped_on_resolve() {
        let pool = test_pool().await;
        let auth = AuthService::new(pool.clone());
        let admin_id = auth.create_user("admin", "pw").await.unwrap();

        // expired the moment it is issued
        let sessions = SessionService::new(pool.clone(), Duration::from_secs(0));
        let token = sessions.create(admin_id).await.unwrap();
        assert!(sessions.resolve(&token).await.unwrap().is_none());

        // the expired row is gone
        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_sessions")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
