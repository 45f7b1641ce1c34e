use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for an admin user
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub password_salt: String,
}

/// Database model for an admin session
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct AdminSession {
    pub token: String,
    pub admin_user_id: i64,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

/// Identity attached to a request once the session cookie resolves.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub id: i64,
    pub username: String,
}
