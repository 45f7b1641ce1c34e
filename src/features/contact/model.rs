use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for a contact message
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}
