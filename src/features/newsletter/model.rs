use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for a newsletter subscriber
#[derive(Debug, Clone, FromRow)]
pub struct NewsletterSubscriber {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: NaiveDateTime,
}
