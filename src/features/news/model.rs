use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for a news article
#[derive(Debug, Clone, FromRow)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: Option<String>,
    pub image: Option<String>,
    pub publication_date: NaiveDate,
    pub company_id: i64,
}
