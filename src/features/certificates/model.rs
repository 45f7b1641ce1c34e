use sqlx::FromRow;

/// Database model for a certificate
#[derive(Debug, Clone, FromRow)]
pub struct Certificate {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub company_id: i64,
}
