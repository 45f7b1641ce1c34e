use sqlx::FromRow;

/// Database model for a brand
#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Relative path of the uploaded logo under the static root
    pub logo: Option<String>,
    pub company_id: i64,
}
