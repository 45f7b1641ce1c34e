use sqlx::FromRow;

/// Database model for a banner
#[derive(Debug, Clone, FromRow)]
pub struct Banner {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}
