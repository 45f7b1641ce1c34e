use sqlx::FromRow;

/// Database model for a company
#[derive(Debug, Clone, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub map_coordinates: Option<String>,
}
