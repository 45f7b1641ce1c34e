use sqlx::FromRow;

/// Database model for a product category
#[derive(Debug, Clone, FromRow)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent_category_id: Option<i64>,
}
