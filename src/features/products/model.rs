use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for a product
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Relative path of the primary image under the static root
    pub image: Option<String>,
    /// Ordered gallery of additional image paths
    pub images: Json<Vec<String>>,
    pub category_id: i64,
    pub brand_id: i64,
}
