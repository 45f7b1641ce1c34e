use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::products::model::Product;
use crate::shared::validation::SLUG_REGEX;

/// Response DTO for a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category_id: i64,
    pub brand_id: i64,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            category_id: p.category_id,
            brand_id: p.brand_id,
        }
    }
}

/// Request DTO for creating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Ordered gallery of relative image paths
    pub images: Option<Vec<String>>,
    pub category_id: i64,
    pub brand_id: i64,
}

/// Request DTO for partially updating a product. A supplied `images` list
/// replaces the gallery wholesale, order preserved.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
}
