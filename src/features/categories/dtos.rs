use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::model::ProductCategory;
use crate::shared::validation::SLUG_REGEX;

/// Response DTO for a product category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent_category_id: Option<i64>,
}

impl From<ProductCategory> for ProductCategoryResponseDto {
    fn from(c: ProductCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            parent_category_id: c.parent_category_id,
        }
    }
}

/// Request DTO for creating a product category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProductCategoryDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: String,
    pub parent_category_id: Option<i64>,
}

/// Request DTO for partially updating a product category
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductCategoryDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: Option<String>,
    pub parent_category_id: Option<i64>,
}
