use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::brands::model::Brand;
use crate::shared::validation::SLUG_REGEX;

/// Response DTO for a brand
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub company_id: i64,
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            id: b.id,
            name: b.name,
            slug: b.slug,
            company_id: b.company_id,
        }
    }
}

/// Request DTO for creating a brand
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateBrandDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub company_id: i64,
}

/// Request DTO for partially updating a brand
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateBrandDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub company_id: Option<i64>,
}
