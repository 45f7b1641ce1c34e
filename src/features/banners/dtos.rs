use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::banners::model::Banner;

/// Response DTO for a banner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BannerResponseDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl From<Banner> for BannerResponseDto {
    fn from(b: Banner) -> Self {
        Self {
            id: b.id,
            title: b.title,
            description: b.description,
            link: b.link,
        }
    }
}

/// Request DTO for creating a banner
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateBannerDto {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub link: Option<String>,
    pub image: Option<String>,
}

/// Request DTO for partially updating a banner
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateBannerDto {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub link: Option<String>,
    pub image: Option<String>,
}
