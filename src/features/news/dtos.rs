use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::news::model::News;
use crate::shared::validation::SLUG_REGEX;

/// Response DTO for a news article
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsResponseDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub publication_date: NaiveDate,
    pub company_id: i64,
}

impl From<News> for NewsResponseDto {
    fn from(n: News) -> Self {
        Self {
            id: n.id,
            title: n.title,
            slug: n.slug,
            publication_date: n.publication_date,
            company_id: n.company_id,
        }
    }
}

/// Request DTO for creating a news article. When no publication date is
/// supplied the article is dated today.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateNewsDto {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: String,
    pub body: Option<String>,
    pub image: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub company_id: i64,
}

/// Request DTO for partially updating a news article
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateNewsDto {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: Option<String>,
    #[validate(regex(path = *SLUG_REGEX, message = "slug must be lowercase alphanumeric with hyphens"))]
    pub slug: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub company_id: Option<i64>,
}
