use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for subscribing to the newsletter
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateNewsletterSubscriberDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub name: Option<String>,
}

/// Request DTO for editing a subscriber (admin surface only)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateNewsletterSubscriberDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Serialized form used by admin listings; never exposed on the public API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsletterSubscriberResponseDto {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}
