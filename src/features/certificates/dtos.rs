use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::certificates::model::Certificate;

/// Response DTO for a certificate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificateResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub company_id: i64,
}

impl From<Certificate> for CertificateResponseDto {
    fn from(c: Certificate) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            company_id: c.company_id,
        }
    }
}

/// Request DTO for creating a certificate
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCertificateDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub company_id: i64,
}

/// Request DTO for partially updating a certificate
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCertificateDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub company_id: Option<i64>,
}
