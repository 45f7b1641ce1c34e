use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::companies::model::Company;

/// Partial projection used by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyListDto {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Company> for CompanyListDto {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
        }
    }
}

/// Full projection used by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetailDto {
    pub id: i64,
    pub name: String,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub map_coordinates: Option<String>,
}

impl From<Company> for CompanyDetailDto {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            mission: c.mission,
            vision: c.vision,
            phone: c.phone,
            email: c.email,
            address: c.address,
            map_coordinates: c.map_coordinates,
        }
    }
}

/// Request DTO for creating a company
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCompanyDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub map_coordinates: Option<String>,
}

/// Request DTO for partially updating a company. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCompanyDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub map_coordinates: Option<String>,
}
