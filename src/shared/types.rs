use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every create operation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    pub id: i64,
}

/// Body returned by update and delete operations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn updated() -> Self {
        Self {
            message: "Updated".to_string(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}

/// Body returned by every failure path.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
