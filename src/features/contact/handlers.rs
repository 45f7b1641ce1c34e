use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::CreateContactMessageDto;
use crate::features::contact::service::ContactMessageService;
use crate::shared::types::{ErrorResponse, IdResponse};

/// Submit a contact message
///
/// Public lead-capture endpoint; there is no public read side.
#[utoipa::path(
    post,
    path = "/api/contact_messages",
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Message stored", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "leads"
)]
pub async fn create_contact_message(
    State(service): State<Arc<ContactMessageService>>,
    AppJson(dto): AppJson<CreateContactMessageDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::routes;
    use crate::shared::test_helpers::test_pool;
    use axum_test::TestServer;
    use serde_json::json;

    async fn server() -> (TestServer, sqlx::SqlitePool) {
        let pool = test_pool().await;
        let service = Arc::new(ContactMessageService::new(pool.clone()));
        (TestServer::new(routes::routes(service)).unwrap(), pool)
    }

    #[tokio::test]
    async fn submission_returns_id_and_persists() {
        let (server, pool) = server().await;

        let res = server
            .post("/api/contact_messages")
            .json(&json!({
                "name": "Jo", "email": "jo@example.com",
                "message": "please call me back"
            }))
            .await;
        res.assert_status(StatusCode::CREATED);
        res.assert_json(&json!({"id": 1}));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn the_message_itself_is_required() {
        let (server, _) = server().await;

        server
            .post("/api/contact_messages")
            .json(&json!({"name": "Jo"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn no_public_read_side_exists() {
        let (server, _) = server().await;

        server
            .get("/api/contact_messages")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
