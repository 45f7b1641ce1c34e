use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::newsletter::dtos::CreateNewsletterSubscriberDto;
use crate::features::newsletter::service::NewsletterService;
use crate::shared::types::{ErrorResponse, IdResponse};

/// Subscribe to the newsletter
///
/// Public lead-capture endpoint; there is no public read side.
#[utoipa::path(
    post,
    path = "/api/newsletter_subscribers",
    request_body = CreateNewsletterSubscriberDto,
    responses(
        (status = 201, description = "Subscriber stored", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Email already subscribed", body = ErrorResponse)
    ),
    tag = "leads"
)]
pub async fn create_newsletter_subscriber(
    State(service): State<Arc<NewsletterService>>,
    AppJson(dto): AppJson<CreateNewsletterSubscriberDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::newsletter::routes;
    use crate::shared::test_helpers::test_pool;
    use axum_test::TestServer;
    use serde_json::json;

    async fn server() -> TestServer {
        let service = Arc::new(NewsletterService::new(test_pool().await));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn subscribing_returns_id() {
        let server = server().await;

        let res = server
            .post("/api/newsletter_subscribers")
            .json(&json!({"email": "jo@example.com", "name": "Jo"}))
            .await;
        res.assert_status(StatusCode::CREATED);
        res.assert_json(&json!({"id": 1}));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let server = server().await;

        server
            .post("/api/newsletter_subscribers")
            .json(&json!({"email": "jo@example.com"}))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .post("/api/newsletter_subscribers")
            .json(&json!({"email": "jo@example.com"}))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let server = server().await;

        server
            .post("/api/newsletter_subscribers")
            .json(&json!({"email": "not-an-email"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
