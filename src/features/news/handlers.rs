use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::news::dtos::{CreateNewsDto, NewsResponseDto, UpdateNewsDto};
use crate::features::news::service::NewsService;
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

/// List all news articles, newest first
#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "List of news articles", body = Vec<NewsResponseDto>),
    ),
    tag = "news"
)]
pub async fn list_news(
    State(service): State<Arc<NewsService>>,
) -> Result<Json<Vec<NewsResponseDto>>> {
    let news = service.list().await?;
    Ok(Json(news.into_iter().map(Into::into).collect()))
}

/// Get a news article by id
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(("id" = i64, Path, description = "News id")),
    responses(
        (status = 200, description = "Article found", body = NewsResponseDto),
        (status = 404, description = "Article not found", body = ErrorResponse)
    ),
    tag = "news"
)]
pub async fn get_news(
    State(service): State<Arc<NewsService>>,
    Path(id): Path<i64>,
) -> Result<Json<NewsResponseDto>> {
    let article = service.get(id).await?;
    Ok(Json(article.into()))
}

/// Create a news article
#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "Article created", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse)
    ),
    tag = "news"
)]
pub async fn create_news(
    State(service): State<Arc<NewsService>>,
    AppJson(dto): AppJson<CreateNewsDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Partially update a news article
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(("id" = i64, Path, description = "News id")),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "Article updated", body = MessageResponse),
        (status = 404, description = "Article not found", body = ErrorResponse)
    ),
    tag = "news"
)]
pub async fn update_news(
    State(service): State<Arc<NewsService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateNewsDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete a news article
#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(("id" = i64, Path, description = "News id")),
    responses(
        (status = 200, description = "Article deleted", body = MessageResponse),
        (status = 404, description = "Article not found", body = ErrorResponse)
    ),
    tag = "news"
)]
pub async fn delete_news(
    State(service): State<Arc<NewsService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::news::routes;
    use crate::shared::test_helpers::{seed_company, test_pool};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> (TestServer, i64) {
        let pool = test_pool().await;
        let company_id = seed_company(&pool).await;
        let service = Arc::new(NewsService::new(pool));
        (TestServer::new(routes::routes(service)).unwrap(), company_id)
    }

    #[tokio::test]
    async fn missing_slug_is_rejected_and_nothing_persists() {
        let (server, _) = server().await;

        server
            .post("/api/news")
            .json(&json!({"title": "X"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server.get("/api/news").await.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn publication_date_defaults_to_today() {
        let (server, company_id) = server().await;

        server
            .post("/api/news")
            .json(&json!({"title": "Launch", "slug": "launch", "company_id": company_id}))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server.get("/api/news/1").await.json();
        assert_eq!(
            body["publication_date"],
            chrono::Utc::now().date_naive().to_string()
        );
    }

    #[tokio::test]
    async fn explicit_date_round_trips_through_the_projection() {
        let (server, company_id) = server().await;

        server
            .post("/api/news")
            .json(&json!({
                "title": "Launch", "slug": "launch",
                "body": "not exposed in the API",
                "publication_date": "2026-05-01", "company_id": company_id
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server.get("/api/news/1").await.json();
        assert_eq!(
            body,
            json!({
                "id": 1, "title": "Launch", "slug": "launch",
                "publication_date": "2026-05-01", "company_id": company_id
            })
        );
    }
}
