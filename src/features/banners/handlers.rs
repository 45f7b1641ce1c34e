use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::banners::dtos::{BannerResponseDto, CreateBannerDto, UpdateBannerDto};
use crate::features::banners::service::BannerService;
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

/// List all banners
#[utoipa::path(
    get,
    path = "/api/banners",
    responses(
        (status = 200, description = "List of banners", body = Vec<BannerResponseDto>),
    ),
    tag = "banners"
)]
pub async fn list_banners(
    State(service): State<Arc<BannerService>>,
) -> Result<Json<Vec<BannerResponseDto>>> {
    let banners = service.list().await?;
    Ok(Json(banners.into_iter().map(Into::into).collect()))
}

/// Get a banner by id
#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    params(("id" = i64, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner found", body = BannerResponseDto),
        (status = 404, description = "Banner not found", body = ErrorResponse)
    ),
    tag = "banners"
)]
pub async fn get_banner(
    State(service): State<Arc<BannerService>>,
    Path(id): Path<i64>,
) -> Result<Json<BannerResponseDto>> {
    let banner = service.get(id).await?;
    Ok(Json(banner.into()))
}

/// Create a banner
#[utoipa::path(
    post,
    path = "/api/banners",
    request_body = CreateBannerDto,
    responses(
        (status = 201, description = "Banner created", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "banners"
)]
pub async fn create_banner(
    State(service): State<Arc<BannerService>>,
    AppJson(dto): AppJson<CreateBannerDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Partially update a banner
#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    params(("id" = i64, Path, description = "Banner id")),
    request_body = UpdateBannerDto,
    responses(
        (status = 200, description = "Banner updated", body = MessageResponse),
        (status = 404, description = "Banner not found", body = ErrorResponse)
    ),
    tag = "banners"
)]
pub async fn update_banner(
    State(service): State<Arc<BannerService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateBannerDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete a banner
#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    params(("id" = i64, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner deleted", body = MessageResponse),
        (status = 404, description = "Banner not found", body = ErrorResponse)
    ),
    tag = "banners"
)]
pub async fn delete_banner(
    State(service): State<Arc<BannerService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::banners::routes;
    use crate::shared::test_helpers::test_pool;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> TestServer {
        let service = Arc::new(BannerService::new(test_pool().await));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_projects_without_image() {
        let server = server().await;

        server
            .post("/api/banners")
            .json(&json!({
                "title": "Sale", "description": "Spring sale",
                "link": "https://example.com/sale", "image": "banners/sale.png"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server.get("/api/banners/1").await.json();
        assert_eq!(
            body,
            json!({
                "id": 1, "title": "Sale", "description": "Spring sale",
                "link": "https://example.com/sale"
            })
        );
    }

    #[tokio::test]
    async fn bad_link_is_rejected() {
        let server = server().await;

        server
            .post("/api/banners")
            .json(&json!({"title": "Sale", "link": "not a url"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_and_delete_answer_with_messages() {
        let server = server().await;

        server
            .post("/api/banners")
            .json(&json!({"title": "Sale"}))
            .await
            .assert_status(StatusCode::CREATED);

        let res = server
            .put("/api/banners/1")
            .json(&json!({"title": "Mega Sale"}))
            .await;
        res.assert_status_ok();
        res.assert_json(&json!({"message": "Updated"}));

        let res = server.delete("/api/banners/1").await;
        res.assert_status_ok();
        res.assert_json(&json!({"message": "Deleted"}));

        let res = server.delete("/api/banners/1").await;
        res.assert_status(StatusCode::NOT_FOUND);
        res.assert_json(&json!({"error": "Banner with id 1 not found"}));
    }
}
