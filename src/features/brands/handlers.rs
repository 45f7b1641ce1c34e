use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::brands::service::BrandService;
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

/// List all brands
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "List of brands", body = Vec<BrandResponseDto>),
    ),
    tag = "brands"
)]
pub async fn list_brands(
    State(service): State<Arc<BrandService>>,
) -> Result<Json<Vec<BrandResponseDto>>> {
    let brands = service.list().await?;
    Ok(Json(brands.into_iter().map(Into::into).collect()))
}

/// Get a brand by id
#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(("id" = i64, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand found", body = BrandResponseDto),
        (status = 404, description = "Brand not found", body = ErrorResponse)
    ),
    tag = "brands"
)]
pub async fn get_brand(
    State(service): State<Arc<BrandService>>,
    Path(id): Path<i64>,
) -> Result<Json<BrandResponseDto>> {
    let brand = service.get(id).await?;
    Ok(Json(brand.into()))
}

/// Create a brand
#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse)
    ),
    tag = "brands"
)]
pub async fn create_brand(
    State(service): State<Arc<BrandService>>,
    AppJson(dto): AppJson<CreateBrandDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Partially update a brand
#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    params(("id" = i64, Path, description = "Brand id")),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand updated", body = MessageResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse)
    ),
    tag = "brands"
)]
pub async fn update_brand(
    State(service): State<Arc<BrandService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateBrandDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete a brand
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(("id" = i64, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand deleted", body = MessageResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse),
        (status = 409, description = "Brand still referenced", body = ErrorResponse)
    ),
    tag = "brands"
)]
pub async fn delete_brand(
    State(service): State<Arc<BrandService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::brands::routes;
    use crate::shared::test_helpers::{seed_company, test_pool};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> (TestServer, i64) {
        let pool = test_pool().await;
        let company_id = seed_company(&pool).await;
        let service = Arc::new(BrandService::new(pool));
        (TestServer::new(routes::routes(service)).unwrap(), company_id)
    }

    #[tokio::test]
    async fn response_projection_hides_description_and_logo() {
        let (server, company_id) = server().await;

        server
            .post("/api/brands")
            .json(&json!({
                "name": "Bolt", "slug": "bolt",
                "description": "hidden in API", "company_id": company_id
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server.get("/api/brands/1").await.json();
        assert_eq!(
            body,
            json!({"id": 1, "name": "Bolt", "slug": "bolt", "company_id": company_id})
        );
    }

    #[tokio::test]
    async fn create_against_a_missing_company_conflicts() {
        let (server, _) = server().await;

        server
            .post("/api/brands")
            .json(&json!({"name": "Bolt", "slug": "bolt", "company_id": 999}))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let (server, company_id) = server().await;

        server
            .post("/api/brands")
            .json(&json!({"name": "Bolt", "slug": "bolt", "company_id": company_id}))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .put("/api/brands/1")
            .json(&json!({"name": "Bolt & Co"}))
            .await
            .assert_status_ok();

        let body: Value = server.get("/api/brands/1").await.json();
        assert_eq!(body["name"], "Bolt & Co");
        assert_eq!(body["slug"], "bolt");
    }

    #[tokio::test]
    async fn missing_brand_is_a_structured_404() {
        let (server, _) = server().await;

        let res = server.get("/api/brands/7").await;
        res.assert_status(StatusCode::NOT_FOUND);
        res.assert_json(&json!({"error": "Brand with id 7 not found"}));
    }
}
