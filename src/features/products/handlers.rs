use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto, UpdateProductDto};
use crate::features::products::service::ProductService;
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.list().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get(id).await?;
    Ok(Json(product.into()))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::products::routes;
    use crate::shared::test_helpers::{seed_brand, seed_category, seed_company, test_pool};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> (TestServer, i64, i64) {
        let pool = test_pool().await;
        let company_id = seed_company(&pool).await;
        let category_id = seed_category(&pool, "tools").await;
        let brand_id = seed_brand(&pool, "bolt", company_id).await;
        let service = Arc::new(ProductService::new(pool));
        (
            TestServer::new(routes::routes(service)).unwrap(),
            category_id,
            brand_id,
        )
    }

    #[tokio::test]
    async fn projection_exposes_only_whitelisted_fields() {
        let (server, category_id, brand_id) = server().await;

        server
            .post("/api/products")
            .json(&json!({
                "name": "Drill", "slug": "drill", "description": "900W",
                "image": "products/drill.png",
                "category_id": category_id, "brand_id": brand_id
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server.get("/api/products/1").await.json();
        assert_eq!(
            body,
            json!({
                "id": 1, "name": "Drill", "slug": "drill",
                "category_id": category_id, "brand_id": brand_id
            })
        );
    }

    #[tokio::test]
    async fn create_requires_existing_category_and_brand() {
        let (server, category_id, _) = server().await;

        server
            .post("/api/products")
            .json(&json!({
                "name": "Drill", "slug": "drill",
                "category_id": category_id, "brand_id": 404
            }))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let (server, category_id, brand_id) = server().await;

        server
            .post("/api/products")
            .json(&json!({
                "name": "Drill", "slug": "drill",
                "category_id": category_id, "brand_id": brand_id
            }))
            .await
            .assert_status(StatusCode::CREATED);

        server.delete("/api/products/1").await.assert_status_ok();

        let res = server.get("/api/products/1").await;
        res.assert_status(StatusCode::NOT_FOUND);
        res.assert_json(&json!({"error": "Product with id 1 not found"}));
    }
}
