use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{
    CreateProductCategoryDto, ProductCategoryResponseDto, UpdateProductCategoryDto,
};
use crate::features::categories::service::CategoryService;
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

/// List all product categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<ProductCategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<ProductCategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Get a product category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = ProductCategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductCategoryResponseDto>> {
    let category = service.get(id).await?;
    Ok(Json(category.into()))
}

/// Create a product category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateProductCategoryDto,
    responses(
        (status = 201, description = "Category created", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateProductCategoryDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Partially update a product category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateProductCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = MessageResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateProductCategoryDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete a product category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category still referenced", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::routes;
    use crate::shared::test_helpers::test_pool;
    use axum_test::TestServer;
    use serde_json::json;

    async fn server() -> TestServer {
        let service = Arc::new(CategoryService::new(test_pool().await));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_returns_whitelisted_projection() {
        let server = server().await;

        let created = server
            .post("/api/categories")
            .json(&json!({"name": "Tools", "slug": "tools"}))
            .await;
        created.assert_status(StatusCode::CREATED);
        created.assert_json(&json!({"id": 1}));

        let res = server.get("/api/categories/1").await;
        res.assert_status_ok();
        res.assert_json(
            &json!({"id": 1, "name": "Tools", "slug": "tools", "parent_category_id": null}),
        );
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let server = server().await;

        server
            .post("/api/categories")
            .json(&json!({"name": "Tools", "slug": "tools"}))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .post("/api/categories")
            .json(&json!({"name": "Other Tools", "slug": "tools"}))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn child_categories_reference_their_parent() {
        let server = server().await;

        server
            .post("/api/categories")
            .json(&json!({"name": "Tools", "slug": "tools"}))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/categories")
            .json(&json!({"name": "Power Tools", "slug": "power-tools", "parent_category_id": 1}))
            .await
            .assert_status(StatusCode::CREATED);

        let res = server.get("/api/categories/2").await;
        res.assert_json(&json!({
            "id": 2, "name": "Power Tools", "slug": "power-tools", "parent_category_id": 1
        }));

        // parent cannot be removed while the child points at it
        server
            .delete("/api/categories/1")
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn invalid_slug_is_rejected() {
        let server = server().await;

        server
            .post("/api/categories")
            .json(&json!({"name": "Tools", "slug": "Not A Slug"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_required_field_is_a_structured_400() {
        let server = server().await;

        let res = server
            .post("/api/categories")
            .json(&json!({"name": "Tools"}))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);

        // nothing persisted
        let list = server.get("/api/categories").await;
        list.assert_json(&json!([]));
    }
}
