use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::companies::dtos::{
    CompanyDetailDto, CompanyListDto, CreateCompanyDto, UpdateCompanyDto,
};
use crate::features::companies::service::CompanyService;
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

/// List all companies (partial projection)
#[utoipa::path(
    get,
    path = "/api/companies",
    responses(
        (status = 200, description = "List of companies", body = Vec<CompanyListDto>),
    ),
    tag = "companies"
)]
pub async fn list_companies(
    State(service): State<Arc<CompanyService>>,
) -> Result<Json<Vec<CompanyListDto>>> {
    let companies = service.list().await?;
    Ok(Json(companies.into_iter().map(Into::into).collect()))
}

/// Get a company by id (full projection)
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = CompanyDetailDto),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    tag = "companies"
)]
pub async fn get_company(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<i64>,
) -> Result<Json<CompanyDetailDto>> {
    let company = service.get(id).await?;
    Ok(Json(company.into()))
}

/// Create a company
#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "companies"
)]
pub async fn create_company(
    State(service): State<Arc<CompanyService>>,
    AppJson(dto): AppJson<CreateCompanyDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Partially update a company
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    params(("id" = i64, Path, description = "Company id")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = MessageResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    tag = "companies"
)]
pub async fn update_company(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateCompanyDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company deleted", body = MessageResponse),
        (status = 404, description = "Company not found", body = ErrorResponse),
        (status = 409, description = "Company still referenced", body = ErrorResponse)
    ),
    tag = "companies"
)]
pub async fn delete_company(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::companies::routes;
    use crate::shared::test_helpers::{seed_brand, test_pool};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> (TestServer, sqlx::SqlitePool) {
        let pool = test_pool().await;
        let service = Arc::new(CompanyService::new(pool.clone()));
        let server = TestServer::new(routes::routes(service)).unwrap();
        (server, pool)
    }

    #[tokio::test]
    async fn create_then_list_returns_partial_projection() {
        let (server, _) = server().await;

        let created = server
            .post("/api/companies")
            .json(&json!({"name": "Acme", "email": "a@acme.com", "phone": "123"}))
            .await;
        created.assert_status(StatusCode::CREATED);
        created.assert_json(&json!({"id": 1}));

        let list = server.get("/api/companies").await;
        list.assert_status_ok();
        list.assert_json(
            &json!([{"id": 1, "name": "Acme", "email": "a@acme.com", "phone": "123"}]),
        );
    }

    #[tokio::test]
    async fn detail_carries_the_full_field_set() {
        let (server, _) = server().await;

        server
            .post("/api/companies")
            .json(&json!({"name": "Acme", "mission": "build", "address": "1 Main St"}))
            .await
            .assert_status(StatusCode::CREATED);

        let detail = server.get("/api/companies/1").await;
        detail.assert_status_ok();
        let body: Value = detail.json();
        assert_eq!(body["name"], "Acme");
        assert_eq!(body["mission"], "build");
        assert_eq!(body["address"], "1 Main St");
        assert_eq!(body["map_coordinates"], Value::Null);
    }

    #[tokio::test]
    async fn missing_company_is_a_structured_404() {
        let (server, _) = server().await;

        let res = server.get("/api/companies/42").await;
        res.assert_status(StatusCode::NOT_FOUND);
        res.assert_json(&json!({"error": "Company with id 42 not found"}));
    }

    #[tokio::test]
    async fn put_updates_only_supplied_fields() {
        let (server, _) = server().await;

        server
            .post("/api/companies")
            .json(&json!({"name": "Acme", "phone": "123"}))
            .await
            .assert_status(StatusCode::CREATED);

        let res = server
            .put("/api/companies/1")
            .json(&json!({"phone": "456"}))
            .await;
        res.assert_status_ok();
        res.assert_json(&json!({"message": "Updated"}));

        let body: Value = server.get("/api/companies/1").await.json();
        assert_eq!(body["name"], "Acme");
        assert_eq!(body["phone"], "456");
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let (server, _) = server().await;

        server
            .post("/api/companies")
            .json(&json!({"name": "Acme"}))
            .await
            .assert_status(StatusCode::CREATED);

        let res = server.delete("/api/companies/1").await;
        res.assert_status_ok();
        res.assert_json(&json!({"message": "Deleted"}));

        server
            .get("/api/companies/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_keys_are_rejected_with_400() {
        let (server, _) = server().await;

        let res = server
            .post("/api/companies")
            .json(&json!({"name": "Acme", "hq_planet": "Mars"}))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_a_referenced_company_conflicts() {
        let (server, pool) = server().await;

        let created = server
            .post("/api/companies")
            .json(&json!({"name": "Acme"}))
            .await;
        created.assert_status(StatusCode::CREATED);
        let id = created.json::<Value>()["id"].as_i64().unwrap();
        seed_brand(&pool, "acme-brand", id).await;

        let res = server.delete(&format!("/api/companies/{}", id)).await;
        res.assert_status(StatusCode::CONFLICT);

        // row must still be present
        server
            .get(&format!("/api/companies/{}", id))
            .await
            .assert_status_ok();
    }
}
