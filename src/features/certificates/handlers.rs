use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::certificates::dtos::{
    CertificateResponseDto, CreateCertificateDto, UpdateCertificateDto,
};
use crate::features::certificates::service::CertificateService;
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

/// List all certificates
#[utoipa::path(
    get,
    path = "/api/certificates",
    responses(
        (status = 200, description = "List of certificates", body = Vec<CertificateResponseDto>),
    ),
    tag = "certificates"
)]
pub async fn list_certificates(
    State(service): State<Arc<CertificateService>>,
) -> Result<Json<Vec<CertificateResponseDto>>> {
    let certificates = service.list().await?;
    Ok(Json(certificates.into_iter().map(Into::into).collect()))
}

/// Get a certificate by id
#[utoipa::path(
    get,
    path = "/api/certificates/{id}",
    params(("id" = i64, Path, description = "Certificate id")),
    responses(
        (status = 200, description = "Certificate found", body = CertificateResponseDto),
        (status = 404, description = "Certificate not found", body = ErrorResponse)
    ),
    tag = "certificates"
)]
pub async fn get_certificate(
    State(service): State<Arc<CertificateService>>,
    Path(id): Path<i64>,
) -> Result<Json<CertificateResponseDto>> {
    let certificate = service.get(id).await?;
    Ok(Json(certificate.into()))
}

/// Create a certificate
#[utoipa::path(
    post,
    path = "/api/certificates",
    request_body = CreateCertificateDto,
    responses(
        (status = 201, description = "Certificate created", body = IdResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "certificates"
)]
pub async fn create_certificate(
    State(service): State<Arc<CertificateService>>,
    AppJson(dto): AppJson<CreateCertificateDto>,
) -> Result<(StatusCode, Json<IdResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Partially update a certificate
#[utoipa::path(
    put,
    path = "/api/certificates/{id}",
    params(("id" = i64, Path, description = "Certificate id")),
    request_body = UpdateCertificateDto,
    responses(
        (status = 200, description = "Certificate updated", body = MessageResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse)
    ),
    tag = "certificates"
)]
pub async fn update_certificate(
    State(service): State<Arc<CertificateService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateCertificateDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete a certificate
#[utoipa::path(
    delete,
    path = "/api/certificates/{id}",
    params(("id" = i64, Path, description = "Certificate id")),
    responses(
        (status = 200, description = "Certificate deleted", body = MessageResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse)
    ),
    tag = "certificates"
)]
pub async fn delete_certificate(
    State(service): State<Arc<CertificateService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::certificates::routes;
    use crate::shared::test_helpers::{seed_company, test_pool};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> (TestServer, i64) {
        let pool = test_pool().await;
        let company_id = seed_company(&pool).await;
        let service = Arc::new(CertificateService::new(pool));
        (TestServer::new(routes::routes(service)).unwrap(), company_id)
    }

    #[tokio::test]
    async fn full_crud_cycle() {
        let (server, company_id) = server().await;

        let created = server
            .post("/api/certificates")
            .json(&json!({"name": "ISO 9001", "company_id": company_id}))
            .await;
        created.assert_status(StatusCode::CREATED);
        created.assert_json(&json!({"id": 1}));

        let body: Value = server.get("/api/certificates/1").await.json();
        assert_eq!(
            body,
            json!({"id": 1, "name": "ISO 9001", "description": null, "company_id": company_id})
        );

        server
            .put("/api/certificates/1")
            .json(&json!({"description": "quality management"}))
            .await
            .assert_status_ok();

        let body: Value = server.get("/api/certificates/1").await.json();
        assert_eq!(body["description"], "quality management");

        server
            .delete("/api/certificates/1")
            .await
            .assert_status_ok();
        server
            .get("/api/certificates/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn image_field_is_writable_but_never_projected() {
        let (server, company_id) = server().await;

        server
            .post("/api/certificates")
            .json(&json!({
                "name": "ISO 9001", "image": "certificates/iso.png",
                "company_id": company_id
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server.get("/api/certificates/1").await.json();
        assert!(body.get("image").is_none());
    }
}
