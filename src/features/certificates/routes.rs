use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::certificates::handlers;
use crate::features::certificates::service::CertificateService;

/// Create routes for the certificates feature
pub fn routes(service: Arc<CertificateService>) -> Router {
    Router::new()
        .route(
            "/api/certificates",
            get(handlers::list_certificates).post(handlers::create_certificate),
        )
        .route(
            "/api/certificates/{id}",
            get(handlers::get_certificate)
                .put(handlers::update_certificate)
                .delete(handlers::delete_certificate),
        )
        .with_state(service)
}
