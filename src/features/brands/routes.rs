use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::brands::handlers;
use crate::features::brands::service::BrandService;

/// Create routes for the brands feature
pub fn routes(service: Arc<BrandService>) -> Router {
    Router::new()
        .route(
            "/api/brands",
            get(handlers::list_brands).post(handlers::create_brand),
        )
        .route(
            "/api/brands/{id}",
            get(handlers::get_brand)
                .put(handlers::update_brand)
                .delete(handlers::delete_brand),
        )
        .with_state(service)
}
