use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::banners::handlers;
use crate::features::banners::service::BannerService;

/// Create routes for the banners feature
pub fn routes(service: Arc<BannerService>) -> Router {
    Router::new()
        .route(
            "/api/banners",
            get(handlers::list_banners).post(handlers::create_banner),
        )
        .route(
            "/api/banners/{id}",
            get(handlers::get_banner)
                .put(handlers::update_banner)
                .delete(handlers::delete_banner),
        )
        .with_state(service)
}
