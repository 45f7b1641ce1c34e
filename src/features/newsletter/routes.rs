use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::newsletter::handlers;
use crate::features::newsletter::service::NewsletterService;

/// Create routes for the newsletter feature
///
/// POST only: the read side lives on the admin surface.
pub fn routes(service: Arc<NewsletterService>) -> Router {
    Router::new()
        .route(
            "/api/newsletter_subscribers",
            post(handlers::create_newsletter_subscriber),
        )
        .with_state(service)
}
