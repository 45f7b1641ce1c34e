use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::contact::handlers;
use crate::features::contact::service::ContactMessageService;

/// Create routes for the contact feature
///
/// POST only: the read side lives on the admin surface.
pub fn routes(service: Arc<ContactMessageService>) -> Router {
    Router::new()
        .route(
            "/api/contact_messages",
            post(handlers::create_contact_message),
        )
        .with_state(service)
}
