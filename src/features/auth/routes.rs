use axum::{
    routing::{get, post},
    Router,
};

use crate::features::auth::handlers::{self, AuthState};

/// Create routes for the auth feature
///
/// All three routes are public: the gate protecting the rest of the admin
/// surface lives in `core::middleware::admin_auth_middleware`. Logout reads
/// the cookie itself so it works even for half-expired sessions.
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route(
            "/admin/login",
            get(handlers::login_page).post(handlers::login_submit),
        )
        .route("/admin/logout", post(handlers::logout))
        .with_state(state)
}
