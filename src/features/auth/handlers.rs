use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;

use crate::core::error::Result;
use crate::core::middleware::session_token;
use crate::features::auth::dtos::LoginForm;
use crate::features::auth::services::{AuthService, SessionService};
use crate::shared::constants::{ADMIN_LOGIN_PATH, ADMIN_PREFIX, SESSION_COOKIE};
use crate::shared::templates;

#[derive(Clone)]
pub struct AuthState {
    pub auth: Arc<AuthService>,
    pub sessions: Arc<SessionService>,
}

/// Render the login form
pub async fn login_page() -> Result<Html<String>> {
    let html = templates::render("login.html", context! {})?;
    Ok(Html(html))
}

/// Authenticate a login form submission.
///
/// Success sets the session cookie and redirects into the admin surface;
/// failure re-renders the form with an error and sets no cookie.
pub async fn login_submit(
    State(state): State<AuthState>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let Some(user) = state
        .auth
        .verify_credentials(&form.username, &form.password)
        .await?
    else {
        tracing::info!("Failed login attempt for username={}", form.username);
        let html = templates::render(
            "login.html",
            context! { error => "Invalid username or password" },
        )?;
        return Ok(Html(html).into_response());
    };

    let token = state.sessions.create(user.id).await?;
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        state.sessions.ttl().as_secs()
    );

    let mut response = Redirect::to(ADMIN_PREFIX).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie)
            .map_err(|e| crate::core::error::AppError::Internal(e.to_string()))?,
    );
    Ok(response)
}

/// Revoke the current session and clear the cookie
pub async fn logout(State(state): State<AuthState>, headers: HeaderMap) -> Result<Response> {
    if let Some(token) = session_token(&headers) {
        state.sessions.revoke(&token).await?;
    }

    let mut response = Redirect::to(ADMIN_LOGIN_PATH).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_static("session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::routes;
    use crate::shared::test_helpers::test_pool;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::time::Duration;

    async fn server() -> TestServer {
        let pool = test_pool().await;
        let auth = Arc::new(AuthService::new(pool.clone()));
        auth.create_user("admin", "hunter2").await.unwrap();
        let sessions = Arc::new(SessionService::new(pool, Duration::from_secs(3600)));
        TestServer::new(routes::routes(AuthState { auth, sessions })).unwrap()
    }

    #[tokio::test]
    async fn login_form_is_served() {
        let server = server().await;

        let res = server.get("/admin/login").await;
        res.assert_status_ok();
        assert!(res.text().contains("password"));
    }

    #[tokio::test]
    async fn correct_credentials_set_a_cookie_and_redirect() {
        let server = server().await;

        let res = server
            .post("/admin/login")
            .form(&[("username", "admin"), ("password", "hunter2")])
            .await;
        res.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/admin");

        let cookie = res.headers().get("set-cookie").unwrap().to_str().unwrap();
        assert!(cookie.starts_with("session="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn wrong_password_rerenders_without_a_cookie() {
        let server = server().await;

        let res = server
            .post("/admin/login")
            .form(&[("username", "admin"), ("password", "wrong")])
            .await;
        res.assert_status_ok();
        assert!(res.text().contains("Invalid username or password"));
        assert!(res.headers().get("set-cookie").is_none());
    }

    #[tokio::test]
    async fn logout_clears_the_cookie() {
        let server = server().await;

        let res = server.post("/admin/logout").await;
        res.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/admin/login");

        let cookie = res.headers().get("set-cookie").unwrap().to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
    }
}
