use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::core::middleware::admin_auth_middleware;
use crate::features::admin::handlers::{self, AdminState};
use crate::features::auth::services::SessionService;

/// Create the gated admin surface.
///
/// `/admin/login` is registered elsewhere as a public route; static segments
/// win over the `{resource}` captures here, so the gate never shadows it.
pub fn routes(state: AdminState, sessions: Arc<SessionService>) -> Router {
    Router::new()
        .route("/admin", get(handlers::dashboard))
        .route("/admin/{resource}", get(handlers::list))
        .route(
            "/admin/{resource}/new",
            get(handlers::new_form).post(handlers::create),
        )
        .route(
            "/admin/{resource}/{id}/edit",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/admin/{resource}/{id}/delete", post(handlers::delete))
        .route_layer(from_fn_with_state(sessions, admin_auth_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use sqlx::SqlitePool;

    use crate::core::config::UploadConfig;
    use crate::features::admin::handlers::AdminState;
    use crate::features::admin::resources::{
        AdminUserAdmin, BannerAdmin, BrandAdmin, CategoryAdmin, CertificateAdmin, CompanyAdmin,
        ContactMessageAdmin, NewsAdmin, ProductAdmin, SubscriberAdmin,
    };
    use crate::features::admin::AdminRegistry;
    use crate::features::auth::{AuthService, SessionService};
    use crate::features::banners::BannerService;
    use crate::features::brands::BrandService;
    use crate::features::categories::CategoryService;
    use crate::features::certificates::CertificateService;
    use crate::features::companies::CompanyService;
    use crate::features::contact::ContactMessageService;
    use crate::features::dashboard::DashboardService;
    use crate::features::news::NewsService;
    use crate::features::newsletter::NewsletterService;
    use crate::features::products::ProductService;
    use crate::modules::storage::DiskStore;
    use crate::shared::test_helpers::{seed_brand, seed_company, test_pool};

    struct Harness {
        server: TestServer,
        pool: SqlitePool,
        cookie: HeaderValue,
        upload_root: std::path::PathBuf,
    }

    async fn harness() -> Harness {
        let pool = test_pool().await;

        let upload_root =
            std::env::temp_dir().join(format!("catalog-admin-test-{}", uuid::Uuid::new_v4()));
        let store = Arc::new(DiskStore::new(UploadConfig {
            root: upload_root.clone(),
            public_prefix: "/static/uploads".to_string(),
        }));
        store.ensure_root().await.unwrap();

        let auth = Arc::new(AuthService::new(pool.clone()));
        let sessions = Arc::new(SessionService::new(pool.clone(), Duration::from_secs(3600)));
        let admin_id = auth.create_user("admin", "pw").await.unwrap();
        let token = sessions.create(admin_id).await.unwrap();
        let cookie = HeaderValue::from_str(&format!("session={}", token)).unwrap();

        let registry = Arc::new(AdminRegistry::new(vec![
            Arc::new(CompanyAdmin::new(Arc::new(CompanyService::new(pool.clone())))),
            Arc::new(ProductAdmin::new(
                Arc::new(ProductService::new(pool.clone())),
                Arc::clone(&store),
            )),
            Arc::new(CategoryAdmin::new(Arc::new(CategoryService::new(pool.clone())))),
            Arc::new(BrandAdmin::new(
                Arc::new(BrandService::new(pool.clone())),
                Arc::clone(&store),
            )),
            Arc::new(NewsAdmin::new(
                Arc::new(NewsService::new(pool.clone())),
                Arc::clone(&store),
            )),
            Arc::new(CertificateAdmin::new(
                Arc::new(CertificateService::new(pool.clone())),
                Arc::clone(&store),
            )),
            Arc::new(BannerAdmin::new(
                Arc::new(BannerService::new(pool.clone())),
                Arc::clone(&store),
            )),
            Arc::new(ContactMessageAdmin::new(Arc::new(ContactMessageService::new(
                pool.clone(),
            )))),
            Arc::new(SubscriberAdmin::new(Arc::new(NewsletterService::new(
                pool.clone(),
            )))),
            Arc::new(AdminUserAdmin::new(Arc::clone(&auth))),
        ]));

        let state = AdminState {
            registry,
            dashboard: Arc::new(DashboardService::new(pool.clone())),
        };
        let server = TestServer::new(super::routes(state, sessions)).unwrap();

        Harness {
            server,
            pool,
            cookie,
            upload_root,
        }
    }

    #[tokio::test]
    async fn every_admin_screen_redirects_to_login_without_a_session() {
        let h = harness().await;

        for path in [
            "/admin",
            "/admin/companies",
            "/admin/products",
            "/admin/categories",
            "/admin/brands",
            "/admin/news",
            "/admin/certificates",
            "/admin/banners",
            "/admin/contact_messages",
            "/admin/newsletter_subscribers",
            "/admin/admin_users",
        ] {
            let res = h.server.get(path).await;
            res.assert_status(StatusCode::SEE_OTHER);
            assert_eq!(
                res.headers().get("location").unwrap(),
                "/admin/login",
                "path {} did not redirect to login",
                path
            );
        }
    }

    #[tokio::test]
    async fn stale_session_cookie_also_redirects() {
        let h = harness().await;

        let res = h
            .server
            .get("/admin/companies")
            .add_header(header::COOKIE, HeaderValue::from_static("session=stale"))
            .await;
        res.assert_status(StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn dashboard_shows_counts_and_is_not_in_the_nav() {
        let h = harness().await;
        seed_company(&h.pool).await;

        let res = h
            .server
            .get("/admin")
            .add_header(header::COOKIE, h.cookie.clone())
            .await;
        res.assert_status_ok();

        let html = res.text();
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Companies"));
        // nav links point at entity screens only, never the index
        assert!(!html.contains("href=\"/admin\""));
    }

    #[tokio::test]
    async fn create_edit_delete_through_the_scaffold() {
        let h = harness().await;

        let form = MultipartForm::new()
            .add_text("name", "Acme")
            .add_text("phone", "123");
        let res = h
            .server
            .post("/admin/companies/new")
            .add_header(header::COOKIE, h.cookie.clone())
            .multipart(form)
            .await;
        res.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/admin/companies");

        let list = h
            .server
            .get("/admin/companies")
            .add_header(header::COOKIE, h.cookie.clone())
            .await;
        list.assert_status_ok();
        assert!(list.text().contains("Acme"));

        let form = MultipartForm::new()
            .add_text("name", "Acme Ltd")
            .add_text("phone", "456");
        h.server
            .post("/admin/companies/1/edit")
            .add_header(header::COOKIE, h.cookie.clone())
            .multipart(form)
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let edit = h
            .server
            .get("/admin/companies/1/edit")
            .add_header(header::COOKIE, h.cookie.clone())
            .await;
        assert!(edit.text().contains("Acme Ltd"));

        h.server
            .post("/admin/companies/1/delete")
            .add_header(header::COOKIE, h.cookie.clone())
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let list = h
            .server
            .get("/admin/companies")
            .add_header(header::COOKIE, h.cookie.clone())
            .await;
        assert!(!list.text().contains("Acme"));
    }

    #[tokio::test]
    async fn missing_required_field_rerenders_the_form() {
        let h = harness().await;

        let form = MultipartForm::new().add_text("phone", "123");
        let res = h
            .server
            .post("/admin/companies/new")
            .add_header(header::COOKIE, h.cookie.clone())
            .multipart(form)
            .await;
        res.assert_status_ok();
        assert!(res.text().contains("name is required"));
    }

    #[tokio::test]
    async fn restricted_delete_flashes_on_the_list() {
        let h = harness().await;
        let company_id = seed_company(&h.pool).await;
        seed_brand(&h.pool, "bolt", company_id).await;

        let res = h
            .server
            .post(&format!("/admin/companies/{}/delete", company_id))
            .add_header(header::COOKIE, h.cookie.clone())
            .await;
        res.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get("location").unwrap(),
            "/admin/companies?error=in_use"
        );

        let list = h
            .server
            .get("/admin/companies?error=in_use")
            .add_header(header::COOKIE, h.cookie.clone())
            .await;
        assert!(list.text().contains("still referenced"));
    }

    #[tokio::test]
    async fn brand_logo_upload_lands_in_the_store() {
        let h = harness().await;
        let company_id = seed_company(&h.pool).await;

        let form = MultipartForm::new()
            .add_text("name", "Bolt")
            .add_text("slug", "bolt")
            .add_text("company_id", company_id.to_string())
            .add_part(
                "logo",
                Part::bytes(b"png-bytes".to_vec())
                    .file_name("logo.png")
                    .mime_type("image/png"),
            );
        h.server
            .post("/admin/brands/new")
            .add_header(header::COOKIE, h.cookie.clone())
            .multipart(form)
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let logo: Option<String> = sqlx::query_scalar("SELECT logo FROM brands WHERE slug = 'bolt'")
            .fetch_one(&h.pool)
            .await
            .unwrap();
        let logo = logo.expect("logo path stored");
        assert!(logo.starts_with("brands/"));
        assert!(h.upload_root.join(&logo).exists());

        tokio::fs::remove_dir_all(&h.upload_root).await.ok();
    }

    #[tokio::test]
    async fn unknown_screen_is_a_404() {
        let h = harness().await;

        h.server
            .get("/admin/widgets")
            .add_header(header::COOKIE, h.cookie.clone())
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
