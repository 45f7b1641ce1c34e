mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::admin::handlers::AdminState;
use crate::features::admin::resources::{
    AdminUserAdmin, BannerAdmin, BrandAdmin, CategoryAdmin, CertificateAdmin, CompanyAdmin,
    ContactMessageAdmin, NewsAdmin, ProductAdmin, SubscriberAdmin,
};
use crate::features::admin::{routes as admin_routes, AdminRegistry};
use crate::features::auth::handlers::AuthState;
use crate::features::auth::{routes as auth_routes, AuthService, SessionService};
use crate::features::banners::{routes as banners_routes, BannerService};
use crate::features::brands::{routes as brands_routes, BrandService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::certificates::{routes as certificates_routes, CertificateService};
use crate::features::companies::{routes as companies_routes, CompanyService};
use crate::features::contact::{routes as contact_routes, ContactMessageService};
use crate::features::dashboard::DashboardService;
use crate::features::news::{routes as news_routes, NewsService};
use crate::features::newsletter::{routes as newsletter_routes, NewsletterService};
use crate::features::products::{routes as products_routes, ProductService};
use crate::modules::storage::DiskStore;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize auth services and seed the first admin account if configured
    let auth_service = Arc::new(AuthService::new(pool.clone()));
    let session_service = Arc::new(SessionService::new(pool.clone(), config.auth.session_ttl));
    if let (Some(username), Some(password)) = (
        config.auth.admin_username.as_deref(),
        config.auth.admin_password.as_deref(),
    ) {
        auth_service.ensure_seed_admin(username, password).await?;
    }
    tracing::info!("Auth services initialized");

    // Initialize upload storage
    let disk_store = Arc::new(DiskStore::new(config.uploads.clone()));
    disk_store.ensure_root().await?;
    tracing::info!("Upload store ready at {}", disk_store.root().display());

    // Initialize entity services
    let company_service = Arc::new(CompanyService::new(pool.clone()));
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    let brand_service = Arc::new(BrandService::new(pool.clone()));
    let product_service = Arc::new(ProductService::new(pool.clone()));
    let news_service = Arc::new(NewsService::new(pool.clone()));
    let certificate_service = Arc::new(CertificateService::new(pool.clone()));
    let banner_service = Arc::new(BannerService::new(pool.clone()));
    let contact_service = Arc::new(ContactMessageService::new(pool.clone()));
    let newsletter_service = Arc::new(NewsletterService::new(pool.clone()));
    tracing::info!("Entity services initialized");

    // Initialize Dashboard Service
    let dashboard_service = Arc::new(DashboardService::new(pool.clone()));
    tracing::info!("Dashboard service initialized");

    // Register one admin screen per entity, in menu order
    let registry = Arc::new(AdminRegistry::new(vec![
        Arc::new(CompanyAdmin::new(Arc::clone(&company_service))),
        Arc::new(ProductAdmin::new(
            Arc::clone(&product_service),
            Arc::clone(&disk_store),
        )),
        Arc::new(CategoryAdmin::new(Arc::clone(&category_service))),
        Arc::new(BrandAdmin::new(
            Arc::clone(&brand_service),
            Arc::clone(&disk_store),
        )),
        Arc::new(NewsAdmin::new(
            Arc::clone(&news_service),
            Arc::clone(&disk_store),
        )),
        Arc::new(CertificateAdmin::new(
            Arc::clone(&certificate_service),
            Arc::clone(&disk_store),
        )),
        Arc::new(BannerAdmin::new(
            Arc::clone(&banner_service),
            Arc::clone(&disk_store),
        )),
        Arc::new(ContactMessageAdmin::new(Arc::clone(&contact_service))),
        Arc::new(SubscriberAdmin::new(Arc::clone(&newsletter_service))),
        Arc::new(AdminUserAdmin::new(Arc::clone(&auth_service))),
    ]));
    tracing::info!("Admin registry initialized with {} screens", registry.nav().len());

    // Build swagger router with dynamic info
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };
    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);
    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Admin surface (session-gated)
    let admin = admin_routes::routes(
        AdminState {
            registry: Arc::clone(&registry),
            dashboard: Arc::clone(&dashboard_service),
        },
        Arc::clone(&session_service),
    );

    // Login/logout (public; the gate lives on the admin router)
    let auth = auth_routes::routes(AuthState {
        auth: Arc::clone(&auth_service),
        sessions: Arc::clone(&session_service),
    });

    // Public JSON API
    let api = Router::new()
        .merge(companies_routes::routes(company_service))
        .merge(certificates_routes::routes(certificate_service))
        .merge(brands_routes::routes(brand_service))
        .merge(categories_routes::routes(category_service))
        .merge(products_routes::routes(product_service))
        .merge(news_routes::routes(news_service))
        .merge(banners_routes::routes(banner_service))
        .merge(contact_routes::routes(contact_service))
        .merge(newsletter_routes::routes(newsletter_service));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Uploaded images, served read-only
    let static_files = Router::new().nest_service(
        config.uploads.public_prefix.as_str(),
        ServeDir::new(&config.uploads.root),
    );

    let app = Router::new()
        .merge(swagger)
        .merge(admin)
        .merge(auth)
        .merge(api)
        .merge(health_route)
        .merge(static_files)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
