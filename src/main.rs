mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::clients::AuthApiClient;
use crate::features::auth::{routes as auth_routes, AuthService, JwtValidator};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::iuran::{routes as iuran_routes, IuranService};
use crate::features::keluarga::{routes as keluarga_routes, KeluargaService};
use crate::features::pengurus::{routes as pengurus_routes, AuthAdminClient, PengurusService};
use crate::features::registrasi::{routes as registrasi_routes, RegistrasiService};
use crate::features::summary::{routes as summary_routes, GeminiClient, SummaryService};
use crate::features::warga::{routes as warga_routes, WargaService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
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

    // Initialize auth: hosted-session gateway + local token validation
    let jwt_validator = JwtValidator::new(&config.auth.jwt_secret, config.auth.jwt_leeway);
    let auth_gateway = Arc::new(AuthApiClient::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(
        pool.clone(),
        auth_gateway,
        jwt_validator,
    ));
    tracing::info!("Auth service initialized");

    // Initialize registry services
    let warga_service = Arc::new(WargaService::new(pool.clone()));
    let keluarga_service = Arc::new(KeluargaService::new(pool.clone()));
    let iuran_service = Arc::new(IuranService::new(pool.clone()));
    tracing::info!("Registry services initialized");

    // Initialize registration service
    let registrasi_service = Arc::new(RegistrasiService::new(pool.clone()));
    tracing::info!("Registration service initialized");

    // Initialize pengurus service (privileged account creation)
    let auth_admin_client = Arc::new(AuthAdminClient::new(&config.auth));
    if config.auth.service_role_key.is_none() {
        tracing::warn!(
            "AUTH_SERVICE_ROLE_KEY not configured - pengurus creation is disabled"
        );
    }
    let pengurus_service = Arc::new(PengurusService::new(
        pool.clone(),
        Arc::clone(&auth_admin_client),
    ));
    tracing::info!("Pengurus service initialized");

    // Initialize dashboard service
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&warga_service),
        Arc::clone(&keluarga_service),
        Arc::clone(&iuran_service),
    ));
    tracing::info!("Dashboard service initialized");

    // Initialize AI summary service
    let gemini_client = Arc::new(GeminiClient::new(config.gemini.clone()));
    if gemini_client.is_enabled() {
        tracing::info!("AI summary enabled (model: {})", config.gemini.model);
    } else {
        tracing::warn!("GEMINI_API_KEY not configured - AI summary is disabled");
    }
    let summary_service = Arc::new(SummaryService::new(
        Arc::clone(&warga_service),
        Arc::clone(&keluarga_service),
        Arc::clone(&iuran_service),
        gemini_client,
    ));
    tracing::info!("Summary service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require a valid session)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&auth_service)))
        .merge(warga_routes::routes(warga_service))
        .merge(keluarga_routes::routes(keluarga_service))
        .merge(iuran_routes::routes(iuran_service))
        .merge(pengurus_routes::routes(pengurus_service))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(registrasi_routes::routes(registrasi_service))
        .merge(dashboard_routes::routes(dashboard_service))
        .merge(summary_routes::routes(summary_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
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

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

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
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
