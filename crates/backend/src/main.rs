pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Отключаем логи SQL запросов, но оставляем логи приложения
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Простой middleware для логирования запросов
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use chrono::Utc;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        let status = response.status().as_u16();
        let timestamp = Utc::now();

        // Голубой для успешных ответов, коричневый для остальных
        let color_code = if (200..300).contains(&status) {
            "36"
        } else {
            "33"
        };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {} {:>6} {}",
            color_code,
            timestamp.format("%H:%M:%S"),
            duration.as_millis(),
            status,
            method,
            uri.path()
        );

        response
    }

    // Load configuration (config.toml next to the executable or embedded default)
    let config = shared::config::load_config()?;

    // Initialize database
    let db_path = shared::config::resolve_path(&config.database.path);
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    // Initialize attachment storage
    let storage_dir = shared::config::resolve_path(&config.storage.attachments_dir);
    shared::storage::initialize_storage(&storage_dir)?;

    // Apply auth system migration
    system::initialization::apply_auth_migration().await?;

    // Ensure admin user exists
    system::initialization::ensure_admin_user_exists().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // ========================================
    // BUSINESS ROUTES (JWT-protected)
    // ========================================
    let business = Router::new()
        .route(
            "/api/currency",
            get(handlers::a001_currency::list).post(handlers::a001_currency::create),
        )
        .route(
            "/api/currency/:id",
            get(handlers::a001_currency::get_by_id)
                .patch(handlers::a001_currency::update)
                .delete(handlers::a001_currency::delete),
        )
        .route(
            "/api/unit",
            get(handlers::a002_unit::list).post(handlers::a002_unit::create),
        )
        .route(
            "/api/unit/:id",
            get(handlers::a002_unit::get_by_id)
                .patch(handlers::a002_unit::update)
                .delete(handlers::a002_unit::delete),
        )
        .route(
            "/api/company",
            get(handlers::a003_company::list).post(handlers::a003_company::create),
        )
        .route(
            "/api/company/:id",
            get(handlers::a003_company::get_by_id)
                .patch(handlers::a003_company::update)
                .delete(handlers::a003_company::delete),
        )
        .route(
            "/api/purchaser",
            get(handlers::a004_purchaser::list).post(handlers::a004_purchaser::create),
        )
        .route(
            "/api/purchaser/:id",
            get(handlers::a004_purchaser::get_by_id)
                .patch(handlers::a004_purchaser::update)
                .delete(handlers::a004_purchaser::delete),
        )
        .route(
            "/api/product",
            get(handlers::a005_product::list).post(handlers::a005_product::create),
        )
        .route(
            "/api/product/:id",
            get(handlers::a005_product::get_by_id)
                .patch(handlers::a005_product::update)
                .delete(handlers::a005_product::delete),
        )
        .route(
            "/api/project",
            get(handlers::a006_project::list).post(handlers::a006_project::create),
        )
        .route(
            "/api/project/:id",
            get(handlers::a006_project::get_by_id)
                .patch(handlers::a006_project::update)
                .delete(handlers::a006_project::delete),
        )
        .route(
            "/api/contract",
            get(handlers::a007_contract::list).post(handlers::a007_contract::create),
        )
        .route(
            "/api/contract/:id",
            get(handlers::a007_contract::get_by_id)
                .patch(handlers::a007_contract::update)
                .delete(handlers::a007_contract::delete),
        )
        .route(
            "/api/contract/:id/payments-summary",
            get(handlers::a008_payment::contract_summary),
        )
        .route(
            "/api/payment",
            get(handlers::a008_payment::list).post(handlers::a008_payment::create),
        )
        .route(
            "/api/payment/:id",
            get(handlers::a008_payment::get_by_id)
                .patch(handlers::a008_payment::update)
                .delete(handlers::a008_payment::delete),
        )
        .route(
            "/api/attachment",
            get(handlers::a009_attachment::list),
        )
        .route(
            "/api/attachment/upload",
            post(handlers::a009_attachment::upload),
        )
        .route(
            "/api/attachment/:id",
            get(handlers::a009_attachment::get_by_id)
                .patch(handlers::a009_attachment::update)
                .delete(handlers::a009_attachment::delete),
        )
        .route(
            "/api/attachment/:id/download",
            get(handlers::a009_attachment::download),
        )
        .route_layer(middleware::from_fn(
            system::auth::middleware::require_auth,
        ));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .merge(business)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
