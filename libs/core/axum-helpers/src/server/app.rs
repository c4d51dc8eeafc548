use super::cleanup::run_cleanup;
use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Wrap the API routes with documentation and cross-cutting layers.
///
/// - `apis` is nested under `/api` (domain routers apply their own state)
/// - OpenAPI JSON at `/api-docs/openapi.json`, Swagger UI at `/swagger-ui`
/// - JSON 404 fallback, request tracing, security headers, CORS, compression
///
/// Health routes are merged by the caller afterwards so they stay outside `/api`.
pub fn create_router<T>(apis: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Bind `server_config.address()`, serve until SIGINT/SIGTERM, then run
/// `cleanup` bounded by `server_config.shutdown_timeout`.
///
/// ```ignore
/// create_production_app(router, &config.server, close_postgres(db)).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve(
        listener,
        router,
        shutdown_signal(),
        cleanup,
        server_config.shutdown_timeout,
    )
    .await
}

/// Serve on an already bound listener until `signal` completes.
///
/// In-flight requests drain before `cleanup` runs. Cleanup runs even when the
/// server itself fails.
pub async fn serve<S, F>(
    listener: TcpListener,
    router: Router,
    signal: S,
    cleanup: F,
    shutdown_timeout: Duration,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Server stopped accepting connections");
    run_cleanup(cleanup, shutdown_timeout).await;

    serve_result
}
