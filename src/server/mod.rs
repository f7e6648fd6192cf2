//! HTTP surface for provincial connections.

pub mod extract;
pub mod handlers;
pub mod response;
pub mod state;

use std::any::Any;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

pub use state::AppState;

/// Route prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/provincial-connections";

/// Builds the router with all provincial-connection endpoints.
pub fn create_router(state: AppState) -> Router {
    let expose = state.config().expose_internal_errors;
    let routes = Router::new()
        .route(API_PREFIX, get(handlers::list_connections))
        .route(
            "/api/provincial-connections/{province}",
            get(handlers::province_connections),
        )
        .route(
            "/api/provincial-connections/check-route/{from}/{to}",
            get(handlers::check_route),
        )
        .route(
            "/api/provincial-connections/find-routes/{from}/{to}",
            get(handlers::find_routes),
        )
        .route(
            "/api/provincial-connections/shortest-route/{from}/{to}",
            get(handlers::shortest_route),
        );

    with_layers(routes, expose).with_state(state)
}

/// Panic recovery and request tracing shared by every route.
fn with_layers(routes: Router<AppState>, expose: bool) -> Router<AppState> {
    routes
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| response::panic_response(panic, expose),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serves on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Binds `config.bind_addr` and serves until Ctrl+C.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    serve_on(listener, AppState::new(config), shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
