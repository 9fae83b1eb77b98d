use std::sync::Arc;

use backend::routes::configure_routes;
use backend::shared::config;
use backend::system::context::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::Request;
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    backend::system::tracing::initialize()?;

    let config = config::load_config()?;
    let port = config.server.port;

    // A dataset that cannot be loaded is fatal; nothing to serve without it
    let ctx = Arc::new(AppContext::initialize(config)?);

    // Simple request logging middleware
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        tracing::info!(
            "{:>4}ms | {} {} -> {}",
            start.elapsed().as_millis(),
            method,
            uri,
            response.status().as_u16()
        );
        response
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = configure_routes(ctx)
        // Built frontend (wasm bundle + index.html) served as static files
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Sales dashboard backend listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
