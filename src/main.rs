use axum::{
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use aurevia_api::handlers::{auth, products};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and admin credentials.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Touch the config singleton up front: a missing DATABASE_URL must kill
    // the process at startup, not on the first catalog request.
    let config = aurevia_api::config::config();
    tracing::info!("starting aurevia-api in {:?} mode", config.environment);

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("product API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .merge(admin_routes())
        .merge(product_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn admin_routes() -> Router {
    Router::new()
        .route("/api/admin/login", post(auth::login))
        .route("/api/admin/verify", get(auth::verify))
        .route("/api/admin/logout", post(auth::logout))
}

fn product_routes() -> Router {
    Router::new()
        // Public reads and protected writes share the paths; the mutating
        // handlers gate themselves via the AuthAdmin extractor.
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/:slug",
            get(products::get_by_slug)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Liveness only. Does not touch the database; the catalog endpoints run
/// the lazy bootstrap on their own.
async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({ "ok": true }))
}
