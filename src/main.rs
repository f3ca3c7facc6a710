use axum::{middleware as layers, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use cat_api_rust::database::manager::DatabaseManager;
use cat_api_rust::handlers::{cats, login, users};
use cat_api_rust::middleware::{auth, coords};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = cat_api_rust::config::config();
    tracing::info!("Starting cat API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("CAT_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Cat API server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server");

    // Drain the pool before exit so in-flight queries finish cleanly
    DatabaseManager::close().await;
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(cat_routes())
        .merge(user_routes())
        // Global middleware
        .layer(layers::from_fn(coords::coords_middleware))
        .layer(layers::from_fn(auth::auth_context_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router {
    use axum::routing::post;

    Router::new().route("/auth/login", post(login::login_post))
}

fn cat_routes() -> Router {
    use axum::routing::{delete, put};

    Router::new()
        .route("/cats", get(cats::cat_list).post(cats::cat_post))
        // Literal segments must be registered alongside /cats/:id
        .route("/cats/mine", get(cats::cat_get_by_owner))
        .route("/cats/area", get(cats::cat_get_by_area))
        .route(
            "/cats/admin/:id",
            put(cats::cat_put_admin).delete(cats::cat_delete_admin),
        )
        .route(
            "/cats/:id",
            get(cats::cat_get)
                .put(cats::cat_put)
                .delete(cats::cat_delete),
        )
}

fn user_routes() -> Router {
    Router::new()
        .route(
            "/users",
            get(users::user_list)
                .post(users::user_post)
                .put(users::user_put_current)
                .delete(users::user_delete_current),
        )
        .route("/users/token", get(users::check_token))
        .route("/users/:id", get(users::user_get))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Cat API (Rust)",
        "version": version,
        "description": "Ownership-scoped CRUD for geo-tagged cat records",
        "endpoints": {
            "auth": "/auth/login (public)",
            "cats": "/cats, /cats/:id, /cats/mine, /cats/area, /cats/admin/:id",
            "users": "/users, /users/:id, /users/token",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
