mod api;
mod config;
mod db;
mod models;
mod schema;
mod state;
mod store;
mod telemetry;
mod user;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use larder_core::{BookmarkStore, MemoryBookmarkStore, SpoonacularClient};
use state::{AppContext, AppState};
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

fn build_router(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/bookmarks", api::bookmarks::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi()
            .to_pretty_json()
            .expect("Failed to serialize OpenAPI spec");
        println!("{}", spec);
        return;
    }

    telemetry::init_telemetry();

    let config = config::ServerConfig::from_env().expect("Invalid configuration");

    let catalog =
        SpoonacularClient::from_config(&config.catalog).expect("Failed to build catalog client");
    if !catalog.is_configured() {
        tracing::warn!(
            "{} not set, catalog searches will come back degraded",
            larder_core::catalog::API_KEY_ENV
        );
    }

    let bookmarks: Arc<dyn BookmarkStore> = match &config.database_url {
        Some(database_url) => {
            let pool = db::create_pool(database_url).expect("Failed to set up bookmark database");
            Arc::new(store::PgBookmarkStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, bookmarks are kept in memory only");
            Arc::new(MemoryBookmarkStore::new())
        }
    };

    let state: AppState = Arc::new(AppContext {
        catalog: Arc::new(catalog),
        bookmarks,
        default_user_id: config.default_user_id.clone(),
    });

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    match listener.local_addr() {
        Ok(addr) => {
            tracing::info!("Server listening on {}", addr);
            tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
        }
        Err(e) => tracing::warn!("Could not read listen address: {}", e),
    }

    axum::serve(listener, app).await.expect("Server error");
}
