pub mod menu_groups;
pub mod menus;
pub mod products;

use axum::{http::StatusCode, routing::get, Json, Router};
use sea_orm::DatabaseTransaction;
use service::errors::ServiceError;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{error, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (StatusCode, String) {
    common::metrics::render()
}

/// Commit on success, roll back on failure; the service error wins over a rollback error.
pub(crate) async fn finish<T>(txn: DatabaseTransaction, result: Result<T, ServiceError>) -> Result<T, JsonApiError> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(JsonApiError::db)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                error!(err = %rb, "rollback failed");
            }
            Err(e.into())
        }
    }
}

/// Build the full application router: health, metrics, API docs and the catalog routes
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/menu-groups", get(menu_groups::list).post(menu_groups::create))
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/menus", get(menus::list).post(menus::create));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
