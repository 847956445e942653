use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use sea_orm::TransactionTrait;
use service::domain::{Product, ProductCreateRequest};
use service::repo::seaorm::SeaOrmMenuStore;
use service::ProductService;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Product>>, JsonApiError> {
    let svc = ProductService::new(Arc::new(SeaOrmMenuStore::new(&state.db)));
    let products = svc.list().await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductCreateRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error"),
        (status = 422, description = "Malformed Body"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<ProductCreateRequest>, JsonApiError>,
) -> Result<(StatusCode, Json<Product>), JsonApiError> {
    let txn = state.db.begin().await.map_err(JsonApiError::db)?;
    let result = {
        let svc = ProductService::new(Arc::new(SeaOrmMenuStore::new(&txn)));
        svc.create(input).await
    };
    let product = super::finish(txn, result).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
