use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use sea_orm::TransactionTrait;
use service::domain::{MenuCreateRequest, MenuView};
use service::repo::seaorm::SeaOrmMenuStore;
use service::MenuService;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/menus", tag = "menus",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::MenuViewDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MenuView>>, JsonApiError> {
    let svc = MenuService::new(Arc::new(SeaOrmMenuStore::new(&state.db)));
    let menus = svc.list().await?;
    info!(count = menus.len(), "list menus");
    Ok(Json(menus))
}

#[utoipa::path(
    post, path = "/api/menus", tag = "menus",
    request_body = crate::openapi::MenuCreateRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MenuViewDoc),
        (status = 400, description = "Validation Error"),
        (status = 422, description = "Malformed Body"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<MenuCreateRequest>, JsonApiError>,
) -> Result<(StatusCode, Json<MenuView>), JsonApiError> {
    info!(name = %input.name, price = %input.price, menu_group_id = input.menu_group_id, items = input.menu_products.len(), "menu_create_request");

    let txn = state.db.begin().await.map_err(JsonApiError::db)?;
    let result = {
        let svc = MenuService::new(Arc::new(SeaOrmMenuStore::new(&txn)));
        svc.create(input).await
    };
    let view = super::finish(txn, result).await?;
    Ok((StatusCode::CREATED, Json(view)))
}
