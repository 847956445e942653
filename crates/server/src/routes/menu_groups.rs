use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use sea_orm::TransactionTrait;
use service::domain::{MenuGroup, MenuGroupCreateRequest};
use service::repo::seaorm::SeaOrmMenuStore;
use service::MenuGroupService;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/menu-groups", tag = "menu-groups",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::MenuGroupDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MenuGroup>>, JsonApiError> {
    let svc = MenuGroupService::new(Arc::new(SeaOrmMenuStore::new(&state.db)));
    let groups = svc.list().await?;
    info!(count = groups.len(), "list menu groups");
    Ok(Json(groups))
}

#[utoipa::path(
    post, path = "/api/menu-groups", tag = "menu-groups",
    request_body = crate::openapi::MenuGroupCreateRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MenuGroupDoc),
        (status = 400, description = "Validation Error"),
        (status = 422, description = "Malformed Body"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<MenuGroupCreateRequest>, JsonApiError>,
) -> Result<(StatusCode, Json<MenuGroup>), JsonApiError> {
    let txn = state.db.begin().await.map_err(JsonApiError::db)?;
    let result = {
        let svc = MenuGroupService::new(Arc::new(SeaOrmMenuStore::new(&txn)));
        svc.create(input).await
    };
    let group = super::finish(txn, result).await?;
    Ok((StatusCode::CREATED, Json(group)))
}
