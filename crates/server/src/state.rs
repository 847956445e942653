use sea_orm::DatabaseConnection;

/// Shared handler state; the connection is a pool handle and cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
