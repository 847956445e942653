use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::{MenuGroup, MenuGroupCreateRequest, NewMenuGroup};
use crate::errors::ServiceError;
use crate::repository::MenuGroupRepository;

pub struct MenuGroupService<R: MenuGroupRepository> {
    repo: Arc<R>,
}

impl<R: MenuGroupRepository> MenuGroupService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: MenuGroupCreateRequest) -> Result<MenuGroup, ServiceError> {
        super::require_name(&request.name)?;
        let saved = self.repo.save_menu_group(NewMenuGroup { name: request.name }).await?;
        info!(menu_group_id = saved.id, "menu_group_created");
        Ok(saved)
    }

    pub async fn list(&self) -> Result<Vec<MenuGroup>, ServiceError> {
        self.repo.find_all_menu_groups().await
    }
}
