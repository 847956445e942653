use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::domain::{Menu, MenuGroup, MenuProduct, NewMenu, NewMenuGroup, NewMenuProduct, NewProduct, Product};
use crate::errors::ServiceError;
use crate::repository::{MenuGroupRepository, MenuProductRepository, MenuRepository, ProductRepository};

/// SeaORM-backed store over any connection.
///
/// Built over a `DatabaseTransaction` it makes every write of one service call
/// part of the caller's unit of work; built over a `DatabaseConnection` each
/// statement autocommits.
pub struct SeaOrmMenuStore<'c, C: ConnectionTrait> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> SeaOrmMenuStore<'c, C> {
    pub fn new(conn: &'c C) -> Self { Self { conn } }
}

#[async_trait]
impl<'c, C: ConnectionTrait> MenuGroupRepository for SeaOrmMenuStore<'c, C> {
    async fn save_menu_group(&self, group: NewMenuGroup) -> Result<MenuGroup, ServiceError> {
        let created = models::menu_group::create(self.conn, &group.name).await?;
        Ok(created.into())
    }

    async fn menu_group_exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::menu_group::exists(self.conn, id).await?)
    }

    async fn find_all_menu_groups(&self) -> Result<Vec<MenuGroup>, ServiceError> {
        let rows = models::menu_group::Entity::find()
            .order_by_asc(models::menu_group::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait> ProductRepository for SeaOrmMenuStore<'c, C> {
    async fn save_product(&self, product: NewProduct) -> Result<Product, ServiceError> {
        let created = models::product::create(self.conn, &product.name, product.price).await?;
        Ok(created.into())
    }

    async fn find_product(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let found = models::product::Entity::find_by_id(id).one(self.conn).await?;
        Ok(found.map(Into::into))
    }

    async fn find_all_products(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = models::product::Entity::find()
            .order_by_asc(models::product::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait> MenuRepository for SeaOrmMenuStore<'c, C> {
    async fn save_menu(&self, menu: NewMenu) -> Result<Menu, ServiceError> {
        let created = models::menu::create(self.conn, &menu.name, menu.price, menu.menu_group_id).await?;
        Ok(created.into())
    }

    async fn find_all_menus(&self) -> Result<Vec<Menu>, ServiceError> {
        let rows = models::menu::list(self.conn).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait> MenuProductRepository for SeaOrmMenuStore<'c, C> {
    async fn save_menu_product(&self, item: NewMenuProduct) -> Result<MenuProduct, ServiceError> {
        let created = models::menu_product::create(self.conn, item.menu_id, item.product_id, item.quantity).await?;
        Ok(created.into())
    }

    async fn find_menu_products_by_menu_id(&self, menu_id: i64) -> Result<Vec<MenuProduct>, ServiceError> {
        let rows = models::menu_product::find_by_menu_id(self.conn, menu_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
