use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, Set, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{errors, menu_group};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
    pub menu_group_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::menu_group::Entity",
        from = "Column::MenuGroupId",
        to = "crate::menu_group::Column::Id"
    )]
    MenuGroup,
    #[sea_orm(has_many = "crate::menu_product::Entity")]
    MenuProduct,
}

impl Related<crate::menu_group::Entity> for Entity {
    fn to() -> RelationDef { Relation::MenuGroup.def() }
}

impl Related<crate::menu_product::Entity> for Entity {
    fn to() -> RelationDef { Relation::MenuProduct.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a menu row. Line items are written separately through `menu_product::create`.
pub async fn create<C: ConnectionTrait>(db: &C, name: &str, price: Decimal, menu_group_id: i64) -> Result<Model, errors::ModelError> {
    menu_group::validate_name(name)?;
    crate::product::validate_price(price)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        menu_group_id: Set(menu_group_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All menus in primary-key order.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}
