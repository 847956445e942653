use sea_orm::{entity::prelude::*, Set, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::menu::Entity",
        from = "Column::MenuId",
        to = "crate::menu::Column::Id",
        on_delete = "Cascade"
    )]
    Menu,
    #[sea_orm(
        belongs_to = "crate::product::Entity",
        from = "Column::ProductId",
        to = "crate::product::Column::Id"
    )]
    Product,
}

impl Related<crate::menu::Entity> for Entity {
    fn to() -> RelationDef { Relation::Menu.def() }
}

impl Related<crate::product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_quantity(quantity: i64) -> Result<(), errors::ModelError> {
    if quantity <= 0 {
        return Err(errors::ModelError::Validation("quantity must be positive".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, menu_id: i64, product_id: i64, quantity: i64) -> Result<Model, errors::ModelError> {
    validate_quantity(quantity)?;
    let am = ActiveModel {
        menu_id: Set(menu_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Line items of one menu, in insertion order.
pub async fn find_by_menu_id<C: ConnectionTrait>(db: &C, menu_id: i64) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::MenuId.eq(menu_id))
        .order_by_asc(Column::Seq)
        .all(db)
        .await?;
    Ok(rows)
}
