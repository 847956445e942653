use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::menu_product::Entity")]
    MenuProduct,
}

impl Related<crate::menu_product::Entity> for Entity {
    fn to() -> RelationDef { Relation::MenuProduct.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price(price: Decimal) -> Result<(), errors::ModelError> {
    if price < Decimal::ZERO {
        return Err(errors::ModelError::Validation("price must not be negative".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, price: Decimal) -> Result<Model, errors::ModelError> {
    crate::menu_group::validate_name(name)?;
    validate_price(price)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
