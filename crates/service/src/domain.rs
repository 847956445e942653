use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Named category a menu is filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuGroup {
    pub name: String,
}

/// Sellable item with a unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMenu {
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
}

/// One (product, quantity) line of a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuProduct {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuProduct {
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// Menu group creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroupCreateRequest {
    pub name: String,
}

/// Product creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    pub name: String,
    pub price: Decimal,
}

/// Menu creation input; line items keep their submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreateRequest {
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
    #[serde(default)]
    pub menu_products: Vec<MenuProductRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuProductRequest {
    pub product_id: i64,
    pub quantity: i64,
}

/// Flat transport shape of a persisted line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuProductView {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<&MenuProduct> for MenuProductView {
    fn from(mp: &MenuProduct) -> Self {
        Self { seq: mp.seq, menu_id: mp.menu_id, product_id: mp.product_id, quantity: mp.quantity }
    }
}

impl MenuProductView {
    pub fn list_of(items: &[MenuProduct]) -> Vec<Self> {
        items.iter().map(Self::from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuView {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
    pub menu_products: Vec<MenuProductView>,
}

impl MenuView {
    pub fn of(menu: Menu, menu_products: Vec<MenuProductView>) -> Self {
        Self {
            id: menu.id,
            name: menu.name,
            price: menu.price,
            menu_group_id: menu.menu_group_id,
            menu_products,
        }
    }
}

impl From<models::menu_group::Model> for MenuGroup {
    fn from(m: models::menu_group::Model) -> Self { Self { id: m.id, name: m.name } }
}

impl From<models::product::Model> for Product {
    fn from(m: models::product::Model) -> Self { Self { id: m.id, name: m.name, price: m.price } }
}

impl From<models::menu::Model> for Menu {
    fn from(m: models::menu::Model) -> Self {
        Self { id: m.id, name: m.name, price: m.price, menu_group_id: m.menu_group_id }
    }
}

impl From<models::menu_product::Model> for MenuProduct {
    fn from(m: models::menu_product::Model) -> Self {
        Self { seq: m.seq, menu_id: m.menu_id, product_id: m.product_id, quantity: m.quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_view_keeps_line_item_order() {
        let items = vec![
            MenuProduct { seq: 7, menu_id: 3, product_id: 20, quantity: 1 },
            MenuProduct { seq: 8, menu_id: 3, product_id: 10, quantity: 2 },
        ];
        let menu = Menu { id: 3, name: "Set".into(), price: Decimal::new(1000, 2), menu_group_id: 1 };
        let view = MenuView::of(menu, MenuProductView::list_of(&items));
        assert_eq!(view.menu_products.iter().map(|v| v.product_id).collect::<Vec<_>>(), vec![20, 10]);
        assert!(view.menu_products.iter().all(|v| v.menu_id == 3));
    }

    #[test]
    fn create_request_accepts_string_and_number_prices() {
        let a: MenuCreateRequest = serde_json::from_value(serde_json::json!({
            "name": "Set A", "price": "10.00", "menu_group_id": 1,
            "menu_products": [{"product_id": 10, "quantity": 2}]
        }))
        .unwrap();
        let b: MenuCreateRequest = serde_json::from_value(serde_json::json!({
            "name": "Set A", "price": 10, "menu_group_id": 1
        }))
        .unwrap();
        assert_eq!(a.price, Decimal::new(1000, 2));
        assert_eq!(b.price, Decimal::new(10, 0));
        assert!(b.menu_products.is_empty());
    }
}
