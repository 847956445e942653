use async_trait::async_trait;

use crate::domain::{Menu, MenuGroup, MenuProduct, NewMenu, NewMenuGroup, NewMenuProduct, NewProduct, Product};
use crate::errors::ServiceError;

#[async_trait]
pub trait MenuGroupRepository: Send + Sync {
    async fn save_menu_group(&self, group: NewMenuGroup) -> Result<MenuGroup, ServiceError>;
    async fn menu_group_exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn find_all_menu_groups(&self) -> Result<Vec<MenuGroup>, ServiceError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save_product(&self, product: NewProduct) -> Result<Product, ServiceError>;
    async fn find_product(&self, id: i64) -> Result<Option<Product>, ServiceError>;
    async fn find_all_products(&self) -> Result<Vec<Product>, ServiceError>;
}

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Persist a menu; the returned value carries the assigned id.
    async fn save_menu(&self, menu: NewMenu) -> Result<Menu, ServiceError>;
    async fn find_all_menus(&self) -> Result<Vec<Menu>, ServiceError>;
}

#[async_trait]
pub trait MenuProductRepository: Send + Sync {
    /// Persist one line item; the returned value carries the assigned seq.
    async fn save_menu_product(&self, item: NewMenuProduct) -> Result<MenuProduct, ServiceError>;
    async fn find_menu_products_by_menu_id(&self, menu_id: i64) -> Result<Vec<MenuProduct>, ServiceError>;
}

/// Everything menu creation needs from persistence.
pub trait MenuStore: MenuGroupRepository + ProductRepository + MenuRepository + MenuProductRepository {}

impl<T> MenuStore for T where T: MenuGroupRepository + ProductRepository + MenuRepository + MenuProductRepository {}

/// Simple in-memory store for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Tables {
        menu_groups: BTreeMap<i64, MenuGroup>,
        products: BTreeMap<i64, Product>,
        menus: BTreeMap<i64, Menu>,
        menu_products: BTreeMap<i64, MenuProduct>,
        next_menu_group_id: i64,
        next_product_id: i64,
        next_menu_id: i64,
        next_seq: i64,
    }

    fn next(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }

    /// Ids start at 1 per table and are handed out in insertion order.
    #[derive(Default)]
    pub struct InMemoryMenuStore {
        tables: Mutex<Tables>,
    }

    impl InMemoryMenuStore {
        pub fn new() -> Self { Self::default() }

        /// Seed a menu group under a fixed id.
        pub fn insert_menu_group(&self, id: i64, name: &str) {
            let mut t = self.tables.lock().unwrap();
            t.next_menu_group_id = t.next_menu_group_id.max(id);
            t.menu_groups.insert(id, MenuGroup { id, name: name.to_string() });
        }

        /// Seed a product under a fixed id.
        pub fn insert_product(&self, id: i64, name: &str, price: rust_decimal::Decimal) {
            let mut t = self.tables.lock().unwrap();
            t.next_product_id = t.next_product_id.max(id);
            t.products.insert(id, Product { id, name: name.to_string(), price });
        }

        pub fn menu_count(&self) -> usize { self.tables.lock().unwrap().menus.len() }

        pub fn menu_product_count(&self) -> usize { self.tables.lock().unwrap().menu_products.len() }
    }

    #[async_trait]
    impl MenuGroupRepository for InMemoryMenuStore {
        async fn save_menu_group(&self, group: NewMenuGroup) -> Result<MenuGroup, ServiceError> {
            let mut t = self.tables.lock().unwrap();
            let id = next(&mut t.next_menu_group_id);
            let saved = MenuGroup { id, name: group.name };
            t.menu_groups.insert(id, saved.clone());
            Ok(saved)
        }

        async fn menu_group_exists(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.tables.lock().unwrap().menu_groups.contains_key(&id))
        }

        async fn find_all_menu_groups(&self) -> Result<Vec<MenuGroup>, ServiceError> {
            Ok(self.tables.lock().unwrap().menu_groups.values().cloned().collect())
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryMenuStore {
        async fn save_product(&self, product: NewProduct) -> Result<Product, ServiceError> {
            let mut t = self.tables.lock().unwrap();
            let id = next(&mut t.next_product_id);
            let saved = Product { id, name: product.name, price: product.price };
            t.products.insert(id, saved.clone());
            Ok(saved)
        }

        async fn find_product(&self, id: i64) -> Result<Option<Product>, ServiceError> {
            Ok(self.tables.lock().unwrap().products.get(&id).cloned())
        }

        async fn find_all_products(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(self.tables.lock().unwrap().products.values().cloned().collect())
        }
    }

    #[async_trait]
    impl MenuRepository for InMemoryMenuStore {
        async fn save_menu(&self, menu: NewMenu) -> Result<Menu, ServiceError> {
            let mut t = self.tables.lock().unwrap();
            let id = next(&mut t.next_menu_id);
            let saved = Menu { id, name: menu.name, price: menu.price, menu_group_id: menu.menu_group_id };
            t.menus.insert(id, saved.clone());
            Ok(saved)
        }

        async fn find_all_menus(&self) -> Result<Vec<Menu>, ServiceError> {
            Ok(self.tables.lock().unwrap().menus.values().cloned().collect())
        }
    }

    #[async_trait]
    impl MenuProductRepository for InMemoryMenuStore {
        async fn save_menu_product(&self, item: NewMenuProduct) -> Result<MenuProduct, ServiceError> {
            let mut t = self.tables.lock().unwrap();
            let seq = next(&mut t.next_seq);
            let saved = MenuProduct { seq, menu_id: item.menu_id, product_id: item.product_id, quantity: item.quantity };
            t.menu_products.insert(seq, saved.clone());
            Ok(saved)
        }

        async fn find_menu_products_by_menu_id(&self, menu_id: i64) -> Result<Vec<MenuProduct>, ServiceError> {
            let t = self.tables.lock().unwrap();
            Ok(t.menu_products.values().filter(|mp| mp.menu_id == menu_id).cloned().collect())
        }
    }

}
