use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::domain::{MenuCreateRequest, MenuProductRequest, MenuProductView, MenuView, NewMenu, NewMenuProduct, Product};
use crate::errors::{ServiceError, ValidationError};
use crate::repository::MenuStore;

/// Menu business service independent of web framework.
///
/// Holds no transaction of its own: atomicity comes from the store it is
/// built over. Every check runs before the first write, so a rejected
/// request never touches the store.
pub struct MenuService<S: MenuStore> {
    store: Arc<S>,
}

impl<S: MenuStore> MenuService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Validate and persist a menu together with its line items.
    ///
    /// # Examples
    /// ```
    /// use service::MenuService;
    /// use service::domain::{MenuCreateRequest, MenuProductRequest};
    /// use service::repository::mock::InMemoryMenuStore;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let store = Arc::new(InMemoryMenuStore::new());
    /// store.insert_menu_group(1, "Sets");
    /// store.insert_product(10, "Burger", Decimal::new(500, 2));
    /// let svc = MenuService::new(store);
    /// let req = MenuCreateRequest {
    ///     name: "Set A".into(),
    ///     price: Decimal::new(1000, 2),
    ///     menu_group_id: 1,
    ///     menu_products: vec![MenuProductRequest { product_id: 10, quantity: 2 }],
    /// };
    /// let view = tokio_test::block_on(svc.create(req)).unwrap();
    /// assert_eq!(view.menu_products[0].quantity, 2);
    /// ```
    #[instrument(skip(self, request), fields(name = %request.name, menu_group_id = request.menu_group_id, items = request.menu_products.len()))]
    pub async fn create(&self, request: MenuCreateRequest) -> Result<MenuView, ServiceError> {
        let result = self.create_validated(request).await;
        match &result {
            Ok(view) => {
                common::metrics::record_menu_created();
                info!(menu_id = view.id, price = %view.price, "menu_created");
            }
            Err(ServiceError::Validation(v)) => {
                common::metrics::record_menu_rejected(v.reason());
                warn!(reason = v.reason(), error = %v, "menu_rejected");
            }
            Err(_) => {}
        }
        result
    }

    async fn create_validated(&self, request: MenuCreateRequest) -> Result<MenuView, ServiceError> {
        validate_request_shape(&request)?;

        if !self.store.menu_group_exists(request.menu_group_id).await? {
            return Err(ValidationError::MenuGroupNotFound(request.menu_group_id).into());
        }

        let products = self.load_products(&request.menu_products).await?;
        let sum = component_sum(&request.menu_products, &products)?;
        ensure_price_within(request.price, sum)?;
        debug!(price = %request.price, sum = %sum, "menu price within component value");

        let menu = self
            .store
            .save_menu(NewMenu { name: request.name, price: request.price, menu_group_id: request.menu_group_id })
            .await?;

        let mut menu_products = Vec::with_capacity(request.menu_products.len());
        for item in &request.menu_products {
            let saved = self
                .store
                .save_menu_product(NewMenuProduct { menu_id: menu.id, product_id: item.product_id, quantity: item.quantity })
                .await?;
            menu_products.push(MenuProductView::from(&saved));
        }

        Ok(MenuView::of(menu, menu_products))
    }

    /// Look up every referenced product, in request order.
    async fn load_products(&self, items: &[MenuProductRequest]) -> Result<Vec<Product>, ServiceError> {
        let mut products = Vec::with_capacity(items.len());
        for item in items {
            let product = self
                .store
                .find_product(item.product_id)
                .await?
                .ok_or(ValidationError::ProductNotFound(item.product_id))?;
            products.push(product);
        }
        Ok(products)
    }

    /// All menus with their line items, in store order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<MenuView>, ServiceError> {
        let menus = self.store.find_all_menus().await?;
        let mut views = Vec::with_capacity(menus.len());
        for menu in menus {
            let items = self.store.find_menu_products_by_menu_id(menu.id).await?;
            views.push(MenuView::of(menu, MenuProductView::list_of(&items)));
        }
        debug!(count = views.len(), "menus_listed");
        Ok(views)
    }
}

fn validate_request_shape(request: &MenuCreateRequest) -> Result<(), ValidationError> {
    super::require_name(&request.name)?;
    super::require_price(request.price)?;
    if let Some(bad) = request.menu_products.iter().find(|i| i.quantity <= 0) {
        return Err(ValidationError::NonPositiveQuantity { product_id: bad.product_id, quantity: bad.quantity });
    }
    Ok(())
}

/// Exact `Σ price × quantity` over paired request items and products.
pub fn component_sum(items: &[MenuProductRequest], products: &[Product]) -> Result<Decimal, ValidationError> {
    items.iter().zip(products).try_fold(Decimal::ZERO, |acc, (item, product)| {
        product
            .price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|line| acc.checked_add(line))
            .ok_or(ValidationError::ComponentValueOverflow)
    })
}

/// A menu may cost at most what its products cost; cheaper is accepted.
pub fn ensure_price_within(price: Decimal, sum: Decimal) -> Result<(), ValidationError> {
    if price > sum {
        return Err(ValidationError::PriceExceedsComponentValue { price, sum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::InMemoryMenuStore;
    use crate::repository::MenuRepository;

    fn fixture() -> (Arc<InMemoryMenuStore>, MenuService<InMemoryMenuStore>) {
        let store = Arc::new(InMemoryMenuStore::new());
        store.insert_menu_group(1, "Sets");
        store.insert_product(10, "Burger", Decimal::new(500, 2));
        store.insert_product(20, "Fries", Decimal::new(250, 2));
        let svc = MenuService::new(store.clone());
        (store, svc)
    }

    fn request(price: Decimal, items: &[(i64, i64)]) -> MenuCreateRequest {
        MenuCreateRequest {
            name: "Set A".into(),
            price,
            menu_group_id: 1,
            menu_products: items
                .iter()
                .map(|&(product_id, quantity)| MenuProductRequest { product_id, quantity })
                .collect(),
        }
    }

    fn assert_nothing_written(store: &InMemoryMenuStore) {
        assert_eq!(store.menu_count(), 0);
        assert_eq!(store.menu_product_count(), 0);
    }

    #[tokio::test]
    async fn price_equal_to_component_sum_is_accepted() {
        let (store, svc) = fixture();
        let view = svc.create(request(Decimal::new(1000, 2), &[(10, 2)])).await.unwrap();

        assert_eq!(view.price, Decimal::new(1000, 2));
        assert_eq!(view.menu_group_id, 1);
        assert_eq!(view.menu_products.len(), 1);
        assert_eq!(view.menu_products[0].quantity, 2);
        assert_eq!(view.menu_products[0].menu_id, view.id);
        assert_eq!(store.menu_count(), 1);
        assert_eq!(store.menu_product_count(), 1);
    }

    #[tokio::test]
    async fn price_one_cent_over_sum_is_rejected() {
        let (store, svc) = fixture();
        let err = svc.create(request(Decimal::new(1001, 2), &[(10, 2)])).await.unwrap_err();
        match err {
            ServiceError::Validation(ValidationError::PriceExceedsComponentValue { price, sum }) => {
                assert_eq!(price, Decimal::new(1001, 2));
                assert_eq!(sum, Decimal::new(1000, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_nothing_written(&store);
    }

    #[tokio::test]
    async fn price_below_sum_is_accepted() {
        let (_, svc) = fixture();
        let view = svc.create(request(Decimal::new(100, 2), &[(10, 1), (20, 1)])).await.unwrap();
        assert_eq!(view.price, Decimal::new(100, 2));
    }

    #[tokio::test]
    async fn unknown_menu_group_is_rejected() {
        let (store, svc) = fixture();
        let mut req = request(Decimal::new(500, 2), &[(10, 1)]);
        req.menu_group_id = 99;
        let err = svc.create(req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::MenuGroupNotFound(99))));
        assert_nothing_written(&store);
    }

    #[tokio::test]
    async fn unknown_product_is_rejected() {
        let (store, svc) = fixture();
        let err = svc.create(request(Decimal::new(500, 2), &[(10, 1), (404, 1)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::ProductNotFound(404))));
        assert_nothing_written(&store);
    }

    #[tokio::test]
    async fn menu_group_is_checked_before_products() {
        let (_, svc) = fixture();
        let mut req = request(Decimal::new(500, 2), &[(404, 1)]);
        req.menu_group_id = 99;
        let err = svc.create(req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::MenuGroupNotFound(99))));
    }

    #[tokio::test]
    async fn malformed_requests_are_rejected_before_lookups() {
        let (store, svc) = fixture();

        let mut blank = request(Decimal::ONE, &[(10, 1)]);
        blank.name = "  ".into();
        assert!(matches!(
            svc.create(blank).await.unwrap_err(),
            ServiceError::Validation(ValidationError::BlankName)
        ));

        assert!(matches!(
            svc.create(request(Decimal::new(-1, 0), &[(10, 1)])).await.unwrap_err(),
            ServiceError::Validation(ValidationError::NegativePrice(_))
        ));

        assert!(matches!(
            svc.create(request(Decimal::ONE, &[(10, 1), (20, 0)])).await.unwrap_err(),
            ServiceError::Validation(ValidationError::NonPositiveQuantity { product_id: 20, quantity: 0 })
        ));
        assert_nothing_written(&store);
    }

    #[tokio::test]
    async fn price_with_sub_cent_digits_is_rejected_before_lookups() {
        let (store, svc) = fixture();
        // would pass the component check as 9.999 but be stored as 10.00
        let err = svc.create(request(Decimal::new(9_999, 3), &[(10, 2)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::PriceOutOfRange(_))));

        let mut huge = request(Decimal::from(100_000_000_000_000_000u64), &[(10, 1)]);
        huge.menu_group_id = 99;
        let err = svc.create(huge).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::PriceOutOfRange(_))));
        assert_nothing_written(&store);
    }

    #[tokio::test]
    async fn line_items_keep_submission_order() {
        let (store, svc) = fixture();
        let view = svc.create(request(Decimal::new(1000, 2), &[(20, 2), (10, 1)])).await.unwrap();
        let ids: Vec<i64> = view.menu_products.iter().map(|v| v.product_id).collect();
        assert_eq!(ids, vec![20, 10]);
        assert!(view.menu_products.iter().all(|v| v.menu_id == view.id));
        assert_eq!(store.menu_product_count(), 2);
    }

    #[tokio::test]
    async fn repeated_product_counts_once_per_entry() {
        let (store, svc) = fixture();
        let view = svc.create(request(Decimal::new(1500, 2), &[(10, 1), (10, 2)])).await.unwrap();
        assert_eq!(view.menu_products.len(), 2);
        assert_eq!(store.menu_product_count(), 2);

        let err = svc.create(request(Decimal::new(1501, 2), &[(10, 1), (10, 2)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::PriceExceedsComponentValue { .. })));
    }

    #[tokio::test]
    async fn menu_without_items_must_be_free() {
        let (_, svc) = fixture();
        assert!(svc.create(request(Decimal::ZERO, &[])).await.is_ok());
        let err = svc.create(request(Decimal::ONE, &[])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::PriceExceedsComponentValue { .. })));
    }

    #[tokio::test]
    async fn list_returns_each_menu_with_its_own_items() {
        let (store, svc) = fixture();
        let m1 = svc.create(request(Decimal::new(500, 2), &[(10, 1)])).await.unwrap();
        let m2 = svc.create(request(Decimal::new(750, 2), &[(10, 1), (20, 1)])).await.unwrap();

        let listed = svc.list().await.unwrap();
        assert_eq!(listed, vec![m1, m2]);
        assert_eq!(store.find_all_menus().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let (_, svc) = fixture();
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[test]
    fn component_sum_is_exact() {
        let items = vec![
            MenuProductRequest { product_id: 1, quantity: 3 },
            MenuProductRequest { product_id: 2, quantity: 1 },
        ];
        let products = vec![
            Product { id: 1, name: "a".into(), price: Decimal::new(10, 2) },
            Product { id: 2, name: "b".into(), price: Decimal::new(20, 2) },
        ];
        // 0.1 * 3 + 0.2 would drift in binary floating point
        assert_eq!(component_sum(&items, &products).unwrap(), Decimal::new(50, 2));
    }

    #[test]
    fn component_sum_reports_overflow() {
        let items = vec![MenuProductRequest { product_id: 1, quantity: i64::MAX }];
        let products = vec![Product { id: 1, name: "a".into(), price: Decimal::MAX }];
        assert_eq!(component_sum(&items, &products), Err(ValidationError::ComponentValueOverflow));
    }

    #[test]
    fn ensure_price_within_allows_equal_and_lower() {
        let sum = Decimal::new(1000, 2);
        assert!(ensure_price_within(Decimal::new(1000, 2), sum).is_ok());
        assert!(ensure_price_within(Decimal::new(999, 2), sum).is_ok());
        assert!(ensure_price_within(Decimal::new(1001, 2), sum).is_err());
    }
}
