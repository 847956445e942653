use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::{NewProduct, Product, ProductCreateRequest};
use crate::errors::ServiceError;
use crate::repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a product; the price must be zero or more.
    #[instrument(skip(self, request), fields(name = %request.name, price = %request.price))]
    pub async fn create(&self, request: ProductCreateRequest) -> Result<Product, ServiceError> {
        super::require_name(&request.name)?;
        super::require_price(request.price)?;
        let saved = self.repo.save_product(NewProduct { name: request.name, price: request.price }).await?;
        info!(product_id = saved.id, "product_created");
        Ok(saved)
    }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_all_products().await
    }
}
