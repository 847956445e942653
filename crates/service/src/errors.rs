use rust_decimal::Decimal;
use thiserror::Error;

/// Caller-input failures. Every variant rejects the whole operation before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be blank")]
    BlankName,
    #[error("price must not be negative: {0}")]
    NegativePrice(Decimal),
    #[error("quantity must be positive (product {product_id}: {quantity})")]
    NonPositiveQuantity { product_id: i64, quantity: i64 },
    #[error("menu group {0} not found")]
    MenuGroupNotFound(i64),
    #[error("product {0} not found")]
    ProductNotFound(i64),
    #[error("menu price {price} exceeds the sum of its products {sum}")]
    PriceExceedsComponentValue { price: Decimal, sum: Decimal },
    #[error("sum of menu products is out of range")]
    ComponentValueOverflow,
    #[error("price {0} needs at most 2 decimal places and 17 integer digits")]
    PriceOutOfRange(Decimal),
}

impl ValidationError {
    /// Short snake_case label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::BlankName => "blank_name",
            ValidationError::NegativePrice(_) => "negative_price",
            ValidationError::NonPositiveQuantity { .. } => "non_positive_quantity",
            ValidationError::MenuGroupNotFound(_) => "menu_group_not_found",
            ValidationError::ProductNotFound(_) => "product_not_found",
            ValidationError::PriceExceedsComponentValue { .. } => "price_exceeds_component_value",
            ValidationError::ComponentValueOverflow => "component_value_overflow",
            ValidationError::PriceOutOfRange(_) => "price_out_of_range",
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(v) => match v {
                ValidationError::BlankName => 1001,
                ValidationError::NegativePrice(_) => 1002,
                ValidationError::NonPositiveQuantity { .. } => 1003,
                ValidationError::MenuGroupNotFound(_) => 1004,
                ValidationError::ProductNotFound(_) => 1005,
                ValidationError::PriceExceedsComponentValue { .. } => 1006,
                ValidationError::ComponentValueOverflow => 1007,
                ValidationError::PriceOutOfRange(_) => 1008,
            },
            ServiceError::Model(models::errors::ModelError::Validation(_)) => 1100,
            ServiceError::Model(models::errors::ModelError::Db(_)) => 1200,
            ServiceError::Repository(_) => 1201,
        }
    }

    /// True when the failure was caused by the request rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_))
        )
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Repository(e.to_string()) }
}
