pub mod menu_group_service;
pub mod menu_service;
pub mod product_service;

use rust_decimal::Decimal;

use crate::errors::ValidationError;

pub(crate) fn require_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(())
}

/// Prices are stored as `DECIMAL(19, 2)`.
const PRICE_SCALE: u32 = 2;
const PRICE_INTEGER_DIGITS: u32 = 17;

/// Non-negative and representable by the price columns without rounding.
pub(crate) fn require_price(price: Decimal) -> Result<(), ValidationError> {
    if price < Decimal::ZERO {
        return Err(ValidationError::NegativePrice(price));
    }
    // 10.000 is fine, 9.999 is not
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::PriceOutOfRange(price));
    }
    if price.trunc() >= Decimal::from(10u64.pow(PRICE_INTEGER_DIGITS)) {
        return Err(ValidationError::PriceOutOfRange(price));
    }
    Ok(())
}
