//! Service layer providing the point-of-sale business operations on top of models.
//! - Separates business logic from data access through repository traits.
//! - Reuses entity definitions in `models` crate for the SeaORM adapter.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod domain;
pub mod repository;
pub mod repo;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use services::menu_group_service::MenuGroupService;
pub use services::menu_service::MenuService;
pub use services::product_service::ProductService;
