pub mod errors;
pub mod db;
pub mod menu_group;
pub mod product;
pub mod menu;
pub mod menu_product;

#[cfg(test)]
mod tests;
