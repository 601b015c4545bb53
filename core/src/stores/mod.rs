// core/src/stores/mod.rs

pub mod order_store;
pub mod product_store;

pub use order_store::OrderStore;
pub use product_store::ProductStore;
