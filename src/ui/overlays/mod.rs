//! Modal surfaces driven by the view orchestrator

mod cart;
mod product_detail;
mod search;

pub use cart::CartDrawer;
pub use product_detail::ProductDetailModal;
pub use search::SearchModal;
