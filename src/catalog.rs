pub mod operations;
pub mod types;


pub use operations::{default_storefront, load_storefront, parse_storefront};
pub use types::{Product, ProductCatalog, StoreProfile, Storefront};
