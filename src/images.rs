pub mod cache;
pub mod operations;
pub mod types;

pub use cache::ImageCache;
pub use operations::{HttpFetcher, RetryPolicy};
pub use types::ImageState;
