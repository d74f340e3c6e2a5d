pub mod decode;
pub mod fetch;
pub mod retry;

pub use decode::decode_image;
pub use fetch::{HttpFetcher, ImageFetcher};
pub use retry::{RetryPolicy, fetch_with_retry};
