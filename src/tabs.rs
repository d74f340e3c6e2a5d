pub mod controller;
pub mod pager;
pub mod types;

pub use controller::TabSelectionController;
pub use types::{STORE_TABS, TabItem};
