pub mod layout;
pub mod view;

pub use view::show_product_grid;
