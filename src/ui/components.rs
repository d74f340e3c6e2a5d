pub mod pager;
pub mod remote_image;
pub mod tab_strip;

pub use pager::show_pager;
pub use remote_image::show_remote_image;
pub use tab_strip::show_tab_strip;
