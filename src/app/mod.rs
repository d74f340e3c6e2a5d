mod app;
mod input;
mod screen;

pub use app::StoreApp;
