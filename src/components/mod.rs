pub mod app;
pub mod controls_panel;
pub mod result_overlay;
pub mod shelf_grid;
pub mod shopping_list;
pub mod time_display;

pub use app::{App, AppProps};
