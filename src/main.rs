use std::rc::Rc;

mod components;
mod game;
mod model;
mod util;

use components::{App, AppProps};
use model::{Catalog, DurationBounds, ShelfLayout};

fn main() {
    util::init_console_logger(log::LevelFilter::Debug);

    let layout = ShelfLayout::default();
    let catalog = match Catalog::builtin(&layout) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("could not load the product catalog: {}", err);
            return;
        }
    };
    log::info!("catalog loaded: {} products", catalog.len());

    yew::Renderer::<App>::with_props(AppProps {
        catalog: Rc::new(catalog),
        layout,
        bounds: DurationBounds::default(),
    })
    .render();
}
