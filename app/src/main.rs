mod app;
mod components;
mod platform;

use dioxus_logger::tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // A second init (hot reload) is harmless
    let _ = dioxus_logger::init(level);

    dioxus::launch(app::App);
}
