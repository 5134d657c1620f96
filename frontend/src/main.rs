//! Portfolio Main Entry Point

use zoon::*;

mod app;
mod dataflow;
mod debug_utils;
mod nav_menu;
mod sections;
mod theme_store;
mod viewport_tracker;
mod word_rotator;

pub fn main() {
    let app = app::PortfolioApp::new();
    let root_element = app.root();
    start_app("app", move || root_element);
}
