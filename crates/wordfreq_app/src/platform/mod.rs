//! Terminal front end: stdin commands in, text chart out.
mod app;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
