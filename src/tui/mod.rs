mod event;
mod input;
mod runner;
pub mod ui;

pub use runner::run_tui;
