pub mod catalog;
pub mod config;
pub mod logging;
pub mod selection;
pub mod ui;
pub mod window;
