pub mod app;
pub mod config;
pub mod display;
pub mod logging;
