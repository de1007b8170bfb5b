pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod logging;
pub mod modules;
pub mod ui;
