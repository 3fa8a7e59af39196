pub mod auth;
pub mod backend;
pub mod config;
pub mod dir;
pub mod gui;
pub mod logger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
