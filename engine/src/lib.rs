pub mod config;
pub mod game;
pub mod logger;
pub mod save;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
