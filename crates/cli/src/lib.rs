pub mod args;
pub mod config;
pub mod render;
pub mod session;
