pub mod commands;
pub mod config;
pub mod http;
pub mod page;
pub mod provider;
pub mod release;
pub mod render;
pub mod runtime;
