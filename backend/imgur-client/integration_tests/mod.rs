mod client;
mod config;
mod error;
pub mod helpers;
