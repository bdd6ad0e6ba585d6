mod bin_repository;
mod client;
mod config;
mod pickup_repository;
mod stats_repository;

pub use bin_repository::*;
pub use client::*;
pub use config::*;
pub use pickup_repository::*;
pub use stats_repository::*;
