mod bin_service;
mod pickup_service;
mod stats_service;

pub use bin_service::*;
pub use pickup_service::*;
pub use stats_service::*;
