mod bin_handler;
mod dto;
mod pickup_handler;
mod router;
mod stats_handler;

pub use bin_handler::*;
pub use dto::*;
pub use pickup_handler::*;
pub use router::*;
pub use stats_handler::*;
