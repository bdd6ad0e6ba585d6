pub mod domain;
pub mod http;
pub mod waste_api;

pub use domain::*;
pub use http::*;
pub use waste_api::*;
