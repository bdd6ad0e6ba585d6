mod bin;
mod pickup;
mod result;
mod stats;

pub use bin::*;
pub use pickup::*;
pub use result::*;
pub use stats::*;
