pub mod domain;
pub mod garde;
pub mod http;
pub mod postgres;
pub mod telemetry;

pub use domain::*;

// Re-export mocks when testing feature is enabled
#[cfg(any(test, feature = "testing"))]
pub use domain::MockBinRepository;
#[cfg(any(test, feature = "testing"))]
pub use domain::MockPickupRepository;
#[cfg(any(test, feature = "testing"))]
pub use domain::MockStatsRepository;
