pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Classification, JoinKey};
pub use structs::{MAX_METRIC_MAGNITUDE, PromoRecord, SalesRecord};
