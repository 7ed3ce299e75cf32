//! pf-core: stable foundation for processflow.
//!
//! Contains:
//! - units (uom SI types + constructors, Celsius/Kelvin helpers)
//! - numeric (Real + tolerances + float helpers)
//! - ids (string identifiers for equipment, streams and chemicals)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
