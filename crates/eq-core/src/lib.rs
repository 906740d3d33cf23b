//! eq-core: stable foundation for equilisolve.
//!
//! Contains:
//! - units (uom SI types + constructors in laboratory units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EqError, EqResult};
pub use numeric::*;
pub use units::*;
