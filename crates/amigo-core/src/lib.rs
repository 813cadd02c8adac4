//! amigo-core: numeric foundation for the AMIGO tuning workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for process time constants)
//! - numeric (Real + finiteness/positivity guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
