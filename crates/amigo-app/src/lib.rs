//! Shared application service layer for the AMIGO tuning tools.
//!
//! Front ends go through this crate to tune single models or whole batch
//! files, so loading, validation and error reporting behave the same
//! everywhere.

pub mod batch_service;
pub mod error;
pub mod schema;
pub mod validate;

pub use batch_service::{
    BatchFormat, CaseResult, load_batch, parse_batch, run_batch, save_batch, tune_single,
};
pub use error::{AppError, AppResult};
pub use schema::{BatchFile, CaseDef, LATEST_VERSION};
pub use validate::{ValidationError, validate_batch};
