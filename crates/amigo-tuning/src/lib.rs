//! AMIGO controller tuning for first-order-plus-dead-time processes.
//!
//! A FOPTD process is described by its static gain `K`, time constant `τ`
//! and dead time `θ`. The AMIGO rules (Åström & Hägglund) map those three
//! numbers onto PI or PID settings in closed form.
//!
//! # Layout
//!
//! - [`model`]: validated process model
//! - [`settings`]: controller selector and resulting settings
//! - [`rules`]: the PI and PID tuning formulas
//! - [`report`]: labeled, display-formatted result table
//!
//! Every entry point takes a [`ProcessModel`], which can only be built from
//! finite, strictly positive parameters, so the formulas never see a zero
//! denominator.

pub mod error;
pub mod model;
pub mod report;
pub mod rules;
pub mod settings;

pub use error::{TuningError, TuningResult};
pub use model::ProcessModel;
pub use report::{NOT_APPLICABLE, ReportRow, TuningReport, format_value};
pub use rules::{compute_pi, compute_pi_raw, compute_pid, compute_pid_raw, tune};
pub use settings::{ControllerSettings, ControllerType};
