//! AMIGO tuning rules for FOPTD processes.
//!
//! Both rules take a [`ProcessModel`], whose constructor guarantees every
//! parameter is finite and strictly positive. All denominators below are
//! therefore positive. Results are still checked for finiteness: a tiny `θ`
//! against a huge `τ` can overflow the gain.

use amigo_core::{Real, ensure_finite};
use tracing::debug;

use crate::error::{TuningError, TuningResult};
use crate::model::ProcessModel;
use crate::settings::{ControllerSettings, ControllerType};

fn finite_result(value: Real, what: &'static str) -> TuningResult<Real> {
    ensure_finite(value, what).map_err(|_| TuningError::NonFiniteResult { what, value })
}

/// AMIGO PI rule. Returns `(Kc, τ_I)`.
///
/// ```text
/// Kc  = 0.15/K + (0.35 − θτ/(θ+τ)²) · τ/(Kθ)
/// τ_I = 0.35θ + 13θτ² / (τ² + 12θτ + 7θ²)
/// ```
///
/// Evaluated in ratio form so intermediate products do not overflow while
/// the result still fits in an `f64`.
pub fn compute_pi(model: &ProcessModel) -> TuningResult<(Real, Real)> {
    let (k, tau, theta) = (model.gain(), model.tau(), model.theta());

    // θτ/(θ+τ)² = θ/(θ+τ) · τ/(θ+τ)
    let theta_share = 1.0 / (1.0 + tau / theta);
    let tau_share = 1.0 / (1.0 + theta / tau);
    let kc = 0.15 / k + (0.35 - theta_share * tau_share) * ((tau / theta) / k);

    // 13θτ²/(τ² + 12θτ + 7θ²) = 13θ / (1 + 12r + 7r²), r = θ/τ
    let r = theta / tau;
    let tau_i = 0.35 * theta + 13.0 * theta / (1.0 + 12.0 * r + 7.0 * r * r);

    Ok((finite_result(kc, "kc")?, finite_result(tau_i, "tau_i")?))
}

/// AMIGO PID rule. Returns `(Kc, τ_I, τ_D)`.
///
/// ```text
/// Kc  = (1/K) · (0.2 + 0.45·τ/θ)
/// τ_I = (0.40θ + 0.8τ) / (θ + 0.1τ)
/// τ_D = 0.50τ / (0.30 + τ)
/// ```
pub fn compute_pid(model: &ProcessModel) -> TuningResult<(Real, Real, Real)> {
    let (k, tau, theta) = (model.gain(), model.tau(), model.theta());

    let kc = (1.0 / k) * (0.2 + 0.45 * (tau / theta));
    let tau_i = (0.40 * theta + 0.8 * tau) / (theta + 0.1 * tau);
    let tau_d = 0.50 * tau / (0.30 + tau);

    Ok((
        finite_result(kc, "kc")?,
        finite_result(tau_i, "tau_i")?,
        finite_result(tau_d, "tau_d")?,
    ))
}

/// [`compute_pi`] over bare numbers, validating them first.
pub fn compute_pi_raw(gain: Real, tau: Real, theta: Real) -> TuningResult<(Real, Real)> {
    compute_pi(&ProcessModel::new(gain, tau, theta)?)
}

/// [`compute_pid`] over bare numbers, validating them first.
pub fn compute_pid_raw(gain: Real, tau: Real, theta: Real) -> TuningResult<(Real, Real, Real)> {
    compute_pid(&ProcessModel::new(gain, tau, theta)?)
}

/// Tune a controller of the selected type for `model`.
pub fn tune(model: &ProcessModel, controller: ControllerType) -> TuningResult<ControllerSettings> {
    let settings = match controller {
        ControllerType::Pi => {
            let (kc, tau_i) = compute_pi(model)?;
            ControllerSettings::Pi { kc, tau_i }
        }
        ControllerType::Pid => {
            let (kc, tau_i, tau_d) = compute_pid(model)?;
            ControllerSettings::Pid { kc, tau_i, tau_d }
        }
    };

    debug!(
        controller = %controller,
        gain = model.gain(),
        tau = model.tau(),
        theta = model.theta(),
        kc = settings.kc(),
        tau_i = settings.tau_i(),
        tau_d = ?settings.tau_d(),
        "tuned controller"
    );

    Ok(settings)
}
