//! First-order-plus-dead-time process model.

use amigo_core::{Ratio, Real, Time, as_seconds, as_unitless, ensure_positive, s};
use serde::Serialize;

use crate::error::TuningResult;

/// FOPTD process `G(s) = K e^{-θs} / (τs + 1)`.
///
/// Fields are private: a `ProcessModel` only exists with finite, strictly
/// positive parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessModel {
    gain: Real,
    tau: Real,
    theta: Real,
}

impl ProcessModel {
    /// Create a validated process model.
    ///
    /// # Arguments
    ///
    /// * `gain` - Static process gain `K`
    /// * `tau` - Time constant `τ`
    /// * `theta` - Dead time `θ`, same time unit as `tau`
    ///
    /// # Errors
    ///
    /// [`TuningError::InvalidProcessParameters`](crate::TuningError::InvalidProcessParameters)
    /// if any parameter is non-finite, zero or negative. A delay-free
    /// process (`θ = 0`) is rejected: both gain formulas divide by `θ`.
    pub fn new(gain: Real, tau: Real, theta: Real) -> TuningResult<Self> {
        let gain = ensure_positive(gain, "gain")?;
        let tau = ensure_positive(tau, "tau")?;
        let theta = ensure_positive(theta, "theta")?;
        Ok(Self { gain, tau, theta })
    }

    /// Create a model from SI quantities. Times are taken in seconds.
    pub fn from_quantities(gain: Ratio, tau: Time, theta: Time) -> TuningResult<Self> {
        Self::new(as_unitless(gain), as_seconds(tau), as_seconds(theta))
    }

    pub fn gain(&self) -> Real {
        self.gain
    }

    pub fn tau(&self) -> Real {
        self.tau
    }

    pub fn theta(&self) -> Real {
        self.theta
    }

    /// Time constant as a quantity, interpreting the model in seconds.
    pub fn tau_time(&self) -> Time {
        s(self.tau)
    }

    /// Dead time as a quantity, interpreting the model in seconds.
    pub fn theta_time(&self) -> Time {
        s(self.theta)
    }

    /// Normalized dead time `θ / (θ + τ)`, in `(0, 1)`.
    ///
    /// Values near 0 are lag dominated, values near 1 delay dominated.
    pub fn normalized_dead_time(&self) -> Real {
        self.theta / (self.theta + self.tau)
    }
}

impl Default for ProcessModel {
    /// `K = 1`, `τ = 1`, `θ = 0.1`.
    fn default() -> Self {
        Self {
            gain: 1.0,
            tau: 1.0,
            theta: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TuningError;
    use amigo_core::{minutes, unitless};

    #[test]
    fn default_matches_form_defaults() {
        let m = ProcessModel::default();
        assert_eq!((m.gain(), m.tau(), m.theta()), (1.0, 1.0, 0.1));
        assert_eq!(ProcessModel::new(1.0, 1.0, 0.1).unwrap(), m);
    }

    #[test]
    fn rejects_zero_dead_time() {
        let err = ProcessModel::new(1.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            TuningError::InvalidProcessParameters { what: "theta", .. }
        ));
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert!(ProcessModel::new(0.0, 1.0, 0.1).is_err());
        assert!(ProcessModel::new(-2.0, 1.0, 0.1).is_err());
        assert!(ProcessModel::new(1.0, -1.0, 0.1).is_err());
        assert!(ProcessModel::new(1.0, f64::NAN, 0.1).is_err());
        assert!(ProcessModel::new(f64::INFINITY, 1.0, 0.1).is_err());
    }

    #[test]
    fn from_quantities_uses_seconds() {
        let m = ProcessModel::from_quantities(unitless(2.0), minutes(1.0), s(6.0)).unwrap();
        assert_eq!(m.gain(), 2.0);
        assert!((m.tau() - 60.0).abs() < 1e-12);
        assert!((m.theta() - 6.0).abs() < 1e-12);
        assert!((as_seconds(m.tau_time()) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_dead_time_in_unit_interval() {
        let m = ProcessModel::new(1.0, 3.0, 1.0).unwrap();
        assert!((m.normalized_dead_time() - 0.25).abs() < 1e-12);
    }
}
