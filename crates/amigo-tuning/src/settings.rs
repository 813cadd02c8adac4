//! Controller selector and tuned controller settings.

use std::fmt;
use std::str::FromStr;

use amigo_core::{Real, Time, s};
use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Controller structure to tune for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControllerType {
    #[default]
    #[serde(rename = "PI")]
    Pi,
    #[serde(rename = "PID")]
    Pid,
}

impl ControllerType {
    pub const ALL: [ControllerType; 2] = [ControllerType::Pi, ControllerType::Pid];

    pub fn label(&self) -> &'static str {
        match self {
            ControllerType::Pi => "PI",
            ControllerType::Pid => "PID",
        }
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ControllerType {
    type Err = TuningError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        ControllerType::ALL
            .into_iter()
            .find(|ty| ty.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TuningError::UnknownControllerType {
                name: input.to_string(),
            })
    }
}

/// Tuned controller settings in ideal (ISA) form.
///
/// `u = Kc (e + 1/τ_I ∫e dt + τ_D de/dt)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ControllerSettings {
    #[serde(rename = "PI")]
    Pi { kc: Real, tau_i: Real },
    #[serde(rename = "PID")]
    Pid { kc: Real, tau_i: Real, tau_d: Real },
}

impl ControllerSettings {
    pub fn controller_type(&self) -> ControllerType {
        match self {
            ControllerSettings::Pi { .. } => ControllerType::Pi,
            ControllerSettings::Pid { .. } => ControllerType::Pid,
        }
    }

    /// Proportional gain `Kc`.
    pub fn kc(&self) -> Real {
        match *self {
            ControllerSettings::Pi { kc, .. } | ControllerSettings::Pid { kc, .. } => kc,
        }
    }

    /// Integral time `τ_I`.
    pub fn tau_i(&self) -> Real {
        match *self {
            ControllerSettings::Pi { tau_i, .. } | ControllerSettings::Pid { tau_i, .. } => tau_i,
        }
    }

    /// Derivative time `τ_D`; `None` for PI.
    pub fn tau_d(&self) -> Option<Real> {
        match *self {
            ControllerSettings::Pi { .. } => None,
            ControllerSettings::Pid { tau_d, .. } => Some(tau_d),
        }
    }

    pub fn tau_i_time(&self) -> Time {
        s(self.tau_i())
    }

    pub fn tau_d_time(&self) -> Option<Time> {
        self.tau_d().map(s)
    }

    /// Equivalent parallel-form gains `(kp, ki, kd)`.
    ///
    /// `ki = Kc / τ_I`, `kd = Kc · τ_D` (zero for PI).
    pub fn parallel_gains(&self) -> (Real, Real, Real) {
        let kc = self.kc();
        let ki = kc / self.tau_i();
        let kd = kc * self.tau_d().unwrap_or(0.0);
        (kc, ki, kd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selector_case_insensitively() {
        assert_eq!("PI".parse::<ControllerType>().unwrap(), ControllerType::Pi);
        assert_eq!("pid".parse::<ControllerType>().unwrap(), ControllerType::Pid);
        assert_eq!(" Pid ".parse::<ControllerType>().unwrap(), ControllerType::Pid);
    }

    #[test]
    fn rejects_unknown_selector() {
        for bad in ["P", "PD", "", "PIDD", "lambda"] {
            let err = bad.parse::<ControllerType>().unwrap_err();
            assert!(matches!(err, TuningError::UnknownControllerType { .. }));
        }
    }

    #[test]
    fn default_selector_is_pi() {
        assert_eq!(ControllerType::default(), ControllerType::Pi);
    }

    #[test]
    fn selector_serializes_as_label() {
        let json = serde_json::to_string(&ControllerType::Pid).unwrap();
        assert_eq!(json, "\"PID\"");
        let back: ControllerType = serde_json::from_str("\"PI\"").unwrap();
        assert_eq!(back, ControllerType::Pi);
        assert!(serde_json::from_str::<ControllerType>("\"PD\"").is_err());
    }

    #[test]
    fn pi_has_no_derivative_time() {
        let pi = ControllerSettings::Pi {
            kc: 2.0,
            tau_i: 4.0,
        };
        assert_eq!(pi.tau_d(), None);
        assert_eq!(pi.tau_d_time(), None);
        assert_eq!(pi.controller_type(), ControllerType::Pi);
        assert_eq!(pi.parallel_gains(), (2.0, 0.5, 0.0));
    }

    #[test]
    fn settings_serialize_with_type_tag() {
        let pid = ControllerSettings::Pid {
            kc: 4.7,
            tau_i: 4.2,
            tau_d: 0.5,
        };
        let json = serde_json::to_value(pid).unwrap();
        assert_eq!(json["type"], "PID");
        assert_eq!(json["kc"], 4.7);
        assert_eq!(json["tau_d"], 0.5);

        let pi = ControllerSettings::Pi { kc: 1.0, tau_i: 2.0 };
        let json = serde_json::to_value(pi).unwrap();
        assert_eq!(json["type"], "PI");
        assert!(json.get("tau_d").is_none());
    }

    #[test]
    fn pid_parallel_gains() {
        let pid = ControllerSettings::Pid {
            kc: 2.0,
            tau_i: 4.0,
            tau_d: 0.25,
        };
        assert_eq!(pid.tau_d(), Some(0.25));
        assert_eq!(pid.parallel_gains(), (2.0, 0.5, 0.5));
    }
}
