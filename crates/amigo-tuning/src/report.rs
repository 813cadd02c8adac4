//! Labeled result table for tuned controller settings.
//!
//! Display conventions: inputs show `K` and `τ` with 2 decimals and `θ` with
//! 3; every result value shows exactly 4 decimals. A PI controller reports
//! its derivative time as [`NOT_APPLICABLE`].

use std::fmt;

use amigo_core::Real;
use serde::Serialize;

use crate::error::TuningResult;
use crate::model::ProcessModel;
use crate::rules::tune;
use crate::settings::{ControllerSettings, ControllerType};

/// Value shown for a derivative time on a PI controller.
pub const NOT_APPLICABLE: &str = "Not applicable";

pub const LABEL_CONTROLLER: &str = "Controller Type";
pub const LABEL_KC: &str = "Controller Gain (Kc)";
pub const LABEL_TAU_I: &str = "Integral Time (τ_I)";
pub const LABEL_TAU_D: &str = "Derivative Time (τ_D)";

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub parameter: String,
    pub value: String,
}

impl ReportRow {
    fn new(parameter: &str, value: impl Into<String>) -> Self {
        Self {
            parameter: parameter.to_string(),
            value: value.into(),
        }
    }
}

/// Tuning result with both raw numbers and display rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuningReport {
    pub controller: ControllerType,
    pub model: ProcessModel,
    pub settings: ControllerSettings,
    pub rows: Vec<ReportRow>,
}

impl TuningReport {
    pub fn new(model: ProcessModel, settings: ControllerSettings) -> Self {
        let tau_d = settings
            .tau_d()
            .map(format_value)
            .unwrap_or_else(|| NOT_APPLICABLE.to_string());

        let rows = vec![
            ReportRow::new(LABEL_CONTROLLER, settings.controller_type().label()),
            ReportRow::new(LABEL_KC, format_value(settings.kc())),
            ReportRow::new(LABEL_TAU_I, format_value(settings.tau_i())),
            ReportRow::new(LABEL_TAU_D, tau_d),
        ];

        Self {
            controller: settings.controller_type(),
            model,
            settings,
            rows,
        }
    }

    /// Tune `model` and build the report in one step.
    pub fn compute(model: ProcessModel, controller: ControllerType) -> TuningResult<Self> {
        let settings = tune(&model, controller)?;
        Ok(Self::new(model, settings))
    }

    /// One-line summary of the process parameters.
    pub fn inputs_summary(&self) -> String {
        format!(
            "K = {:.2}, τ = {:.2}, θ = {:.3}",
            self.model.gain(),
            self.model.tau(),
            self.model.theta()
        )
    }

    /// Value column for a parameter label.
    pub fn value_of(&self, parameter: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.parameter == parameter)
            .map(|row| row.value.as_str())
    }
}

/// Result value with exactly four decimals.
pub fn format_value(v: Real) -> String {
    format!("{v:.4}")
}

impl fmt::Display for TuningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEADER: (&str, &str) = ("Parameter", "Value");

        // Width padding counts chars, so τ lines up.
        let name_w = self
            .rows
            .iter()
            .map(|r| r.parameter.chars().count())
            .chain(std::iter::once(HEADER.0.len()))
            .max()
            .unwrap_or(0);
        let value_w = self
            .rows
            .iter()
            .map(|r| r.value.chars().count())
            .chain(std::iter::once(HEADER.1.len()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:<name_w$}  {:<value_w$}", HEADER.0, HEADER.1)?;
        writeln!(f, "{}  {}", "-".repeat(name_w), "-".repeat(value_w))?;
        for row in &self.rows {
            writeln!(f, "{:<name_w$}  {:<value_w$}", row.parameter, row.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn has_four_decimals(s: &str) -> bool {
        match s.split_once('.') {
            Some((int, frac)) => {
                !int.is_empty()
                    && int.chars().all(|c| c.is_ascii_digit())
                    && frac.len() == 4
                    && frac.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        }
    }

    #[test]
    fn pi_report_at_defaults() {
        let report = TuningReport::compute(ProcessModel::default(), ControllerType::Pi).unwrap();
        assert_eq!(report.value_of(LABEL_CONTROLLER), Some("PI"));
        assert_eq!(report.value_of(LABEL_KC), Some("2.8236"));
        assert_eq!(report.value_of(LABEL_TAU_I), Some("0.6077"));
        assert_eq!(report.value_of(LABEL_TAU_D), Some(NOT_APPLICABLE));
    }

    #[test]
    fn pid_report_at_defaults() {
        let report = TuningReport::compute(ProcessModel::default(), ControllerType::Pid).unwrap();
        assert_eq!(report.value_of(LABEL_CONTROLLER), Some("PID"));
        assert_eq!(report.value_of(LABEL_KC), Some("4.7000"));
        assert_eq!(report.value_of(LABEL_TAU_I), Some("4.2000"));
        assert_eq!(report.value_of(LABEL_TAU_D), Some("0.3846"));
    }

    #[test]
    fn rows_are_ordered() {
        let report = TuningReport::compute(ProcessModel::default(), ControllerType::Pid).unwrap();
        let labels: Vec<&str> = report.rows.iter().map(|r| r.parameter.as_str()).collect();
        assert_eq!(labels, [LABEL_CONTROLLER, LABEL_KC, LABEL_TAU_I, LABEL_TAU_D]);
    }

    #[test]
    fn inputs_summary_uses_display_precision() {
        let report = TuningReport::compute(ProcessModel::default(), ControllerType::Pi).unwrap();
        assert_eq!(report.inputs_summary(), "K = 1.00, τ = 1.00, θ = 0.100");
    }

    #[test]
    fn table_rendering_aligns_columns() {
        let report = TuningReport::compute(ProcessModel::default(), ControllerType::Pi).unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Parameter"));
        assert!(text.contains("Derivative Time (τ_D)  Not applicable"));
        let value_col = lines[2].find("PI").unwrap();
        assert_eq!(
            lines[3].chars().take_while(|c| *c != '2').count(),
            lines[2][..value_col].chars().count()
        );
    }

    #[test]
    fn report_serializes_raw_and_formatted_values() {
        let report = TuningReport::compute(ProcessModel::default(), ControllerType::Pi).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["controller"], "PI");
        assert_eq!(json["settings"]["type"], "PI");
        assert_eq!(json["model"]["theta"], 0.1);
        assert_eq!(json["rows"][3]["value"], NOT_APPLICABLE);
    }

    proptest! {
        #[test]
        fn numeric_values_have_four_decimals(
            k in 0.01_f64..100.0,
            tau in 0.01_f64..1000.0,
            theta in 0.001_f64..1000.0,
            pid in any::<bool>(),
        ) {
            let controller = if pid { ControllerType::Pid } else { ControllerType::Pi };
            let model = ProcessModel::new(k, tau, theta).unwrap();
            let report = TuningReport::compute(model, controller).unwrap();
            for row in &report.rows[1..] {
                if row.parameter == LABEL_TAU_D && !pid {
                    prop_assert_eq!(row.value.as_str(), NOT_APPLICABLE);
                } else {
                    prop_assert!(has_four_decimals(&row.value), "{} = {}", row.parameter, row.value);
                }
            }
        }
    }
}
