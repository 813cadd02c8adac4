//! Batch file schema.

use amigo_tuning::{ControllerType, ProcessModel, TuningResult};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchFile {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

/// One process to tune. Times share whatever unit the file author picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    pub gain: f64,
    pub tau: f64,
    pub theta: f64,
    #[serde(default)]
    pub controller: ControllerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CaseDef {
    pub fn process_model(&self) -> TuningResult<ProcessModel> {
        ProcessModel::new(self.gain, self.tau, self.theta)
    }
}
