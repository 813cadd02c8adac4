//! Batch loading, saving and execution.

use std::path::Path;

use amigo_tuning::{ControllerType, ProcessModel, TuningReport};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::schema::BatchFile;
use crate::validate::validate_batch;

/// On-disk encoding of a batch file, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Yaml,
    Json,
}

impl BatchFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(BatchFormat::Yaml),
            Some("json") => Ok(BatchFormat::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Tuned result for one batch case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub report: TuningReport,
}

/// Parse and validate batch content already read into memory.
pub fn parse_batch(content: &str, format: BatchFormat) -> AppResult<BatchFile> {
    let batch: BatchFile = match format {
        BatchFormat::Yaml => serde_yaml::from_str(content)?,
        BatchFormat::Json => serde_json::from_str(content)?,
    };
    validate_batch(&batch)?;
    Ok(batch)
}

/// Load and validate a batch file from disk.
pub fn load_batch(path: &Path) -> AppResult<BatchFile> {
    let format = BatchFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let batch = parse_batch(&content, format)?;
    info!(
        path = %path.display(),
        name = %batch.name,
        cases = batch.cases.len(),
        "loaded batch"
    );
    Ok(batch)
}

/// Validate and write a batch file, encoding chosen by extension.
pub fn save_batch(path: &Path, batch: &BatchFile) -> AppResult<()> {
    validate_batch(batch)?;
    let content = match BatchFormat::from_path(path)? {
        BatchFormat::Yaml => serde_yaml::to_string(batch)?,
        BatchFormat::Json => serde_json::to_string_pretty(batch)?,
    };
    std::fs::write(path, content).map_err(|source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Tune every case in file order.
pub fn run_batch(batch: &BatchFile) -> AppResult<Vec<CaseResult>> {
    validate_batch(batch)?;

    let results = batch
        .cases
        .iter()
        .map(|case| -> AppResult<CaseResult> {
            let model = case.process_model()?;
            let report = TuningReport::compute(model, case.controller)?;
            debug!(case = %case.id, controller = %case.controller, "case tuned");
            Ok(CaseResult {
                id: case.id.clone(),
                description: case.description.clone(),
                report,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    info!(name = %batch.name, cases = results.len(), "batch complete");
    Ok(results)
}

/// Validate raw parameters and tune one controller.
pub fn tune_single(
    gain: f64,
    tau: f64,
    theta: f64,
    controller: ControllerType,
) -> AppResult<TuningReport> {
    let model = ProcessModel::new(gain, tau, theta)?;
    Ok(TuningReport::compute(model, controller)?)
}
