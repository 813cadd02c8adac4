//! Batch file validation.

use std::collections::HashSet;

use amigo_tuning::TuningError;
use tracing::warn;

use crate::schema::{BatchFile, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Batch contains no cases")]
    Empty,

    #[error("Missing case id at position {index}")]
    MissingId { index: usize },

    #[error("Duplicate ID: {id} in cases")]
    DuplicateId { id: String },

    #[error("Case '{id}': {source}")]
    InvalidCase { id: String, source: TuningError },
}

pub fn validate_batch(batch: &BatchFile) -> Result<(), ValidationError> {
    if batch.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: batch.version,
        });
    }

    if batch.cases.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut ids = HashSet::new();
    for (index, case) in batch.cases.iter().enumerate() {
        if case.id.trim().is_empty() {
            return Err(ValidationError::MissingId { index });
        }
        if !ids.insert(case.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
            });
        }
        if let Err(source) = case.process_model() {
            warn!(case = %case.id, error = %source, "rejecting case");
            return Err(ValidationError::InvalidCase {
                id: case.id.clone(),
                source,
            });
        }
    }

    Ok(())
}
