//! JSON document I/O.
//!
//! Reads plan requests and planner configurations, writes plan results.
//! Output is pretty-printed UTF-8 JSON.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::models::{PlanRequest, PlanResult};

/// Reads a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PlanError> {
    let text = fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Writes a value as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PlanError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a plan request.
pub fn load_request(path: &Path) -> Result<PlanRequest, PlanError> {
    let request: PlanRequest = read_json(path)?;
    log::debug!(
        "loaded {} field(s), {} machine(s) from {}",
        request.fields.len(),
        request.machine_count,
        path.display()
    );
    Ok(request)
}

/// Loads a planner configuration. Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<PlannerConfig, PlanError> {
    read_json(path)
}

/// Saves a plan result.
pub fn save_result(path: &Path, result: &PlanResult) -> Result<(), PlanError> {
    write_json(path, result)
}
