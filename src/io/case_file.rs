//! Case files: a disaster case's stage records, serialized for replay.
//!
//! A case file carries the records an external data-gathering collaborator
//! assembled, in funnel order. The `evaluate` command replays one through
//! a fresh controller.

use crate::core::{Error, Result, StageRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub case_id: String,
    pub records: Vec<StageRecord>,
}

/// Load and parse a case file.
pub fn load_case_file(path: &Path) -> Result<CaseFile> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::case_file(format!("failed to read: {e}"), path))?;
    let case: CaseFile = serde_json::from_str(&contents)
        .map_err(|e| Error::case_file(format!("failed to parse: {e}"), path))?;
    if case.records.is_empty() {
        return Err(Error::case_file("case file contains no records", path));
    }
    Ok(case)
}
