//! JSON output types for machine-readable CLI output.
//!
//! `greebler generate --json` prints exactly one [`GenerateOutput`] to stdout,
//! whether generation succeeded or not.

use greebler::{GenerationStats, GreebleParams};
use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures. Library failures pass through their
/// own codes (`GREEBLE_*`, `PNG_*`).
pub mod error_codes {
    /// Params file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Params file is not valid JSON for `GreebleParams`
    pub const JSON_PARSE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "GREEBLE_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File involved (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// One written image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRecord {
    /// "height" or "normal"
    pub kind: String,
    pub path: String,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
}

/// Report for `greebler generate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<GreebleParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<GenerationStats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    pub duration_ms: u64,
}

impl GenerateOutput {
    pub fn success(
        params: GreebleParams,
        stats: GenerationStats,
        outputs: Vec<OutputRecord>,
        duration_ms: u64,
    ) -> Self {
        Self {
            success: true,
            params: Some(params),
            stats: Some(stats),
            outputs,
            errors: Vec::new(),
            duration_ms,
        }
    }

    pub fn failure(params: Option<GreebleParams>, error: JsonError, duration_ms: u64) -> Self {
        Self {
            success: false,
            params,
            stats: None,
            outputs: Vec::new(),
            errors: vec![error],
            duration_ms,
        }
    }
}
