use crate::validation::ValidationOutcome;
use serde::Serialize;
use std::path::PathBuf;

pub const CANCELLED: &str = "Concatenation cancelled by user";

/// Result of one `run`, handed to the presentation layer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionOutcome {
    /// Every eligible file was copied.
    pub success: bool,
    /// Summary on success, otherwise the first failure's error text.
    pub message: String,
    pub validation: ValidationOutcome,
    /// Absolute destination, once resolved.
    pub output: Option<PathBuf>,
    pub files_merged: usize,
    pub bytes_written: u64,
}

impl ExecutionOutcome {
    pub(crate) fn rejected(validation: ValidationOutcome) -> Self {
        Self {
            success: false,
            message: String::new(),
            validation,
            output: None,
            files_merged: 0,
            bytes_written: 0,
        }
    }

    pub(crate) fn failed(validation: ValidationOutcome, output: PathBuf, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            validation,
            output: Some(output),
            files_merged: 0,
            bytes_written: 0,
        }
    }

    pub(crate) fn completed(validation: ValidationOutcome, output: PathBuf, files_merged: usize, bytes_written: u64) -> Self {
        Self {
            success: true,
            message: format!("Total merged {bytes_written} bytes to output file: {}", output.display()),
            validation,
            output: Some(output),
            files_merged,
            bytes_written,
        }
    }

    /// Succeeded and passed validation.
    pub const fn is_ok(&self) -> bool {
        self.success && self.validation.is_valid
    }
}
