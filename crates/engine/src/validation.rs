//! Pre-flight checks run before anything is written.
//!
//! Every check takes the outcome accumulated so far and returns it, possibly
//! with more errors. Once an outcome is invalid the remaining checks pass it
//! through untouched, so messages from dependent checks never appear together
//! (a blank source is never also reported as missing).

use crate::filesystem::{file_exists, walk};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const NIL_SOURCES: &str = "Argument(s) can not be set to 'nil' value or be empty";
pub const BLANK_ARGUMENT: &str = "Argument(s) can not be empty";
pub const NO_FILES_MATCHED: &str =
    "Provided directory(es) does not contain any files matched for concatenation";
pub const SINGLE_FILE_MATCHED: &str =
    "Provided directory(es) contain only one file matching concatenation criteria";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationOutcome {
    #[must_use]
    pub const fn new() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    #[must_use]
    pub fn invalidate(mut self, message: impl Into<String>) -> Self {
        self.is_valid = false;
        self.errors.push(message.into());
        self
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Every source must be present and non-blank. One message per blank entry.
#[must_use]
pub fn sources_not_blank(outcome: ValidationOutcome, sources: Option<&[PathBuf]>) -> ValidationOutcome {
    if !outcome.is_valid {
        return outcome;
    }

    match sources {
        None | Some([]) => outcome.invalidate(NIL_SOURCES),
        Some(sources) => sources
            .iter()
            .filter(|src| is_blank(src))
            .fold(outcome, |acc, _| acc.invalidate(BLANK_ARGUMENT)),
    }
}

/// Every source must exist as a file or directory.
#[must_use]
pub fn sources_exist(outcome: ValidationOutcome, sources: &[PathBuf]) -> ValidationOutcome {
    if !outcome.is_valid {
        return outcome;
    }

    sources
        .iter()
        .filter(|src| !src.exists())
        .fold(outcome, |acc, src| {
            acc.invalidate(format!("File or directory: '{}' can not be found", src.display()))
        })
}

#[must_use]
pub fn output_not_blank(outcome: ValidationOutcome, output: &str) -> ValidationOutcome {
    if !outcome.is_valid || !output.trim().is_empty() {
        return outcome;
    }
    outcome.invalidate(BLANK_ARGUMENT)
}

/// The output must not be an existing file. An existing directory passes here.
#[must_use]
pub fn output_not_present(outcome: ValidationOutcome, output: &str) -> ValidationOutcome {
    if !outcome.is_valid || !file_exists(Path::new(output)) {
        return outcome;
    }
    outcome.invalidate(format!("Output file {output} already exists"))
}

/// At least two files must be eligible, a single file is nothing to concatenate.
#[must_use]
pub fn contains_eligible_files(
    outcome: ValidationOutcome,
    sources: &[PathBuf],
    cascading: bool,
    suffix: &str,
) -> ValidationOutcome {
    if !outcome.is_valid {
        return outcome;
    }

    match walk(sources, cascading, suffix) {
        Err(err) => outcome.invalidate(err.to_string()),
        Ok(files) => match files.len() {
            0 => outcome.invalidate(NO_FILES_MATCHED),
            1 => outcome.invalidate(SINGLE_FILE_MATCHED),
            _ => outcome,
        },
    }
}

/// Run the full chain in its canonical order.
#[must_use]
pub fn validate(sources: &[PathBuf], output: &str, cascading: bool, suffix: &str) -> ValidationOutcome {
    let outcome = sources_not_blank(ValidationOutcome::new(), Some(sources));
    let outcome = sources_exist(outcome, sources);
    let outcome = output_not_blank(outcome, output);
    let outcome = output_not_present(outcome, output);
    contains_eligible_files(outcome, sources, cascading, suffix)
}
