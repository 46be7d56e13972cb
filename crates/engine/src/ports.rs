//! Seams between the engine and whoever drives it.

use crate::error::EngineError;
use std::path::{Path, PathBuf};

/// Yes/no gate consulted once the eligible files are known and before the
/// output file is created.
pub trait ConfirmationGate {
    fn confirm(&mut self, files: &[PathBuf]) -> bool;
}

/// Gate that always proceeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&mut self, _files: &[PathBuf]) -> bool {
        true
    }
}

/// Per-file notifications while the merge runs.
pub trait ProgressSink {
    fn on_merged(&self, path: &Path, bytes: u64);
    fn on_failed(&self, path: &Path, error: &EngineError);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_merged(&self, _path: &Path, _bytes: u64) {}
    fn on_failed(&self, _path: &Path, _error: &EngineError) {}
}
