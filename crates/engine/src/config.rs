use derive_builder::Builder;

/// Inputs for a single concatenation run.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct ConcatConfig {
    /// Comma-separated source paths. Empty means the current directory.
    #[builder(default)]
    pub sources: String,
    /// Destination file path, relative paths resolve against the current directory.
    pub output: String,
    /// Literal trailing substring a file path must end with. Empty matches all files.
    #[builder(default)]
    pub suffix: String,
    /// Descend into sub-directories of source directories.
    #[builder(default)]
    pub cascading: bool,
}
