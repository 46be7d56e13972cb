use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable progress and summary
    #[default]
    Text,
    /// The execution outcome as pretty-printed JSON
    Json,
}
