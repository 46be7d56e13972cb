// crates/cli/src/config.rs
use crate::args::ConcatArgs;
pub use k_toolkit_engine::config::{ConcatConfig, ConcatConfigBuilder};
use k_toolkit_engine::error::EngineError;

impl TryFrom<&ConcatArgs> for ConcatConfig {
    type Error = EngineError;

    fn try_from(args: &ConcatArgs) -> Result<Self, Self::Error> {
        let (sources, output) = args.sources_and_output();

        ConcatConfigBuilder::default()
            .sources(sources)
            .output(output)
            .suffix(args.file_suffix.clone())
            .cascading(args.cascade)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Args, Command};
    use clap::Parser;

    #[test]
    fn args_map_onto_engine_config() {
        let Command::Concat(args) =
            Args::try_parse_from(["k-toolkit", "concat", "src, docs", "all.md", "--file-suffix", ".md", "--cascade"])
                .unwrap()
                .command;

        let config = ConcatConfig::try_from(&args).unwrap();

        assert_eq!(config.sources, "src, docs");
        assert_eq!(config.output, "all.md");
        assert_eq!(config.suffix, ".md");
        assert!(config.cascading);
    }
}
