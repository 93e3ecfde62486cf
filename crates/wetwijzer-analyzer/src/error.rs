use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single `analyze` call. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// The situation normalises to zero tokens.
    #[error("please describe your situation: the text contains no meaningful words")]
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse analyzer config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid analyzer config: {0}")]
    Invalid(String),
}
