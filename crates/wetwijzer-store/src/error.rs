use std::path::PathBuf;

use thiserror::Error;
use wetwijzer_core::KnowledgeBaseError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data directory not found: {0}")]
    DataDirNotFound(PathBuf),

    #[error("categories file not found: {0}")]
    CategoriesNotFound(PathBuf),

    #[error("no law records found under {0}")]
    NoLaws(PathBuf),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid law JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid category TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("knowledge base rejected: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),

    #[error("history error: {0}")]
    History(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
