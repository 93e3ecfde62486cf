//! Situation analysis for wetwijzer.
//!
//! Classifies a free-text situation into legal categories, matches the
//! laws those categories map, composes advice, and resolves citation
//! references, all against a read-only knowledge-base snapshot.

pub mod advice;
mod analyzer;
pub mod classifier;
mod config;
mod error;
pub mod matcher;
pub mod references;

pub use advice::{FALLBACK_ADVICE, compose_advice};
pub use analyzer::QueryAnalyzer;
pub use classifier::CategoryClassifier;
pub use config::AnalyzerConfig;
pub use error::{AnalyzeError, ConfigError};
pub use matcher::match_laws;
pub use references::resolve_references;
