//! The `analyze` orchestrator.
//!
//! # Pipeline
//!
//! 1. Take one knowledge-base snapshot for the whole call.
//! 2. Normalize the situation; no tokens is [`AnalyzeError::EmptyInput`].
//! 3. Classify against the category table, optionally expanding related
//!    categories.
//! 4. Match laws, compose advice, resolve references.
//!
//! Each call is independent and either returns a complete result or a
//! single error. Concurrent calls share nothing but the snapshot.

use std::sync::Arc;

use tracing::{debug, info};
use wetwijzer_core::{
    AnalysisResult, AnalyzeRequest, AnalyzeResponse, Category, KnowledgeBase, KnowledgeSource,
};

use crate::advice::compose_advice;
use crate::classifier::{CategoryClassifier, expand_related};
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, ConfigError};
use crate::matcher::match_laws;
use crate::references::{resolve_references, summarize};

/// Stateless analyzer over a knowledge source.
///
/// The default source is a fixed `Arc<KnowledgeBase>`; pass a hot-reloadable
/// handle to pick up knowledge-base swaps between calls.
pub struct QueryAnalyzer<S: KnowledgeSource = Arc<KnowledgeBase>> {
    source: S,
    config: AnalyzerConfig,
}

impl<S: KnowledgeSource> QueryAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: AnalyzerConfig::default(),
        }
    }

    /// Build with a custom configuration. Rejects a config that fails
    /// [`AnalyzerConfig::validate`].
    pub fn with_config(source: S, config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// Analyze a free-text situation.
    pub fn analyze(&self, situation: &str) -> Result<AnalysisResult, AnalyzeError> {
        let kb = self.source.snapshot();

        let tokens = kb.normalizer().normalize(situation);
        if tokens.is_empty() {
            debug!("situation normalized to no tokens");
            return Err(AnalyzeError::EmptyInput);
        }

        let classifier = CategoryClassifier::new(&kb, self.config.inclusion_threshold);
        let mut categories = classifier.classify(&tokens);
        if self.config.expand_related {
            categories = expand_related(&kb, categories);
        }

        let laws = match_laws(&kb, &categories);
        let ranked: Vec<&Category> = categories
            .iter()
            .filter_map(|c| kb.category(&c.name))
            .collect();
        let advice = compose_advice(&ranked, &laws);
        let references = resolve_references(&laws);

        info!(
            tokens = tokens.len(),
            categories = categories.len(),
            laws = laws.len(),
            "analyzed situation"
        );

        Ok(AnalysisResult {
            laws: laws.iter().map(|law| summarize(law)).collect(),
            categories,
            advice,
            references,
        })
    }

    /// Handle a boundary request, mapping errors to a failure envelope.
    pub fn respond(&self, request: &AnalyzeRequest) -> AnalyzeResponse {
        match self.analyze(&request.situation) {
            Ok(result) => AnalyzeResponse::ok(&result),
            Err(e) => AnalyzeResponse::failure(e.to_string()),
        }
    }
}
