//! The validated, read-only knowledge base: law records plus the compiled
//! category table.
//!
//! Construction is the only place validation happens. Malformed records and
//! categories are rejected here; a category pointing at a law id that is not
//! loaded is tolerated and reported as a dangling reference.
//!
//! Every law also gets [`StatuteMention`] phrases (its citation title and
//! full name) so a query that names a statute can be tied to it directly.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, warn};

use crate::category::{Category, CategorySpec, Keyword};
use crate::error::KnowledgeBaseError;
use crate::law::LawRecord;
use crate::normalize::Normalizer;

/// A category → law id link that resolves to no loaded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub category: String,
    pub law_id: String,
}

/// Phrases by which a query can name a loaded law directly.
#[derive(Debug, Clone, PartialEq)]
pub struct StatuteMention {
    pub law_id: String,
    /// Citation title first, then the full name. Either one names the law.
    pub phrases: Vec<Keyword>,
}

impl StatuteMention {
    fn compile(law: &LawRecord, normalizer: &Normalizer) -> Self {
        let m = law.metadata();
        let mut phrases: Vec<Keyword> = Vec::new();
        for phrase in [&m.citation_title, &m.name_of_law] {
            let tokens = normalizer.normalize(phrase);
            if tokens.is_empty() || phrases.iter().any(|p| p.tokens == tokens) {
                continue;
            }
            phrases.push(Keyword {
                phrase: phrase.trim().to_string(),
                tokens,
                prefix: false,
                weight: 1.0,
            });
        }
        Self {
            law_id: law.id().to_string(),
            phrases,
        }
    }
}

/// Summary statistics for a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBaseSummary {
    pub law_count: usize,
    pub category_count: usize,
    pub keyword_count: usize,
    pub stop_word_count: usize,
    pub dangling_references: usize,
    /// Laws per status, keyed by [`LawStatus::as_str`](crate::law::LawStatus::as_str).
    pub laws_by_status: BTreeMap<&'static str, usize>,
}

/// In-memory knowledge base. Immutable once built.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    laws: Vec<LawRecord>,
    law_index: HashMap<String, usize>,
    categories: Vec<Category>,
    category_index: HashMap<String, usize>,
    mentions: Vec<StatuteMention>,
    normalizer: Normalizer,
    dangling: Vec<DanglingReference>,
}

impl KnowledgeBase {
    /// Validate law records and compile category specs.
    ///
    /// Category order is preserved as given; it is the tie-break order for
    /// classification.
    pub fn new(
        laws: Vec<LawRecord>,
        specs: &[CategorySpec],
        normalizer: Normalizer,
    ) -> Result<Self, KnowledgeBaseError> {
        let mut law_index = HashMap::with_capacity(laws.len());
        for (index, law) in laws.iter().enumerate() {
            if let Some(field) = law.blank_required_field() {
                return Err(KnowledgeBaseError::BlankField { index, field });
            }
            if law_index.insert(law.id().to_string(), index).is_some() {
                return Err(KnowledgeBaseError::DuplicateLaw(law.id().to_string()));
            }
        }

        let mut categories = Vec::with_capacity(specs.len());
        let mut category_index = HashMap::with_capacity(specs.len());
        for spec in specs {
            let category = Category::compile(spec, &normalizer)?;
            if category_index
                .insert(category.name.clone(), categories.len())
                .is_some()
            {
                return Err(KnowledgeBaseError::DuplicateCategory(category.name));
            }
            categories.push(category);
        }

        for category in &categories {
            if let Some(related) = category
                .related
                .iter()
                .find(|r| !category_index.contains_key(r.as_str()))
            {
                return Err(KnowledgeBaseError::UnknownRelated {
                    category: category.name.clone(),
                    related: related.clone(),
                });
            }
        }

        let dangling: Vec<DanglingReference> = categories
            .iter()
            .flat_map(|c| {
                c.law_ids
                    .iter()
                    .filter(|id| !law_index.contains_key(id.as_str()))
                    .map(|id| DanglingReference {
                        category: c.name.clone(),
                        law_id: id.clone(),
                    })
            })
            .collect();

        for d in &dangling {
            warn!(
                category = %d.category,
                law_id = %d.law_id,
                "category references a law that is not in the knowledge base"
            );
        }

        let mentions = laws
            .iter()
            .map(|law| StatuteMention::compile(law, &normalizer))
            .collect();

        info!(
            laws = laws.len(),
            categories = categories.len(),
            dangling = dangling.len(),
            "built knowledge base"
        );

        Ok(Self {
            laws,
            law_index,
            categories,
            category_index,
            mentions,
            normalizer,
            dangling,
        })
    }

    /// Look up a law by BWB ID.
    pub fn law(&self, id: &str) -> Option<&LawRecord> {
        self.law_index.get(id).map(|&i| &self.laws[i])
    }

    /// All laws in load order.
    pub fn laws(&self) -> &[LawRecord] {
        &self.laws
    }

    /// All categories in configuration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.category_index.get(name).map(|&i| &self.categories[i])
    }

    /// Configuration position of a category, used as the ranking tie-break.
    pub fn category_position(&self, name: &str) -> Option<usize> {
        self.category_index.get(name).copied()
    }

    /// Statute mention phrases, one entry per law in load order.
    pub fn mentions(&self) -> &[StatuteMention] {
        &self.mentions
    }

    /// The normalizer keywords were compiled with. Queries must use the same one.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn dangling_references(&self) -> &[DanglingReference] {
        &self.dangling
    }

    pub fn summary(&self) -> KnowledgeBaseSummary {
        let mut laws_by_status = BTreeMap::new();
        for law in &self.laws {
            *laws_by_status
                .entry(law.metadata().status.as_str())
                .or_insert(0) += 1;
        }

        let distinct_dangling: HashSet<&str> =
            self.dangling.iter().map(|d| d.law_id.as_str()).collect();

        KnowledgeBaseSummary {
            law_count: self.laws.len(),
            category_count: self.categories.len(),
            keyword_count: self.categories.iter().map(|c| c.keywords.len()).sum(),
            stop_word_count: self.normalizer.stop_word_count(),
            dangling_references: distinct_dangling.len(),
            laws_by_status,
        }
    }
}

/// Something that hands out a consistent knowledge-base snapshot per call.
///
/// A plain `Arc<KnowledgeBase>` always returns the same snapshot; a
/// hot-reloadable handle returns whichever snapshot is current.
pub trait KnowledgeSource: Send + Sync {
    fn snapshot(&self) -> Arc<KnowledgeBase>;
}

impl KnowledgeSource for Arc<KnowledgeBase> {
    fn snapshot(&self) -> Arc<KnowledgeBase> {
        Arc::clone(self)
    }
}
