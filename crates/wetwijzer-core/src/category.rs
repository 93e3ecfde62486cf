//! Curated legal categories used to bucket free-text situations.
//!
//! A [`CategorySpec`] is the raw form read from `categories.toml`. The
//! knowledge base compiles each spec into a [`Category`] whose keywords are
//! already normalized, so classification never re-tokenizes configuration.

use serde::{Deserialize, Serialize};

use crate::error::KnowledgeBaseError;
use crate::normalize::Normalizer;

/// Closed set of advice templates a category can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTemplate {
    /// Heading plus the category's laws, no topic-specific steps.
    #[default]
    Generic,
    Employment,
    Discrimination,
    EmploymentDiscrimination,
    Administrative,
    Civil,
    Criminal,
    Constitutional,
    TenantRights,
}

impl AdviceTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Employment => "employment",
            Self::Discrimination => "discrimination",
            Self::EmploymentDiscrimination => "employment_discrimination",
            Self::Administrative => "administrative",
            Self::Civil => "civil",
            Self::Criminal => "criminal",
            Self::Constitutional => "constitutional",
            Self::TenantRights => "tenant_rights",
        }
    }
}

/// A keyword as written in configuration: a bare phrase (weight 1.0) or a
/// weighted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordSpec {
    Plain(String),
    Weighted {
        phrase: String,
        #[serde(default = "default_weight")]
        weight: f32,
    },
}

fn default_weight() -> f32 {
    1.0
}

impl KeywordSpec {
    pub fn phrase(&self) -> &str {
        match self {
            Self::Plain(p) => p,
            Self::Weighted { phrase, .. } => phrase,
        }
    }

    pub fn weight(&self) -> f32 {
        match self {
            Self::Plain(_) => 1.0,
            Self::Weighted { weight, .. } => *weight,
        }
    }
}

/// Raw category configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    #[serde(default)]
    pub template: AdviceTemplate,
    /// BWB IDs of the laws this category points at, in display order.
    #[serde(default)]
    pub laws: Vec<String>,
    /// Categories considered together with this one when expansion is on.
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<KeywordSpec>,
}

/// A compiled keyword: normalized tokens matched contiguously.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    /// Phrase as configured, kept for diagnostics.
    pub phrase: String,
    pub tokens: Vec<String>,
    /// The last token matches any query token starting with it (`discriminat*`).
    pub prefix: bool,
    pub weight: f32,
}

impl Keyword {
    /// Compile a keyword phrase with the knowledge base's normalizer.
    pub fn compile(
        category: &str,
        spec: &KeywordSpec,
        normalizer: &Normalizer,
    ) -> Result<Self, KnowledgeBaseError> {
        let raw = spec.phrase().trim();
        let (body, prefix) = match raw.strip_suffix('*') {
            Some(body) => (body, true),
            None => (raw, false),
        };

        let tokens = normalizer.normalize(body);
        if tokens.is_empty() {
            return Err(KnowledgeBaseError::EmptyKeyword {
                category: category.to_string(),
                phrase: raw.to_string(),
            });
        }

        let weight = spec.weight();
        if !weight.is_finite() || weight <= 0.0 {
            return Err(KnowledgeBaseError::InvalidWeight {
                category: category.to_string(),
                phrase: raw.to_string(),
                weight,
            });
        }

        Ok(Self {
            phrase: raw.to_string(),
            tokens,
            prefix,
            weight,
        })
    }
}

/// A compiled category. Its index in the knowledge base is its configuration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub template: AdviceTemplate,
    /// Configured order, first occurrence kept when an id repeats.
    pub law_ids: Vec<String>,
    pub related: Vec<String>,
    pub keywords: Vec<Keyword>,
}

impl Category {
    pub fn compile(spec: &CategorySpec, normalizer: &Normalizer) -> Result<Self, KnowledgeBaseError> {
        let name = spec.name.trim();
        if name.is_empty() {
            return Err(KnowledgeBaseError::BlankCategoryName);
        }

        let keywords = spec
            .keywords
            .iter()
            .map(|k| Keyword::compile(name, k, normalizer))
            .collect::<Result<Vec<_>, _>>()?;

        let mut law_ids: Vec<String> = Vec::with_capacity(spec.laws.len());
        for id in spec.laws.iter().map(|id| id.trim()) {
            if !law_ids.iter().any(|seen| seen == id) {
                law_ids.push(id.to_string());
            }
        }

        Ok(Self {
            name: name.to_string(),
            template: spec.template,
            law_ids,
            related: spec.related.iter().map(|r| r.trim().to_string()).collect(),
            keywords,
        })
    }

    /// Whether this category maps the given law.
    pub fn maps_law(&self, law_id: &str) -> bool {
        self.law_ids.iter().any(|id| id == law_id)
    }
}
