//! Analysis results and the JSON shapes exchanged at the service boundary.

use serde::{Deserialize, Serialize};

use crate::law::LawStatus;

/// A matched category with its keyword score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCategory {
    pub name: String,
    pub score: f32,
    /// Keyword phrases that matched, in configuration order, followed by
    /// the citation or name of each statute the query named.
    pub matched_keywords: Vec<String>,
}

/// Short form of a matched law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawSummary {
    pub identification_number: String,
    pub name_of_law: String,
    pub citation_title: String,
    pub status: LawStatus,
}

/// Citation-only view of a law record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub name_of_law: String,
    pub citation_title: String,
    pub identification_number: String,
    pub legal_domain: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date_of_entry_into_force: String,
    pub regulatory_authority: String,
}

/// Result of analysing one situation. Created per request, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Best-first, no duplicates.
    pub categories: Vec<ScoredCategory>,
    /// Deduplicated, laws of the top-ranked category first.
    pub laws: Vec<LawSummary>,
    /// Never empty.
    pub advice: String,
    /// One per law, same order.
    pub references: Vec<Reference>,
}

impl AnalysisResult {
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn law_names(&self) -> Vec<String> {
        self.laws.iter().map(|l| l.name_of_law.clone()).collect()
    }

    /// Flatten into the `data` payload of a success response.
    pub fn to_response_data(&self) -> ResponseData {
        ResponseData {
            categories: self.category_names(),
            laws: self.law_names(),
            advice: self.advice.clone(),
            references: self.references.clone(),
        }
    }
}

/// `{"situation": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub situation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    pub categories: Vec<String>,
    pub laws: Vec<String>,
    pub advice: String,
    pub references: Vec<Reference>,
}

/// `{"success": true, "data": {...}}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn ok(result: &AnalysisResult) -> Self {
        Self {
            success: true,
            data: Some(result.to_response_data()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
