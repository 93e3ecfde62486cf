use thiserror::Error;

/// A knowledge base that fails validation. Fatal at startup: no analysis is
/// served from a partially valid knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("law record {index} has a blank `{field}`")]
    BlankField { index: usize, field: &'static str },

    #[error("duplicate identification number: {0}")]
    DuplicateLaw(String),

    #[error("category with a blank name")]
    BlankCategoryName,

    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("category `{category}`: keyword `{phrase}` is empty after normalisation")]
    EmptyKeyword { category: String, phrase: String },

    #[error("category `{category}`: keyword `{phrase}` has invalid weight {weight}")]
    InvalidWeight {
        category: String,
        phrase: String,
        weight: f32,
    },

    #[error("category `{category}` is related to undefined category `{related}`")]
    UnknownRelated { category: String, related: String },
}
