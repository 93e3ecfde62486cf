pub mod category;
pub mod error;
pub mod knowledge;
pub mod law;
pub mod normalize;
pub mod result;

pub use category::{AdviceTemplate, Category, CategorySpec, Keyword, KeywordSpec};
pub use error::KnowledgeBaseError;
pub use knowledge::{
    DanglingReference, KnowledgeBase, KnowledgeBaseSummary, KnowledgeSource, StatuteMention,
};
pub use law::{LawRecord, LawStatus, Metadata};
pub use normalize::{DEFAULT_STOP_WORDS, Normalizer};
pub use result::{
    AnalysisResult, AnalyzeRequest, AnalyzeResponse, LawSummary, Reference, ResponseData,
    ScoredCategory,
};
