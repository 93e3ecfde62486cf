//! Map ranked categories to the law records they point at.

use std::collections::HashSet;

use tracing::{debug, warn};
use wetwijzer_core::{KnowledgeBase, LawRecord, ScoredCategory};

/// Collect the laws of every category, best category first.
///
/// Within a category, laws keep their configured order. A law mapped by
/// several categories appears once, at its first position. Law ids with no
/// loaded record are skipped; so are category names the knowledge base does
/// not know.
pub fn match_laws<'kb>(kb: &'kb KnowledgeBase, categories: &[ScoredCategory]) -> Vec<&'kb LawRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut laws = Vec::new();

    for scored in categories {
        let Some(category) = kb.category(&scored.name) else {
            warn!(category = %scored.name, "unknown category, skipping");
            continue;
        };
        for id in &category.law_ids {
            let Some(law) = kb.law(id) else {
                debug!(category = %category.name, law_id = %id, "unresolved law id skipped");
                continue;
            };
            if seen.insert(law.id()) {
                laws.push(law);
            }
        }
    }

    laws
}
