//! Terminal display for analysis results, knowledge-base summaries and history.

use wetwijzer_core::{AnalysisResult, KnowledgeBase, Reference};
use wetwijzer_store::HistoryEntry;

const RULE_WIDTH: usize = 50;
const MAX_SITUATION_CHARS: usize = 72;

// ── Public API ──

/// Print an analysis the way an interactive user reads it.
pub fn print_analysis(situation: &str, result: &AnalysisResult, verbose: bool) {
    print!("{}", render_analysis(situation, result, verbose));
}

pub fn print_summary(kb: &KnowledgeBase) {
    print!("{}", render_summary(kb));
}

pub fn print_history(entries: &[HistoryEntry]) {
    print!("{}", render_history(entries));
}

// ── Rendering ──

fn render_analysis(situation: &str, result: &AnalysisResult, verbose: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\nSituation: {situation}\n{rule}\n\n"));

    let categories = result.category_names();
    if categories.is_empty() {
        out.push_str("Relevant categories: none identified\n");
    } else {
        out.push_str(&format!("Relevant categories: {}\n", categories.join(", ")));
    }

    if !result.laws.is_empty() {
        out.push_str("\nRelevant laws:\n");
        for law in &result.laws {
            out.push_str(&format!("- {} ({})\n", law.name_of_law, law.citation_title));
        }
    }

    out.push_str(&format!("\nAdvice:\n{}\n", result.advice));

    if verbose && !result.references.is_empty() {
        out.push_str("\nDetailed references:\n");
        for reference in &result.references {
            out.push('\n');
            out.push_str(&reference_card(reference, "  "));
        }
    }
    out
}

fn render_summary(kb: &KnowledgeBase) -> String {
    let s = kb.summary();
    let mut out = String::from("=== Knowledge base ===\n\n");

    out.push_str(&format!("  {:<26}{}\n", "Laws", s.law_count));
    for (status, count) in &s.laws_by_status {
        out.push_str(&format!("    {:<24}{}\n", status, count));
    }
    out.push_str(&format!("  {:<26}{}\n", "Categories", s.category_count));
    out.push_str(&format!("  {:<26}{}\n", "Keywords", s.keyword_count));
    out.push_str(&format!("  {:<26}{}\n", "Stop words", s.stop_word_count));
    out.push_str(&format!(
        "  {:<26}{}\n",
        "Dangling law references", s.dangling_references
    ));

    out.push_str("\n--- Categories ---\n");
    for category in kb.categories() {
        out.push_str(&format!(
            "  {} [{}]: {} keywords, laws: {}\n",
            category.name,
            category.template.as_str(),
            category.keywords.len(),
            if category.law_ids.is_empty() {
                "-".to_string()
            } else {
                category.law_ids.join(", ")
            }
        ));
    }

    let dangling = kb.dangling_references();
    if !dangling.is_empty() {
        out.push_str("\n--- Warnings ---\n");
        for d in dangling {
            out.push_str(&format!(
                "  category '{}' references unknown law {}\n",
                d.category, d.law_id
            ));
        }
    }
    out
}

fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history.\n".to_string();
    }

    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. [{}] {}\n",
            i + 1,
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            truncate(&entry.situation, MAX_SITUATION_CHARS)
        ));
        let categories = entry.result.category_names();
        if !categories.is_empty() {
            out.push_str(&format!("     categories: {}\n", categories.join(", ")));
        }
    }
    out
}

// ── Helpers ──

/// Citation block shared with report export.
pub fn reference_card(reference: &Reference, indent: &str) -> String {
    format!(
        "{} ({})\n{indent}BWB ID: {}\n{indent}Domain: {}\n{indent}Entry into force: {}\n{indent}Regulatory authority: {}\n",
        reference.name_of_law,
        reference.citation_title,
        reference.identification_number,
        reference.legal_domain,
        reference.date_of_entry_into_force,
        reference.regulatory_authority,
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
