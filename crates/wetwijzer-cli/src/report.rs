//! Plain-text Legal Advice Report export.

use chrono::{DateTime, Utc};
use wetwijzer_core::AnalysisResult;

use crate::display::reference_card;

/// `legal_advice_YYYYMMDD_HHMMSS.txt`
pub fn report_filename(at: DateTime<Utc>) -> String {
    format!("legal_advice_{}.txt", at.format("%Y%m%d_%H%M%S"))
}

/// Render the downloadable report for one analysed situation.
pub fn render_report(situation: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();
    heading(&mut out, "Legal Advice Report", '=');

    section(&mut out, "Situation", situation.trim());

    let categories = result.category_names();
    let categories = if categories.is_empty() {
        "None identified".to_string()
    } else {
        categories.join(", ")
    };
    section(&mut out, "Relevant Categories", &categories);

    let laws = if result.laws.is_empty() {
        "None".to_string()
    } else {
        result
            .laws
            .iter()
            .map(|l| format!("- {}", l.name_of_law))
            .collect::<Vec<_>>()
            .join("\n")
    };
    section(&mut out, "Relevant Laws", &laws);

    section(&mut out, "Advice", &result.advice);

    out.push('\n');
    heading(&mut out, "References", '-');
    for reference in &result.references {
        out.push('\n');
        out.push_str(&reference_card(reference, ""));
    }
    out
}

fn heading(out: &mut String, title: &str, underline: char) {
    out.push_str(title);
    out.push('\n');
    out.extend(std::iter::repeat_n(underline, title.chars().count()));
    out.push('\n');
}

fn section(out: &mut String, title: &str, body: &str) {
    out.push('\n');
    heading(out, title, '-');
    out.push_str(body);
    out.push('\n');
}
