//! Advice composition from typed per-category templates.
//!
//! Every [`AdviceTemplate`] maps to one pure render function. A rendered
//! block is a heading, the category's own matched laws, and numbered
//! practical steps. Blocks are joined in category rank order.

use wetwijzer_core::{AdviceTemplate, Category, LawRecord};

/// Returned when no category matched. Never empty.
pub const FALLBACK_ADVICE: &str = "No specific legal category could be identified for this situation. \
Describe it in more detail, or consult a legal professional, for example through \
the Juridisch Loket (juridischloket.nl).";

/// Separator between rendered category blocks.
pub const DELIMITER: &str = "\n\n";

/// Compose advice for the ranked categories.
///
/// `laws` is the matched law set; each category's block only lists the
/// laws that category maps, in the category's configured order. Pure:
/// equal inputs give byte-identical output.
pub fn compose_advice(categories: &[&Category], laws: &[&LawRecord]) -> String {
    if categories.is_empty() {
        return FALLBACK_ADVICE.to_string();
    }

    categories
        .iter()
        .map(|category| render_category(category, laws))
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Render one category block with its own laws taken from `laws`.
pub fn render_category(category: &Category, laws: &[&LawRecord]) -> String {
    let own: Vec<&LawRecord> = category
        .law_ids
        .iter()
        .filter_map(|id| laws.iter().copied().find(|law| law.id() == id))
        .collect();

    match category.template {
        AdviceTemplate::Generic => generic(&category.name, &own),
        AdviceTemplate::Employment => employment(&own),
        AdviceTemplate::Discrimination => discrimination(&own),
        AdviceTemplate::EmploymentDiscrimination => employment_discrimination(&own),
        AdviceTemplate::Administrative => administrative(&own),
        AdviceTemplate::Civil => civil(&own),
        AdviceTemplate::Criminal => criminal(&own),
        AdviceTemplate::Constitutional => constitutional(&own),
        AdviceTemplate::TenantRights => tenant_rights(&own),
    }
}

// ── Templates ──

fn generic(name: &str, laws: &[&LawRecord]) -> String {
    let heading = format!("Legal area: {name}");
    block(
        &heading,
        laws,
        &["Read the legislation listed above, or ask the Juridisch Loket or a lawyer how it applies to you."],
    )
}

fn employment(laws: &[&LawRecord]) -> String {
    block(
        "Employment law",
        laws,
        &[
            "Check your employment contract and the applicable collective labour agreement (CAO).",
            "Contact your trade union or an employment lawyer.",
            "The Juridisch Loket can inform you about your rights.",
            "Keep all relevant documents and correspondence.",
        ],
    )
}

fn discrimination(laws: &[&LawRecord]) -> String {
    block(
        "Discrimination",
        laws,
        &[
            "File a complaint with the Netherlands Institute for Human Rights (College voor de Rechten van de Mens).",
            "Contact an anti-discrimination agency in your region.",
            "Seek legal assistance through the Juridisch Loket or a lawyer.",
            "Report criminal discrimination to the police.",
        ],
    )
}

fn employment_discrimination(laws: &[&LawRecord]) -> String {
    block(
        "Discrimination at work",
        laws,
        &[
            "Report the situation to your manager or HR department first.",
            "Contact the confidential adviser (vertrouwenspersoon) within your organisation.",
            "Involve the works council if there is one.",
            "Consider contacting a trade union for legal support.",
            "Ask the College voor de Rechten van de Mens for a judgment on unequal treatment.",
        ],
    )
}

fn administrative(laws: &[&LawRecord]) -> String {
    block(
        "Procedures with the government",
        laws,
        &[
            "Mind the objection period, usually six weeks after the decision.",
            "Gather all relevant documents.",
            "Consider legal assistance through the Juridisch Loket.",
            "Your municipality can often give free advice.",
        ],
    )
}

fn civil(laws: &[&LawRecord]) -> String {
    block(
        "Civil disputes",
        laws,
        &[
            "Gather all relevant documents and correspondence.",
            "Try to reach a solution through consultation first.",
            "Consider mediation as an alternative to court proceedings.",
            "Seek legal assistance in time if no solution is reached.",
        ],
    )
}

fn criminal(laws: &[&LawRecord]) -> String {
    block(
        "Criminal matters",
        laws,
        &[
            "If you are a victim, report the offence to the police (aangifte doen).",
            "If you are a suspect, you have the right to remain silent and the right to a lawyer.",
            "Keep any evidence, such as messages, photos and witness details.",
            "Victim Support Netherlands (Slachtofferhulp Nederland) offers free help to victims.",
        ],
    )
}

fn constitutional(laws: &[&LawRecord]) -> String {
    block(
        "Fundamental rights",
        laws,
        &[
            "Check whether a specific law elaborates the fundamental right involved.",
            "Fundamental rights are usually enforced through the procedure of that specific law.",
            "Complaints about government conduct can go to the Nationale ombudsman.",
            "Seek legal advice before starting proceedings.",
        ],
    )
}

fn tenant_rights(laws: &[&LawRecord]) -> String {
    block(
        "Tenant rights",
        laws,
        &[
            "Check your rental agreement and keep a copy of all correspondence with your landlord.",
            "Report defects and disputes to your landlord in writing.",
            "Disputes about rent, service costs or maintenance can go to the Huurcommissie.",
            "A local tenants' association or the Juridisch Loket can advise you free of charge.",
        ],
    )
}

// ── Layout ──

fn block(heading: &str, laws: &[&LawRecord], steps: &[&str]) -> String {
    let mut lines = vec![heading.to_string()];

    if !laws.is_empty() {
        let cited: Vec<String> = laws
            .iter()
            .map(|law| format!("{} ({})", law.name(), law.metadata().citation_title))
            .collect();
        lines.push(format!("Relevant legislation: {}.", cited.join(", ")));
    }

    lines.extend(
        steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1)),
    );
    lines.join("\n")
}
