//! Keyword-based classification of situations into legal categories.
//!
//! Scores every configured category against the normalized query, keeps
//! those above the inclusion threshold, and ranks them by score with the
//! configuration order as a stable tie-break.
//!
//! A query that names a loaded statute by citation title or full name
//! ("Awb", "Burgerlijk Wetboek") also scores every category mapping that
//! statute, more when it is the category's leading law.

use tracing::debug;
use wetwijzer_core::{Category, Keyword, KnowledgeBase, ScoredCategory};

/// Added when a named statute is the first law a category maps.
pub const LEADING_LAW_MENTION_WEIGHT: f32 = 2.0;

/// Added when a named statute appears further down a category's law list.
pub const OTHER_LAW_MENTION_WEIGHT: f32 = 1.0;

/// A statute the query named: its BWB ID and the phrase that named it.
struct NamedStatute<'kb> {
    law_id: &'kb str,
    phrase: &'kb str,
}

/// Keyword classifier over a knowledge base's category table.
///
/// Phrase matching is exact on normalized tokens (with an optional prefix
/// on the last token), never fuzzy, so every score can be explained by the
/// list of keywords that produced it.
pub struct CategoryClassifier<'kb> {
    kb: &'kb KnowledgeBase,
    threshold: f32,
}

impl<'kb> CategoryClassifier<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, threshold: f32) -> Self {
        Self { kb, threshold }
    }

    /// Score a token sequence against every category.
    ///
    /// Returns all categories scoring above the threshold, best first.
    /// Equal scores keep configuration order. No hit yields an empty vector.
    pub fn classify(&self, tokens: &[String]) -> Vec<ScoredCategory> {
        let named = named_statutes(self.kb, tokens);
        let scored: Vec<(usize, ScoredCategory)> = self
            .kb
            .categories()
            .iter()
            .enumerate()
            .map(|(position, category)| (position, score_category(category, tokens, &named)))
            .collect();

        let matches = above_threshold(scored, self.threshold);
        debug!(
            tokens = tokens.len(),
            named_statutes = named.len(),
            matched = matches.len(),
            "classified situation"
        );
        matches
    }
}

/// Append categories related to the matched ones.
///
/// Related categories that are already present are skipped. Additions come
/// after every scored category, in configuration order, with score 0.0, so
/// the result stays sorted best first.
pub fn expand_related(kb: &KnowledgeBase, matched: Vec<ScoredCategory>) -> Vec<ScoredCategory> {
    let mut wanted = vec![false; kb.categories().len()];
    for m in &matched {
        if let Some(category) = kb.category(&m.name) {
            for related in &category.related {
                if let Some(pos) = kb.category_position(related) {
                    wanted[pos] = true;
                }
            }
        }
    }
    for m in &matched {
        if let Some(pos) = kb.category_position(&m.name) {
            wanted[pos] = false;
        }
    }

    let mut expanded = matched;
    let before = expanded.len();
    expanded.extend(
        kb.categories()
            .iter()
            .zip(wanted)
            .filter(|(_, w)| *w)
            .map(|(c, _)| ScoredCategory {
                name: c.name.clone(),
                score: 0.0,
                matched_keywords: Vec::new(),
            }),
    );
    debug!(added = expanded.len() - before, "expanded related categories");
    expanded
}

// ── Scoring ──

/// Sum the weights of the distinct keywords that occur in `tokens`, plus
/// the mention weight of each named statute the category maps.
fn score_category(category: &Category, tokens: &[String], named: &[NamedStatute<'_>]) -> ScoredCategory {
    let mut score = 0.0f32;
    let mut matched_keywords = Vec::new();

    for keyword in &category.keywords {
        if phrase_occurs(keyword, tokens) {
            score += keyword.weight;
            matched_keywords.push(keyword.phrase.clone());
        }
    }

    for statute in named {
        if !category.maps_law(statute.law_id) {
            continue;
        }
        let leading = category.law_ids.first().is_some_and(|id| id == statute.law_id);
        score += if leading {
            LEADING_LAW_MENTION_WEIGHT
        } else {
            OTHER_LAW_MENTION_WEIGHT
        };
        matched_keywords.push(statute.phrase.to_string());
    }

    ScoredCategory {
        name: category.name.clone(),
        score,
        matched_keywords,
    }
}

/// Loaded laws named in `tokens`, in load order, each at most once.
fn named_statutes<'kb>(kb: &'kb KnowledgeBase, tokens: &[String]) -> Vec<NamedStatute<'kb>> {
    kb.mentions()
        .iter()
        .filter_map(|mention| {
            mention
                .phrases
                .iter()
                .find(|phrase| phrase_occurs(phrase, tokens))
                .map(|phrase| NamedStatute {
                    law_id: mention.law_id.as_str(),
                    phrase: phrase.phrase.as_str(),
                })
        })
        .collect()
}

/// Whether the keyword's tokens appear contiguously anywhere in `tokens`.
fn phrase_occurs(keyword: &Keyword, tokens: &[String]) -> bool {
    let n = keyword.tokens.len();
    if n == 0 || n > tokens.len() {
        return false;
    }
    tokens
        .windows(n)
        .any(|window| window_matches(keyword, window))
}

fn window_matches(keyword: &Keyword, window: &[String]) -> bool {
    let last = keyword.tokens.len() - 1;
    keyword
        .tokens
        .iter()
        .zip(window)
        .enumerate()
        .all(|(i, (want, got))| {
            if i == last && keyword.prefix {
                got.starts_with(want.as_str())
            } else {
                got == want
            }
        })
}

/// Keep entries strictly above `threshold`, sorted by score descending,
/// then configuration position ascending.
fn above_threshold(scored: Vec<(usize, ScoredCategory)>, threshold: f32) -> Vec<ScoredCategory> {
    let mut matches: Vec<(usize, ScoredCategory)> = scored
        .into_iter()
        .filter(|(_, s)| s.score > threshold)
        .collect();

    matches.sort_by(|(pa, a), (pb, b)| b.score.total_cmp(&a.score).then(pa.cmp(pb)));
    matches.into_iter().map(|(_, s)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wetwijzer_core::{
        AdviceTemplate, CategorySpec, KeywordSpec, LawRecord, LawStatus, Metadata, Normalizer,
    };

    fn make_kb(categories: &[(&str, &[(&str, f32)])], related: &[(&str, &[&str])]) -> KnowledgeBase {
        let specs: Vec<CategorySpec> = categories
            .iter()
            .map(|(name, keywords)| CategorySpec {
                name: name.to_string(),
                template: AdviceTemplate::Generic,
                laws: vec![],
                related: related
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, r)| r.iter().map(|s| s.to_string()).collect())
                    .unwrap_or_default(),
                keywords: keywords
                    .iter()
                    .map(|(phrase, weight)| KeywordSpec::Weighted {
                        phrase: phrase.to_string(),
                        weight: *weight,
                    })
                    .collect(),
            })
            .collect();
        KnowledgeBase::new(vec![], &specs, Normalizer::default()).unwrap()
    }

    fn tokens(kb: &KnowledgeBase, text: &str) -> Vec<String> {
        kb.normalizer().normalize(text)
    }

    fn names(scored: &[ScoredCategory]) -> Vec<&str> {
        scored.iter().map(|s| s.name.as_str()).collect()
    }

    // ── Matching ──

    #[test]
    fn single_keyword_hit() {
        let kb = make_kb(&[("tenancy", &[("huur", 1.0)])], &[]);
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(&kb, "Vraag over mijn huur"));
        assert_eq!(names(&result), vec!["tenancy"]);
        assert_eq!(result[0].score, 1.0);
        assert_eq!(result[0].matched_keywords, vec!["huur"]);
    }

    #[test]
    fn exact_token_not_substring() {
        let kb = make_kb(&[("tenancy", &[("huur", 1.0)])], &[]);
        let clf = CategoryClassifier::new(&kb, 0.0);
        assert!(clf.classify(&tokens(&kb, "huurcontract verlengen")).is_empty());
    }

    #[test]
    fn prefix_keyword_matches_inflections() {
        let kb = make_kb(&[("discrimination", &[("discriminat*", 1.0)])], &[]);
        let clf = CategoryClassifier::new(&kb, 0.0);
        for text in ["discriminated", "Discrimination!", "discriminatie op het werk"] {
            assert_eq!(names(&clf.classify(&tokens(&kb, text))), vec!["discrimination"], "{text}");
        }
        assert!(clf.classify(&tokens(&kb, "discrimin")).is_empty());
    }

    #[test]
    fn phrase_must_be_contiguous() {
        let kb = make_kb(&[("equality", &[("gelijke behandeling", 2.0)])], &[]);
        let clf = CategoryClassifier::new(&kb, 0.0);
        assert_eq!(clf.classify(&tokens(&kb, "recht op gelijke behandeling")).len(), 1);
        assert!(clf.classify(&tokens(&kb, "gelijke en eerlijke behandeling")).is_empty());
        assert!(clf.classify(&tokens(&kb, "behandeling gelijke")).is_empty());
    }

    #[test]
    fn phrase_longer_than_query() {
        let kb = make_kb(&[("equality", &[("equal treatment act", 1.0)])], &[]);
        let clf = CategoryClassifier::new(&kb, 0.0);
        assert!(clf.classify(&tokens(&kb, "equal")).is_empty());
    }

    // ── Scoring ──

    #[test]
    fn score_sums_distinct_keywords_once() {
        let kb = make_kb(&[("employment", &[("werk", 1.0), ("ontslag", 2.5)])], &[]);
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(&kb, "ontslag ontslag werk werk werk"));
        assert_eq!(result[0].score, 3.5);
        assert_eq!(result[0].matched_keywords, vec!["werk", "ontslag"]);
    }

    #[test]
    fn ranked_by_score_descending() {
        let kb = make_kb(
            &[
                ("civil", &[("contract", 1.0)]),
                ("employment", &[("contract", 1.0), ("werkgever", 2.0)]),
            ],
            &[],
        );
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(&kb, "werkgever breekt contract"));
        assert_eq!(names(&result), vec!["employment", "civil"]);
    }

    #[test]
    fn ties_keep_configuration_order() {
        let kb = make_kb(
            &[
                ("zeta", &[("boete", 1.0)]),
                ("alpha", &[("boete", 1.0)]),
                ("mid", &[("boete", 1.0)]),
            ],
            &[],
        );
        let clf = CategoryClassifier::new(&kb, 0.0);
        for _ in 0..3 {
            assert_eq!(
                names(&clf.classify(&tokens(&kb, "boete"))),
                vec!["zeta", "alpha", "mid"]
            );
        }
    }

    #[test]
    fn threshold_is_strict() {
        let kb = make_kb(
            &[("low", &[("boete", 1.0)]), ("high", &[("boete", 1.0), ("politie", 1.0)])],
            &[],
        );
        let clf = CategoryClassifier::new(&kb, 1.0);
        assert_eq!(names(&clf.classify(&tokens(&kb, "boete politie"))), vec!["high"]);
    }

    #[test]
    fn no_hit_is_empty_not_error() {
        let kb = make_kb(&[("tenancy", &[("huur", 1.0)])], &[]);
        let clf = CategoryClassifier::new(&kb, 0.0);
        assert!(clf.classify(&tokens(&kb, "hello world")).is_empty());
        assert!(clf.classify(&[]).is_empty());
    }

    // ── Related expansion ──

    #[test]
    fn expansion_appends_related_in_config_order() {
        let kb = make_kb(
            &[
                ("civil", &[("contract", 1.0)]),
                ("constitutional", &[("grondwet", 1.0)]),
                ("employment", &[("werk", 1.0)]),
                ("discrimination", &[("pesten", 1.0)]),
            ],
            &[
                ("discrimination", &["employment", "constitutional"]),
                ("employment", &["civil", "discrimination"]),
            ],
        );
        let clf = CategoryClassifier::new(&kb, 0.0);
        let matched = clf.classify(&tokens(&kb, "pesten"));
        let expanded = expand_related(&kb, matched);
        assert_eq!(
            names(&expanded),
            vec!["discrimination", "constitutional", "employment"]
        );
        assert_eq!(expanded[1].score, 0.0);
        assert!(expanded[1].matched_keywords.is_empty());
    }

    #[test]
    fn expansion_skips_already_matched() {
        let kb = make_kb(
            &[("employment", &[("werk", 1.0)]), ("discrimination", &[("pesten", 1.0)])],
            &[("employment", &["discrimination"]), ("discrimination", &["employment"])],
        );
        let clf = CategoryClassifier::new(&kb, 0.0);
        let expanded = expand_related(&kb, clf.classify(&tokens(&kb, "pesten werk")));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn expansion_of_nothing_is_nothing() {
        let kb = make_kb(&[("employment", &[("werk", 1.0)])], &[("employment", &[])]);
        assert!(expand_related(&kb, vec![]).is_empty());
    }

    // ── Named statutes ──

    fn statute(id: &str, name: &str, citation: &str) -> LawRecord {
        LawRecord::from_metadata(Metadata {
            name_of_law: name.into(),
            citation_title: citation.into(),
            identification_number: id.into(),
            legal_domain: "Test Law".into(),
            regulatory_authority: "Ministerie van Justitie en Veiligheid".into(),
            date_of_entry_into_force: NaiveDate::from_ymd_opt(1992, 1, 1).unwrap(),
            version: "1".into(),
            status: LawStatus::InForce,
        })
    }

    fn statute_kb() -> KnowledgeBase {
        let spec = |name: &str, laws: &[&str], keyword: &str| CategorySpec {
            name: name.into(),
            template: AdviceTemplate::Generic,
            laws: laws.iter().map(|s| s.to_string()).collect(),
            related: vec![],
            keywords: vec![KeywordSpec::Plain(keyword.into())],
        };
        KnowledgeBase::new(
            vec![
                statute("BWBR0005537", "Algemene wet bestuursrecht", "Awb"),
                statute("BWBR0005291", "Burgerlijk Wetboek", "BW"),
                statute("BWBR0009405", "Wet op de arbeidsovereenkomst", "BW7"),
            ],
            &[
                spec("tenancy", &["BWBR0009405", "BWBR0005291"], "huur"),
                spec("civil", &["BWBR0005291"], "contract"),
                spec("administrative", &["BWBR0005537"], "vergunning"),
            ],
            Normalizer::default(),
        )
        .unwrap()
    }

    #[test]
    fn citation_title_names_statute() {
        let kb = statute_kb();
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(&kb, "Kan ik beroep instellen op grond van de Awb?"));
        assert_eq!(names(&result), vec!["administrative"]);
        assert_eq!(result[0].score, LEADING_LAW_MENTION_WEIGHT);
        assert_eq!(result[0].matched_keywords, vec!["Awb"]);
    }

    #[test]
    fn full_name_names_statute() {
        let kb = statute_kb();
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(
            &kb,
            "Hoe maak ik een testament volgens het Burgerlijk Wetboek?",
        ));
        assert_eq!(names(&result), vec!["civil", "tenancy"]);
        assert_eq!(result[0].score, LEADING_LAW_MENTION_WEIGHT);
        assert_eq!(result[1].score, OTHER_LAW_MENTION_WEIGHT);
        assert_eq!(result[0].matched_keywords, vec!["Burgerlijk Wetboek"]);
    }

    #[test]
    fn mention_adds_to_keyword_score() {
        let kb = statute_kb();
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(&kb, "huur en artikel 7:232 BW"));
        assert_eq!(names(&result), vec!["tenancy", "civil"]);
        assert_eq!(result[0].score, 1.0 + OTHER_LAW_MENTION_WEIGHT);
        assert_eq!(result[0].matched_keywords, vec!["huur", "BW"]);
    }

    #[test]
    fn citation_is_a_whole_token() {
        let kb = statute_kb();
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(&kb, "wat regelt BW7"));
        assert_eq!(names(&result), vec!["tenancy"]);
        assert_eq!(result[0].matched_keywords, vec!["BW7"]);
    }

    #[test]
    fn named_statute_reported_once() {
        let kb = statute_kb();
        let clf = CategoryClassifier::new(&kb, 0.0);
        let result = clf.classify(&tokens(&kb, "Awb algemene wet bestuursrecht awb"));
        assert_eq!(result[0].score, LEADING_LAW_MENTION_WEIGHT);
    }
}
