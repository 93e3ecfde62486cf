//! Knowledge-base loading from a data directory or the built-in corpus.
//!
//! A data directory holds:
//!
//! - `categories.toml`: optional `[normalizer]` table and `[[category]]` tables
//! - `laws/*.json`: one MCP law record or an array of records per file
//!
//! Law files are read in file-name order so load order is stable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};
use wetwijzer_core::{CategorySpec, KnowledgeBase, LawRecord, Normalizer};

use crate::StoreError;

pub const CATEGORIES_FILE: &str = "categories.toml";
pub const LAWS_DIR: &str = "laws";

const BUILTIN_LAWS: &str = include_str!("../data/laws.json");
const BUILTIN_CATEGORIES: &str = include_str!("../data/categories.toml");

#[derive(Debug, Default, Deserialize)]
struct NormalizerSection {
    stop_words: Option<Vec<String>>,
}

/// Parsed `categories.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryConfig {
    #[serde(default)]
    normalizer: NormalizerSection,
    #[serde(default, rename = "category")]
    pub categories: Vec<CategorySpec>,
}

impl CategoryConfig {
    /// The normalizer this configuration asks for: its own stop-word list
    /// when given, the default list otherwise.
    pub fn normalizer(&self) -> Normalizer {
        match &self.normalizer.stop_words {
            Some(words) => Normalizer::with_stop_words(words),
            None => Normalizer::default(),
        }
    }
}

/// Load and validate a knowledge base from a data directory.
pub fn load_dir(data_dir: &Path) -> Result<KnowledgeBase, StoreError> {
    if !data_dir.is_dir() {
        return Err(StoreError::DataDirNotFound(data_dir.to_path_buf()));
    }
    let config = load_categories(&data_dir.join(CATEGORIES_FILE))?;
    let laws = load_laws(&data_dir.join(LAWS_DIR))?;
    let kb = KnowledgeBase::new(laws, &config.categories, config.normalizer())?;
    info!(dir = %data_dir.display(), "loaded knowledge base");
    Ok(kb)
}

/// Load the curated corpus compiled into the binary.
pub fn builtin() -> Result<KnowledgeBase, StoreError> {
    let origin = Path::new("<builtin>");
    let config = parse_categories(BUILTIN_CATEGORIES, origin)?;
    let laws = parse_laws(BUILTIN_LAWS, origin)?;
    Ok(KnowledgeBase::new(
        laws,
        &config.categories,
        config.normalizer(),
    )?)
}

/// Read `categories.toml`.
pub fn load_categories(path: &Path) -> Result<CategoryConfig, StoreError> {
    if !path.exists() {
        return Err(StoreError::CategoriesNotFound(path.to_path_buf()));
    }
    let src = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let config = parse_categories(&src, path)?;
    info!(count = config.categories.len(), "loaded categories");
    Ok(config)
}

/// Read every `*.json` file in `dir`, in file-name order.
pub fn load_laws(dir: &Path) -> Result<Vec<LawRecord>, StoreError> {
    let entries = fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| StoreError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut laws = Vec::new();
    for path in &paths {
        let src = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let records = parse_laws(&src, path)?;
        debug!(file = %path.display(), count = records.len(), "read law file");
        laws.extend(records);
    }

    if laws.is_empty() {
        return Err(StoreError::NoLaws(dir.to_path_buf()));
    }
    info!(count = laws.len(), files = paths.len(), "loaded law records");
    Ok(laws)
}

/// Parse one law file: a single record object or an array of records.
pub fn parse_laws(src: &str, origin: &Path) -> Result<Vec<LawRecord>, StoreError> {
    let json_err = |source| StoreError::Json {
        path: origin.to_path_buf(),
        source,
    };
    let value: serde_json::Value = serde_json::from_str(src).map_err(json_err)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(json_err)
    } else {
        serde_json::from_value(value).map(|law| vec![law]).map_err(json_err)
    }
}

pub fn parse_categories(src: &str, origin: &Path) -> Result<CategoryConfig, StoreError> {
    toml::from_str(src).map_err(|source| StoreError::Toml {
        path: origin.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wetwijzer_core::{AdviceTemplate, LawStatus};

    const LAW_A: &str = r#"{
        "identificationAndBasicData": {
            "metadata": {
                "name_of_law": "Uitvoeringswet huurprijzen woonruimte",
                "citation_title": "Uhw",
                "identification_number": "BWBR0014315",
                "legal_domain": "Tenancy Law",
                "regulatory_authority": "Ministerie van Volkshuisvesting en Ruimtelijke Ordening",
                "date_of_entry_into_force": "2003-07-01",
                "version": "2024-07-01",
                "status": "in_force"
            }
        }
    }"#;

    const CATEGORIES: &str = r#"
[normalizer]
stop_words = ["mijn", "de"]

[[category]]
name = "tenant rights"
template = "tenant_rights"
laws = ["BWBR0014315", "BWBR9999999"]
keywords = ["huur", { phrase = "huurcommissie", weight = 3.0 }]
"#;

    fn write_dir(laws: &[(&str, &str)], categories: Option<&str>) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(LAWS_DIR)).unwrap();
        for (name, body) in laws {
            fs::write(dir.path().join(LAWS_DIR).join(name), body).unwrap();
        }
        if let Some(c) = categories {
            fs::write(dir.path().join(CATEGORIES_FILE), c).unwrap();
        }
        dir
    }

    #[test]
    fn loads_directory() {
        let dir = write_dir(&[("a.json", LAW_A)], Some(CATEGORIES));
        let kb = load_dir(dir.path()).unwrap();

        assert_eq!(kb.laws().len(), 1);
        assert_eq!(kb.law("BWBR0014315").unwrap().metadata().status, LawStatus::InForce);
        let cat = kb.category("tenant rights").unwrap();
        assert_eq!(cat.template, AdviceTemplate::TenantRights);
        assert_eq!(cat.keywords[1].weight, 3.0);
        assert_eq!(kb.normalizer().stop_word_count(), 2);
        assert_eq!(kb.dangling_references().len(), 1);
    }

    #[test]
    fn array_files_and_name_order() {
        let law_b = LAW_A
            .replace("BWBR0014315", "BWBR0005291")
            .replace("Uitvoeringswet huurprijzen woonruimte", "Burgerlijk Wetboek");
        let wrapped = format!("[{LAW_A}]");
        let dir = write_dir(
            &[
                ("b.json", wrapped.as_str()),
                ("a.json", law_b.as_str()),
                ("notes.txt", "ignored"),
            ],
            Some(CATEGORIES),
        );
        let kb = load_dir(dir.path()).unwrap();
        let ids: Vec<&str> = kb.laws().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["BWBR0005291", "BWBR0014315"]);
    }

    #[test]
    fn missing_categories_file() {
        let dir = write_dir(&[("a.json", LAW_A)], None);
        assert!(matches!(
            load_dir(dir.path()),
            Err(StoreError::CategoriesNotFound(_))
        ));
    }

    #[test]
    fn missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_dir(&missing),
            Err(StoreError::DataDirNotFound(_))
        ));
    }

    #[test]
    fn empty_laws_dir_rejected() {
        let dir = write_dir(&[], Some(CATEGORIES));
        assert!(matches!(load_dir(dir.path()), Err(StoreError::NoLaws(_))));
    }

    #[test]
    fn malformed_record_names_file() {
        let dir = write_dir(&[("broken.json", r#"{"identificationAndBasicData": {}}"#)], Some(CATEGORIES));
        match load_dir(dir.path()) {
            Err(StoreError::Json { path, .. }) => assert!(path.ends_with("broken.json")),
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_across_files_rejected() {
        let dir = write_dir(&[("a.json", LAW_A), ("b.json", LAW_A)], Some(CATEGORIES));
        assert!(matches!(
            load_dir(dir.path()),
            Err(StoreError::KnowledgeBase(_))
        ));
    }

    #[test]
    fn invalid_toml_reported() {
        let dir = write_dir(&[("a.json", LAW_A)], Some("[[category]]\nname = 5"));
        assert!(matches!(load_dir(dir.path()), Err(StoreError::Toml { .. })));
    }

    #[test]
    fn default_normalizer_without_section() {
        let config = parse_categories("[[category]]\nname = \"tax\"", Path::new("x")).unwrap();
        assert_eq!(
            config.normalizer().stop_word_count(),
            Normalizer::default().stop_word_count()
        );
    }

    #[test]
    fn builtin_corpus_is_consistent() {
        let kb = builtin().unwrap();
        let summary = kb.summary();
        assert_eq!(summary.law_count, 8);
        assert_eq!(summary.dangling_references, 0);
        assert!(summary.category_count >= 8);
        for category in kb.categories() {
            assert!(!category.keywords.is_empty(), "{} has no keywords", category.name);
            assert!(!category.law_ids.is_empty(), "{} maps no laws", category.name);
        }
    }
}
