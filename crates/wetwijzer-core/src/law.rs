//! MCP law records: one piece of Dutch legislation described in eight sections.
//!
//! Only `identificationAndBasicData` is required. The other seven sections
//! default to empty so curated records can be filled in incrementally.
//! Section keys are camelCase; the metadata block keeps the snake_case keys
//! used by the reference projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawStatus {
    #[serde(alias = "In force", alias = "in-force")]
    InForce,
    #[serde(alias = "Repealed")]
    Repealed,
    #[serde(alias = "Future")]
    Future,
}

impl LawStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InForce => "in_force",
            Self::Repealed => "repealed",
            Self::Future => "future",
        }
    }
}

/// Identifying metadata for a law. The only block the analyzer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name_of_law: String,
    pub citation_title: String,
    /// BWB ID, e.g. `BWBR0005537`. Unique across the knowledge base.
    pub identification_number: String,
    pub legal_domain: String,
    pub regulatory_authority: String,
    pub date_of_entry_into_force: NaiveDate,
    pub version: String,
    pub status: LawStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HierarchicalPosition {
    pub relationship_to_constitution: Option<String>,
    pub relationship_to_eu_law: Option<String>,
    pub relationship_to_international_treaties: Option<String>,
    pub position_within_national_legislation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationAndBasicData {
    pub metadata: Metadata,
    #[serde(default)]
    pub hierarchical_position: HierarchicalPosition,
}

// ── Historical context ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amendment {
    pub date: NaiveDate,
    pub description: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedAmendment {
    pub date: NaiveDate,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegislativeHistory {
    pub initiator: Option<String>,
    pub reason: Option<String>,
    pub bill: Option<String>,
    pub parliamentary_treatment: Option<String>,
    pub important_changes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmendmentHistory {
    pub amendments: Vec<Amendment>,
    pub planned_amendments: Vec<PlannedAmendment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricalContext {
    pub legislative_history: LegislativeHistory,
    pub amendment_history: AmendmentHistory,
}

// ── Content mapping ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreProvision {
    pub article: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuralOverview {
    pub chapter_structure: Option<String>,
    pub core_provisions: Vec<CoreProvision>,
    pub definitions: Vec<Definition>,
    pub delegation_provisions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptualCategory {
    pub category: String,
    #[serde(default)]
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemanticRelationships {
    pub conceptual_categories: Vec<ConceptualCategory>,
    pub legal_relationships: Option<String>,
    pub procedural_flowcharts: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentMapping {
    pub structural_overview: StructuralOverview,
    pub semantic_relationships: SemanticRelationships,
}

// ── Interpretative context ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkCase {
    pub case: String,
    pub reference: String,
    pub significance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseLaw {
    pub landmark_cases: Vec<LandmarkCase>,
    pub supreme_court_opinions: Vec<String>,
    pub international_case_law: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Doctrine {
    pub key_literature: Vec<String>,
    pub academic_views: Option<String>,
    pub relevant_annotations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterpretativeContext {
    pub case_law: CaseLaw,
    pub doctrine: Doctrine,
}

// ── Practical application ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImplementationPractice {
    pub responsible_authorities: Vec<String>,
    pub policy_rules: Vec<String>,
    pub supervision_and_enforcement: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocietalImpact {
    pub target_groups: Vec<String>,
    pub practical_issues: Vec<String>,
    pub evaluations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticalApplication {
    pub implementation_practice: ImplementationPractice,
    pub societal_impact: SocietalImpact,
}

// ── Digital integration ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalSpecifications {
    pub api_access: Option<String>,
    pub linked_data: Option<String>,
    pub persistent_identifiers: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInteraction {
    pub visualization_tools: Vec<String>,
    pub search_methods: Vec<String>,
    pub notification_systems: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitalIntegration {
    pub technical_specifications: TechnicalSpecifications,
    pub user_interaction: UserInteraction,
}

// ── Future perspective ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannedDevelopments {
    pub intended_changes: Vec<String>,
    pub current_policy_discussions: Vec<String>,
    pub innovative_applications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RisksAndOpportunities {
    pub identified_gaps: Vec<String>,
    pub technological_challenges: Vec<String>,
    pub harmonization_possibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuturePerspective {
    pub planned_developments: PlannedDevelopments,
    pub risks_and_opportunities: RisksAndOpportunities,
}

// ── Accessibility ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinguisticAspects {
    pub readability_index: Option<String>,
    pub alternatives_in_plain_language: Option<String>,
    pub multilingual_versions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inclusivity {
    pub accessibility_for_people_with_disabilities: Option<String>,
    pub cultural_context: Option<String>,
    pub educational_resources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accessibility {
    pub linguistic_aspects: LinguisticAspects,
    pub inclusivity: Inclusivity,
}

/// A single law in the knowledge base, structured per the eight-section MCP schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawRecord {
    pub identification_and_basic_data: IdentificationAndBasicData,
    #[serde(default)]
    pub historical_context: HistoricalContext,
    #[serde(default)]
    pub content_mapping: ContentMapping,
    #[serde(default)]
    pub interpretative_context: InterpretativeContext,
    #[serde(default)]
    pub practical_application: PracticalApplication,
    #[serde(default)]
    pub digital_integration: DigitalIntegration,
    #[serde(default)]
    pub future_perspective: FuturePerspective,
    #[serde(default)]
    pub accessibility: Accessibility,
}

impl LawRecord {
    /// Build a record with only the metadata block populated.
    pub fn from_metadata(metadata: Metadata) -> Self {
        Self {
            identification_and_basic_data: IdentificationAndBasicData {
                metadata,
                hierarchical_position: HierarchicalPosition::default(),
            },
            historical_context: HistoricalContext::default(),
            content_mapping: ContentMapping::default(),
            interpretative_context: InterpretativeContext::default(),
            practical_application: PracticalApplication::default(),
            digital_integration: DigitalIntegration::default(),
            future_perspective: FuturePerspective::default(),
            accessibility: Accessibility::default(),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.identification_and_basic_data.metadata
    }

    /// BWB ID of this law.
    pub fn id(&self) -> &str {
        &self.metadata().identification_number
    }

    pub fn name(&self) -> &str {
        &self.metadata().name_of_law
    }

    /// Check that every required metadata field carries a value.
    ///
    /// Returns the name of the first blank field.
    pub fn blank_required_field(&self) -> Option<&'static str> {
        let m = self.metadata();
        [
            ("identification_number", &m.identification_number),
            ("name_of_law", &m.name_of_law),
            ("citation_title", &m.citation_title),
            ("legal_domain", &m.legal_domain),
            ("regulatory_authority", &m.regulatory_authority),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty())
        .map(|(field, _)| field)
    }
}
