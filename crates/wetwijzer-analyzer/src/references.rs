//! Citation projections of matched law records.

use wetwijzer_core::{LawRecord, LawSummary, Reference};

/// Date format used in references and reports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One reference per law, in the same order.
pub fn resolve_references(laws: &[&LawRecord]) -> Vec<Reference> {
    laws.iter().map(|law| to_reference(law)).collect()
}

pub fn to_reference(law: &LawRecord) -> Reference {
    let m = law.metadata();
    Reference {
        name_of_law: m.name_of_law.clone(),
        citation_title: m.citation_title.clone(),
        identification_number: m.identification_number.clone(),
        legal_domain: m.legal_domain.clone(),
        date_of_entry_into_force: m.date_of_entry_into_force.format(DATE_FORMAT).to_string(),
        regulatory_authority: m.regulatory_authority.clone(),
    }
}

pub fn summarize(law: &LawRecord) -> LawSummary {
    let m = law.metadata();
    LawSummary {
        identification_number: m.identification_number.clone(),
        name_of_law: m.name_of_law.clone(),
        citation_title: m.citation_title.clone(),
        status: m.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wetwijzer_core::{LawStatus, Metadata};

    fn law(id: &str, date: NaiveDate) -> LawRecord {
        LawRecord::from_metadata(Metadata {
            name_of_law: "Burgerlijk Wetboek".into(),
            citation_title: "BW".into(),
            identification_number: id.into(),
            legal_domain: "Civil Law".into(),
            regulatory_authority: "Ministerie van Justitie en Veiligheid".into(),
            date_of_entry_into_force: date,
            version: "2024-01-01".into(),
            status: LawStatus::Repealed,
        })
    }

    #[test]
    fn reference_copies_metadata() {
        let record = law("BWBR0005291", NaiveDate::from_ymd_opt(1992, 1, 1).unwrap());
        let r = to_reference(&record);
        assert_eq!(r.identification_number, "BWBR0005291");
        assert_eq!(r.citation_title, "BW");
        assert_eq!(r.date_of_entry_into_force, "1992-01-01");
        assert_eq!(r.regulatory_authority, "Ministerie van Justitie en Veiligheid");
    }

    #[test]
    fn date_is_zero_padded() {
        let record = law("BWBR1", NaiveDate::from_ymd_opt(815, 3, 4).unwrap());
        assert_eq!(to_reference(&record).date_of_entry_into_force, "0815-03-04");
    }

    #[test]
    fn references_follow_law_order() {
        let a = law("BWBR2", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let b = law("BWBR1", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let refs = resolve_references(&[&a, &b]);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].identification_number, "BWBR2");
        assert_eq!(refs[1].identification_number, "BWBR1");
        assert!(resolve_references(&[]).is_empty());
    }

    #[test]
    fn summary_keeps_status() {
        let record = law("BWBR1", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let s = summarize(&record);
        assert_eq!(s.status, LawStatus::Repealed);
        assert_eq!(s.name_of_law, "Burgerlijk Wetboek");
    }
}
