use serde::Deserialize;

/// One item of a catalog listing response.
///
/// Every level of the catalog (years, terms, departments, course numbers,
/// sections) answers with a JSON array of these objects; only a subset of
/// the optional fields is populated at any given level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub text: String,
    pub value: String,
    /// Department display name, e.g. "Computing Science"
    #[serde(default)]
    pub name: Option<String>,
    /// Course title, e.g. "Social Issues and Communication Technology"
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub class_type: Option<String>,
    #[serde(default)]
    pub section_code: Option<String>,
    #[serde(default)]
    pub associated_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_listing() {
        let json = r#"[
            { "text": "2024", "value": "2024" },
            { "text": "2025", "value": "2025" }
        ]"#;

        let entries: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "2024");
        assert_eq!(entries[0].name, None);
    }

    #[test]
    fn test_term_listing() {
        let json = r#"[
            { "text": "FALL", "value": "fall" },
            { "text": "SPRING", "value": "spring" },
            { "text": "SUMMER", "value": "summer" }
        ]"#;

        let entries: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].text, "FALL");
        assert_eq!(entries[0].value, "fall");
    }

    #[test]
    fn test_section_listing_extra_fields() {
        let json = r#"[{
            "text": "D100",
            "value": "d100",
            "title": "Intro to Computing",
            "classType": "e",
            "sectionCode": "LEC",
            "associatedClass": "1"
        }]"#;

        let entries: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();
        let section = &entries[0];
        assert_eq!(section.class_type.as_deref(), Some("e"));
        assert_eq!(section.section_code.as_deref(), Some("LEC"));
        assert_eq!(section.associated_class.as_deref(), Some("1"));
    }
}
