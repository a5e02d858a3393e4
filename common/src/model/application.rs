use serde::{Deserialize, Serialize};

/// Storage bucket that receives supporting documents.
pub const DOCUMENTS_BUCKET: &str = "scholarship-documents";

/// Table that receives one row per submitted application.
pub const APPLICATIONS_TABLE: &str = "scholarship_applications";

/// File extensions offered by the document picker. This is a hint for the
/// picker only; uploads are not re-checked against it.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "jpg", "jpeg", "png"];

/// The record written to the `scholarship_applications` table.
///
/// Field names are the snake_case column names of the existing data store and
/// must not be renamed.
///
/// `num_students` is `None` when the form text did not start with an integer;
/// it is serialized as `null` in that case. `document_url` is either a public
/// URL returned by the storage collaborator or `null`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub num_students: Option<i64>,
    pub grade_level: String,
    pub reason: String,
    #[serde(default)]
    pub document_url: Option<String>,
    pub confirmed: bool,
}

/// Builds the `accept` attribute value for the document picker.
pub fn accept_filter() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_document_url_serializes_as_null() {
        let record = ApplicationRecord {
            organization_name: "Hill School".into(),
            contact_person: "Sam Reyes".into(),
            email: "sam@hill.org".into(),
            phone: "555-0100".into(),
            num_students: Some(12),
            grade_level: "6-8".into(),
            reason: "Budget cuts".into(),
            document_url: None,
            confirmed: true,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value["document_url"].is_null());
        assert_eq!(value["num_students"], 12);
        assert_eq!(value["organization_name"], "Hill School");
        assert_eq!(value.as_object().unwrap().len(), 9);
    }

    #[test]
    fn missing_document_url_defaults_to_none() {
        let json = r#"{
            "organization_name": "a", "contact_person": "b", "email": "c@d.e",
            "phone": "1", "num_students": null, "grade_level": "K-2",
            "reason": "r", "confirmed": true
        }"#;
        let record: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.document_url, None);
        assert_eq!(record.num_students, None);
    }

    #[test]
    fn accept_filter_lists_every_extension() {
        assert_eq!(accept_filter(), ".pdf,.doc,.docx,.jpg,.jpeg,.png");
    }
}
