//! The camp record as it appears in the JSON datasets.

use serde::{Deserialize, Serialize};

/// One catalog entry describing a summer program.
///
/// Only `name` is required. Every other field is optional free text exactly as
/// it was entered in the source spreadsheet; the parsers in [`crate::parse`]
/// make sense of it on demand. Unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampRecord {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub camp_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
}

impl CampRecord {
    /// Creates a record with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        CampRecord {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns `true` if the record belongs to the school-district listing.
    pub fn is_school_district(&self) -> bool {
        self.district.is_some()
    }

    /// Stable identity used by the favorites list.
    ///
    /// The bare name, suffixed with `_<category>` (or `_<district>` when no
    /// category is set) so that a community camp and a district program with
    /// the same name stay distinct.
    pub fn favorite_id(&self) -> String {
        let suffix = [self.category.as_deref(), self.district.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty());
        match suffix {
            Some(suffix) => format!("{}_{}", self.name, suffix),
            None => self.name.clone(),
        }
    }

    /// Text fields the search box looks at, in evaluation order.
    pub(crate) fn search_fields(&self) -> [Option<&str>; 4] {
        [
            Some(self.name.as_str()),
            self.camp_type.as_deref(),
            self.location.as_deref(),
            self.notes.as_deref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_and_type() {
        let json = r#"{
            "name": "Camp X",
            "type": "Day Camp",
            "registrationDate": "Feb 1",
            "unexpected": 42
        }"#;
        let record: CampRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Camp X");
        assert_eq!(record.camp_type.as_deref(), Some("Day Camp"));
        assert_eq!(record.registration_date.as_deref(), Some("Feb 1"));
        assert!(record.ages.is_none());
    }

    #[test]
    fn serializes_without_empty_fields() {
        let mut record = CampRecord::new("Camp X");
        record.camp_type = Some("Day Camp".into());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Camp X","type":"Day Camp"}"#);
    }

    #[test]
    fn favorite_id_suffixes() {
        let plain = CampRecord::new("Camp X");
        assert_eq!(plain.favorite_id(), "Camp X");

        let mut district = CampRecord::new("Camp X");
        district.district = Some("Austin ISD".into());
        assert_eq!(district.favorite_id(), "Camp X_Austin ISD");
        assert!(district.is_school_district());

        let mut both = district.clone();
        both.category = Some("STEM".into());
        assert_eq!(both.favorite_id(), "Camp X_STEM");
    }
}
