use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CandidateEmail {
    pub value: String,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CandidatePhone {
    pub value: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// An externally sourced contact (Google Contacts entry, calendar attendee, ...)
/// being considered for import or linking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchCandidate {
    pub id: Uuid,
    #[serde(default)]
    pub source: String,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub emails: Vec<CandidateEmail>,
    #[serde(default)]
    pub phones: Vec<CandidatePhone>,
}

impl MatchCandidate {
    /// Create a candidate with only a display name set
    pub fn named(source: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            display_name: Some(display_name.into()),
            first_name: None,
            last_name: None,
            emails: Vec::new(),
            phones: Vec::new(),
        }
    }

    /// The single name used for similarity search and alphabetical ranking.
    ///
    /// Precedence: `display_name`, then `"first last"` when both parts exist,
    /// then whichever part exists, otherwise an empty string.
    pub fn effective_name(&self) -> String {
        if let Some(display_name) = &self.display_name {
            return display_name.clone();
        }

        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        display_name: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> MatchCandidate {
        MatchCandidate {
            id: Uuid::new_v4(),
            source: "google_contacts".to_string(),
            display_name: display_name.map(String::from),
            first_name: first_name.map(String::from),
            last_name: last_name.map(String::from),
            emails: vec![],
            phones: vec![],
        }
    }

    #[test]
    fn test_display_name_wins() {
        let c = candidate(Some("Johnny"), Some("John"), Some("Doe"));
        assert_eq!(c.effective_name(), "Johnny");
    }

    #[test]
    fn test_first_and_last_joined() {
        let c = candidate(None, Some("John"), Some("Doe"));
        assert_eq!(c.effective_name(), "John Doe");
    }

    #[test]
    fn test_single_name_part() {
        assert_eq!(candidate(None, Some("John"), None).effective_name(), "John");
        assert_eq!(candidate(None, None, Some("Doe")).effective_name(), "Doe");
    }

    #[test]
    fn test_no_name_is_empty() {
        assert_eq!(candidate(None, None, None).effective_name(), "");
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "id": "6f1c1d2e-8a4b-4c1e-9d3f-2b7a5e6c8d90",
            "display_name": "Jane Roe",
            "first_name": null,
            "last_name": null,
            "emails": [{"value": "jane@example.com", "kind": "home"}],
            "phones": [{"value": "+1 555 123 4567", "kind": "mobile", "is_primary": true}]
        }"#;

        let c: MatchCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.source, "");
        assert_eq!(c.emails[0].kind.as_deref(), Some("home"));
        assert!(c.phones[0].is_primary);
    }
}
