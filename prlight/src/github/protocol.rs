// GitHub Search API - Antwort-Typen
//
// Nur die Felder, die für die Auswertung gebraucht werden. Unbekannte Felder
// ignoriert serde. Ohne `items` ist die Antwort kein Suchergebnis (z.B. eine
// Fehlermeldung mit Status 200) und gilt als ungültig.

use serde::Deserialize;

/// Antwort von `GET /search/issues`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<Item>,
}

/// Ein gefundener Pull Request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: String,
}

impl SearchResult {
    /// Mindestens ein offener Pull Request mit fehlgeschlagenem Status
    pub fn is_failing(&self) -> bool {
        !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failing_result() {
        let json = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "number": 42,
                "url": "https://api.github.com/repos/octo/app/issues/42",
                "title": "Fix the build",
                "user": { "login": "octocat", "id": 1 },
                "state": "open"
            }]
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert!(result.is_failing());
        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].number, 42);
        assert_eq!(result.items[0].user.login, "octocat");
    }

    #[test]
    fn test_parse_empty_result() {
        let json = r#"{"total_count": 0, "incomplete_results": false, "items": []}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_failing());
    }

    #[test]
    fn test_missing_items_is_rejected() {
        assert!(serde_json::from_str::<SearchResult>("{}").is_err());
        assert!(serde_json::from_str::<SearchResult>(r#"{"message": "Bad credentials"}"#).is_err());
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        assert!(serde_json::from_str::<SearchResult>(r#"{"items": 3}"#).is_err());
    }
}
