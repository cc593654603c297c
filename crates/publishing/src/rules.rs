//! Validation rules applied by the catalog.

use serde::{Deserialize, Serialize};

use masthead_core::{DomainError, DomainResult};

/// Length limits and thresholds for the publishing model.
///
/// Lengths count characters, not bytes. Missing fields in a JSON override
/// fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRules {
    pub title_min_len: usize,
    pub title_max_len: usize,
    pub magazine_name_min_len: usize,
    pub magazine_name_max_len: usize,
    /// A contributing author has strictly more articles than this.
    pub contributor_threshold: usize,
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self {
            title_min_len: 5,
            title_max_len: 50,
            magazine_name_min_len: 2,
            magazine_name_max_len: 16,
            contributor_threshold: 2,
        }
    }
}

impl CatalogRules {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let rules: Self = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("catalog rules: {e}")))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.title_min_len == 0 {
            return Err(DomainError::validation("title_min_len must be at least 1"));
        }
        if self.title_min_len > self.title_max_len {
            return Err(DomainError::validation(
                "title_min_len cannot exceed title_max_len",
            ));
        }
        if self.magazine_name_min_len == 0 {
            return Err(DomainError::validation(
                "magazine_name_min_len must be at least 1",
            ));
        }
        if self.magazine_name_min_len > self.magazine_name_max_len {
            return Err(DomainError::validation(
                "magazine_name_min_len cannot exceed magazine_name_max_len",
            ));
        }
        Ok(())
    }

    pub fn check_title(&self, title: &str) -> DomainResult<()> {
        check_len("title", title, self.title_min_len, self.title_max_len)
    }

    pub fn check_magazine_name(&self, name: &str) -> DomainResult<()> {
        check_len(
            "magazine name",
            name,
            self.magazine_name_min_len,
            self.magazine_name_max_len,
        )
    }
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(DomainError::validation(format!(
            "{field} must be between {min} and {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Shared non-empty check for author names and magazine categories.
pub(crate) fn check_non_empty(field: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_publishing_limits() {
        let rules = CatalogRules::default();
        assert_eq!(rules.title_min_len, 5);
        assert_eq!(rules.title_max_len, 50);
        assert_eq!(rules.magazine_name_min_len, 2);
        assert_eq!(rules.magazine_name_max_len, 16);
        assert_eq!(rules.contributor_threshold, 2);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn title_bounds_are_inclusive() {
        let rules = CatalogRules::default();
        assert!(rules.check_title("abcd").is_err());
        assert!(rules.check_title("abcde").is_ok());
        assert!(rules.check_title(&"x".repeat(50)).is_ok());
        assert!(rules.check_title(&"x".repeat(51)).is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let rules = CatalogRules::default();
        // 2 characters, 4 bytes.
        assert!(rules.check_magazine_name("éé").is_ok());
        // 16 characters, 32 bytes.
        assert!(rules.check_magazine_name(&"é".repeat(16)).is_ok());
        assert!(rules.check_magazine_name(&"é".repeat(17)).is_err());
    }

    #[test]
    fn partial_json_override_keeps_other_defaults() {
        let rules = CatalogRules::from_json(r#"{ "contributor_threshold": 1 }"#).unwrap();
        assert_eq!(rules.contributor_threshold, 1);
        assert_eq!(rules.title_max_len, 50);
    }

    #[test]
    fn from_json_rejects_inverted_bounds() {
        let err = CatalogRules::from_json(r#"{ "title_min_len": 60 }"#).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = CatalogRules::from_json("{ not json").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.starts_with("catalog rules")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn non_empty_check_names_the_field() {
        let err = check_non_empty("category", "").unwrap_err();
        assert_eq!(err, DomainError::validation("category cannot be empty"));
        assert!(check_non_empty("category", " ").is_ok());
    }
}
