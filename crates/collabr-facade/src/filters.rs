//! Normalization of raw creator-browsing form input into a remote query.
//!
//! Form fields arrive as strings. An empty string means "no constraint on
//! this dimension" — never zero, which would silently filter out every
//! creator when a user clears a numeric field. Malformed numeric input is
//! likewise treated as no constraint rather than raised as an error.

use collabr_api::CreatorQuery;

/// Raw filter input as typed into the browsing form. All fields are strings;
/// normalization decides what constitutes a constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorFilters {
    pub platform: String,
    pub min_followers: String,
    pub max_followers: String,
    pub min_price: String,
    pub max_price: String,
    pub category: String,
}

impl CreatorFilters {
    /// Produces the remote query: empty strings collapse to unset, non-empty
    /// numeric strings parse to the remote integer type, and text fields are
    /// passed through trimmed.
    #[must_use]
    pub fn normalize(&self) -> CreatorQuery {
        CreatorQuery {
            platform: non_empty(&self.platform),
            min_followers: parse_constraint(&self.min_followers),
            max_followers: parse_constraint(&self.max_followers),
            min_price: parse_constraint(&self.min_price),
            max_price: parse_constraint(&self.max_price),
            category: non_empty(&self.category),
        }
    }
}

/// Trims `raw` and returns it only when something remains.
#[must_use]
fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Parses a numeric constraint. Empty and malformed input both mean
/// "unconstrained".
#[must_use]
fn parse_constraint(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_fields_are_unconstrained() {
        let query = CreatorFilters::default().normalize();
        assert_eq!(query, CreatorQuery::default());
    }

    #[test]
    fn numeric_strings_parse_to_their_integer_value() {
        let filters = CreatorFilters {
            min_followers: "10000".to_owned(),
            max_price: "2500".to_owned(),
            ..CreatorFilters::default()
        };
        let query = filters.normalize();
        assert_eq!(query.min_followers, Some(10_000));
        assert_eq!(query.max_price, Some(2_500));
        assert_eq!(query.max_followers, None);
        assert_eq!(query.min_price, None);
    }

    #[test]
    fn empty_numeric_field_is_unset_not_zero() {
        let filters = CreatorFilters {
            min_followers: String::new(),
            ..CreatorFilters::default()
        };
        assert_eq!(filters.normalize().min_followers, None);
    }

    #[test]
    fn malformed_numeric_field_collapses_to_unset() {
        let filters = CreatorFilters {
            min_followers: "10k".to_owned(),
            max_followers: " 1_000 ".to_owned(),
            ..CreatorFilters::default()
        };
        let query = filters.normalize();
        assert_eq!(query.min_followers, None);
        assert_eq!(query.max_followers, None);
    }

    #[test]
    fn whitespace_only_text_field_is_unset() {
        let filters = CreatorFilters {
            platform: "   ".to_owned(),
            ..CreatorFilters::default()
        };
        assert_eq!(filters.normalize().platform, None);
    }

    #[test]
    fn instagram_with_min_followers_only() {
        let filters = CreatorFilters {
            platform: "instagram".to_owned(),
            min_followers: "10000".to_owned(),
            max_followers: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            category: String::new(),
        };
        let query = filters.normalize();
        assert_eq!(query.platform.as_deref(), Some("instagram"));
        assert_eq!(query.min_followers, Some(10_000));
        assert_eq!(query.max_followers, None);
        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, None);
        assert_eq!(query.category, None);
    }
}
