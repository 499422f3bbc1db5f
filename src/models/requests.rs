use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::MentorFilters;

/// Request to match mentors for a mentee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchMentorsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

/// Query parameters for the mentor directory listing
///
/// Each filter is a comma-separated list, e.g. `?industries=TECHNOLOGY,FINANCE`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorListQuery {
    #[serde(default)]
    pub industries: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub languages: Option<String>,
}

impl MentorListQuery {
    /// Parse the comma-separated query values into typed filters.
    ///
    /// Unknown industry tags are dropped, matching nothing rather than
    /// failing the request.
    pub fn into_filters(self) -> MentorFilters {
        MentorFilters {
            industries: split_csv(self.industries.as_deref())
                .iter()
                .filter_map(|tag| tag.parse().ok())
                .collect(),
            skills: split_csv(self.skills.as_deref()),
            languages: split_csv(self.languages.as_deref()),
        }
    }
}

fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Industry;

    #[test]
    fn test_into_filters_parses_csv() {
        let query = MentorListQuery {
            industries: Some("TECHNOLOGY,FINANCE".to_string()),
            skills: Some("React, SQL".to_string()),
            languages: None,
        };

        let filters = query.into_filters();
        assert_eq!(filters.industries, vec![Industry::Technology, Industry::Finance]);
        assert_eq!(filters.skills, vec!["React", "SQL"]);
        assert!(filters.languages.is_empty());
    }

    #[test]
    fn test_into_filters_drops_unknown_industries() {
        let query = MentorListQuery {
            industries: Some("TECHNOLOGY,BASKET_WEAVING".to_string()),
            skills: None,
            languages: None,
        };

        let filters = query.into_filters();
        assert_eq!(filters.industries, vec![Industry::Technology]);
    }

    #[test]
    fn test_empty_query_is_empty_filters() {
        let filters = MentorListQuery::default().into_filters();
        assert!(filters.is_empty());
    }
}
