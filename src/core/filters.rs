use crate::core::scoring::skills_overlap;
use crate::models::{MentorFilters, MentorRecord};

/// Check whether a mentor passes the directory listing filters.
///
/// Each non-empty filter set requires at least one overlap with the mentor's
/// profile. Mentors without a profile only pass when no filters are set.
pub fn matches_filters(mentor: &MentorRecord, filters: &MentorFilters) -> bool {
    if filters.is_empty() {
        return true;
    }

    let profile = match &mentor.profile {
        Some(profile) => profile,
        None => return false,
    };

    if !filters.industries.is_empty()
        && !filters
            .industries
            .iter()
            .any(|industry| profile.industries.contains(industry))
    {
        return false;
    }

    // Skills use the same substring test as scoring
    if !filters.skills.is_empty()
        && !filters.skills.iter().any(|skill| {
            profile
                .skills
                .iter()
                .any(|mentor_skill| skills_overlap(skill, mentor_skill))
        })
    {
        return false;
    }

    if !filters.languages.is_empty()
        && !filters
            .languages
            .iter()
            .any(|language| profile.languages.contains(language))
    {
        return false;
    }

    true
}
