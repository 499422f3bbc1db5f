use crate::models::{MenteeProfile, MentorProfile, MentorRecord, ScoreBreakdown, ScoringWeights};

/// Score a single mentor against a mentee profile
///
/// Scoring formula (default weights):
/// ```text
/// industry_matches   = 3 * |mentee.industries ∩ mentor.industries|
/// skill_matches      = 2 * |mentee skills with at least one mentor-skill substring match|
/// language_matches   = 1 * |mentee.languages ∩ mentor.languages|
/// availability_bonus = 2 if the mentor filled in an availability note, else 0
/// score              = sum of the four components
/// ```
///
/// Mentors without a profile score zero on every component.
pub fn score_mentor(
    mentee: &MenteeProfile,
    mentor: &MentorRecord,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    match &mentor.profile {
        Some(profile) => ScoreBreakdown {
            industry_matches: count_industry_overlap(mentee, profile) * weights.industry,
            skill_matches: count_skill_overlap(mentee, profile) * weights.skill,
            language_matches: count_language_overlap(mentee, profile) * weights.language,
            availability_bonus: availability_bonus(profile, weights),
        },
        None => ScoreBreakdown::default(),
    }
}

/// Count mentee industries also present in the mentor's industry set.
///
/// Industries are a closed enum, so this is exact equality.
#[inline]
fn count_industry_overlap(mentee: &MenteeProfile, profile: &MentorProfile) -> u32 {
    mentee
        .industries
        .iter()
        .filter(|industry| profile.industries.contains(industry))
        .count() as u32
}

/// Count mentee skills that match at least one mentor skill.
///
/// Each mentee skill counts once no matter how many mentor skills it
/// matches. Duplicate entries are counted independently.
#[inline]
fn count_skill_overlap(mentee: &MenteeProfile, profile: &MentorProfile) -> u32 {
    mentee
        .skills
        .iter()
        .filter(|skill| {
            profile
                .skills
                .iter()
                .any(|mentor_skill| skills_overlap(skill, mentor_skill))
        })
        .count() as u32
}

/// Bidirectional case-insensitive substring test.
///
/// "Java" matches "JavaScript" and "JavaScript" matches "Java". This is a
/// deliberate heuristic, not token or edit-distance matching.
#[inline]
pub fn skills_overlap(mentee_skill: &str, mentor_skill: &str) -> bool {
    let mentee_skill = mentee_skill.to_lowercase();
    let mentor_skill = mentor_skill.to_lowercase();

    mentor_skill.contains(&mentee_skill) || mentee_skill.contains(&mentor_skill)
}

/// Count mentee languages present in the mentor's language set.
///
/// Exact string equality, unlike skills.
#[inline]
fn count_language_overlap(mentee: &MenteeProfile, profile: &MentorProfile) -> u32 {
    mentee
        .languages
        .iter()
        .filter(|language| profile.languages.contains(language))
        .count() as u32
}

/// Flat bonus when the mentor has a non-empty availability note.
///
/// A presence check only: the note's content is never inspected, and no
/// calendar is consulted.
#[inline]
fn availability_bonus(profile: &MentorProfile, weights: &ScoringWeights) -> u32 {
    match profile.availability.as_deref() {
        Some(availability) if !availability.is_empty() => weights.availability,
        _ => 0,
    }
}
