// Unit tests for the mentor matching service

use mentor_match::core::{matches_filters, score_mentor, skills_overlap};
use mentor_match::models::{
    Industry, MenteeProfile, MentorFilters, MentorProfile, MentorRecord, ScoringWeights,
};

fn mentee(industries: Vec<Industry>, skills: Vec<&str>, languages: Vec<&str>) -> MenteeProfile {
    MenteeProfile {
        user_id: "mentee".to_string(),
        industries,
        skills: skills.into_iter().map(String::from).collect(),
        languages: languages.into_iter().map(String::from).collect(),
    }
}

fn mentor(id: &str, profile: Option<MentorProfile>) -> MentorRecord {
    MentorRecord {
        id: id.to_string(),
        name: format!("Mentor {}", id),
        profile_image_url: None,
        profile,
    }
}

fn mentor_profile(
    industries: Vec<Industry>,
    skills: Vec<&str>,
    languages: Vec<&str>,
    availability: Option<&str>,
) -> MentorProfile {
    MentorProfile {
        industries,
        skills: skills.into_iter().map(String::from).collect(),
        languages: languages.into_iter().map(String::from).collect(),
        availability: availability.map(String::from),
        headline: Some("Experienced mentor".to_string()),
        bio: None,
        years_experience: Some(8),
    }
}

#[test]
fn test_reference_scoring_scenario() {
    // Mentee: TECHNOLOGY / React, SQL / English
    // Mentor: TECHNOLOGY+FINANCE / react, node / English+Spanish / available
    let mentee = mentee(
        vec![Industry::Technology],
        vec!["React", "SQL"],
        vec!["English"],
    );
    let mentor = mentor(
        "a",
        Some(mentor_profile(
            vec![Industry::Technology, Industry::Finance],
            vec!["react", "node"],
            vec!["English", "Spanish"],
            Some("Weekdays 9-5"),
        )),
    );

    let breakdown = score_mentor(&mentee, &mentor, &ScoringWeights::default());

    assert_eq!(breakdown.industry_matches, 3);
    assert_eq!(breakdown.skill_matches, 2);
    assert_eq!(breakdown.language_matches, 1);
    assert_eq!(breakdown.availability_bonus, 2);
    assert_eq!(breakdown.total(), 8);
}

#[test]
fn test_java_matches_javascript() {
    let mentee = mentee(vec![], vec!["Java"], vec![]);
    let mentor = mentor(
        "b",
        Some(mentor_profile(vec![], vec!["JavaScript"], vec![], None)),
    );

    let breakdown = score_mentor(&mentee, &mentor, &ScoringWeights::default());
    assert_eq!(breakdown.skill_matches, 2);
}

#[test]
fn test_absent_profile_scores_zero() {
    let mentee = mentee(
        vec![Industry::Technology],
        vec!["React"],
        vec!["English"],
    );
    let bare = mentor("c", None);

    let breakdown = score_mentor(&mentee, &bare, &ScoringWeights::default());
    assert_eq!(breakdown.total(), 0);
}

#[test]
fn test_skills_overlap_symmetry() {
    assert!(skills_overlap("Java", "JavaScript"));
    assert!(skills_overlap("JavaScript", "Java"));
    assert!(skills_overlap("sql", "SQL Server"));
    assert!(!skills_overlap("Go", "Rust"));
}

#[test]
fn test_industry_equality_is_case_sensitive_tags() {
    // Industry is a closed enum, so only exact tags overlap
    let mentee = mentee(vec![Industry::Technology], vec![], vec![]);
    let mentor = mentor(
        "d",
        Some(mentor_profile(vec![Industry::Engineering], vec![], vec![], None)),
    );

    let breakdown = score_mentor(&mentee, &mentor, &ScoringWeights::default());
    assert_eq!(breakdown.industry_matches, 0);
}

#[test]
fn test_directory_filters_combined() {
    let candidate = mentor(
        "e",
        Some(mentor_profile(
            vec![Industry::Design],
            vec!["Figma"],
            vec!["English"],
            None,
        )),
    );

    let filters = MentorFilters {
        industries: vec![Industry::Design],
        skills: vec!["figma".to_string()],
        languages: vec!["English".to_string()],
    };

    assert!(matches_filters(&candidate, &filters));

    let mismatched = MentorFilters {
        industries: vec![Industry::Design],
        skills: vec!["Photoshop".to_string()],
        languages: vec!["English".to_string()],
    };

    assert!(!matches_filters(&candidate, &mismatched));
}

#[test]
fn test_custom_weights_scale_components() {
    let mentee = mentee(
        vec![Industry::Technology],
        vec!["React"],
        vec!["English"],
    );
    let candidate = mentor(
        "f",
        Some(mentor_profile(
            vec![Industry::Technology],
            vec!["React"],
            vec!["English"],
            Some("Evenings"),
        )),
    );

    let weights = ScoringWeights {
        industry: 10,
        skill: 5,
        language: 2,
        availability: 1,
    };

    let breakdown = score_mentor(&mentee, &candidate, &weights);
    assert_eq!(breakdown.industry_matches, 10);
    assert_eq!(breakdown.skill_matches, 5);
    assert_eq!(breakdown.language_matches, 2);
    assert_eq!(breakdown.availability_bonus, 1);
    assert_eq!(breakdown.total(), 18);
}
