use serde::{Deserialize, Serialize};

/// Industry tags used by profiles.
///
/// This is a closed set, so overlap checks are plain enum equality rather
/// than string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Marketing,
    Sales,
    Education,
    Consulting,
    Legal,
    Engineering,
    Design,
    Other,
}

impl std::str::FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TECHNOLOGY" => Ok(Industry::Technology),
            "FINANCE" => Ok(Industry::Finance),
            "HEALTHCARE" => Ok(Industry::Healthcare),
            "MARKETING" => Ok(Industry::Marketing),
            "SALES" => Ok(Industry::Sales),
            "EDUCATION" => Ok(Industry::Education),
            "CONSULTING" => Ok(Industry::Consulting),
            "LEGAL" => Ok(Industry::Legal),
            "ENGINEERING" => Ok(Industry::Engineering),
            "DESIGN" => Ok(Industry::Design),
            "OTHER" => Ok(Industry::Other),
            other => Err(format!("unknown industry tag: {}", other)),
        }
    }
}

/// Mentee profile used as the query side of matching
///
/// All collections default to empty: a sparse profile is valid input and
/// simply contributes zero to the affected score components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenteeProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub industries: Vec<Industry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Mentor-side profile data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorProfile {
    #[serde(default)]
    pub industries: Vec<Industry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Free-text availability note. Scoring only checks presence, not content.
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: Option<u16>,
}

/// An approved mentor as served by the directory backend
///
/// The profile is optional: mentors who never filled one in are still
/// listed and scored (at zero on every profile-dependent component).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "profileImageUrl", default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub profile: Option<MentorProfile>,
}

/// Per-component decomposition of a match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "industryMatches")]
    pub industry_matches: u32,
    #[serde(rename = "skillMatches")]
    pub skill_matches: u32,
    #[serde(rename = "languageMatches")]
    pub language_matches: u32,
    #[serde(rename = "availabilityBonus")]
    pub availability_bonus: u32,
}

impl ScoreBreakdown {
    /// Total score. Always the sum of the four components.
    pub fn total(&self) -> u32 {
        self.industry_matches + self.skill_matches + self.language_matches + self.availability_bonus
    }
}

/// One scored mentor in the ranked result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorMatch {
    pub mentor: MentorRecord,
    pub score: u32,
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: ScoreBreakdown,
}

/// Optional filters for the mentor directory listing
#[derive(Debug, Clone, Default)]
pub struct MentorFilters {
    pub industries: Vec<Industry>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
}

impl MentorFilters {
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty() && self.skills.is_empty() && self.languages.is_empty()
    }
}

/// Scoring weights
///
/// `industry`, `skill` and `language` are per-overlap points; `availability`
/// is a flat bonus applied once when the mentor has an availability note.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub industry: u32,
    pub skill: u32,
    pub language: u32,
    pub availability: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            industry: 3,
            skill: 2,
            language: 1,
            availability: 2,
        }
    }
}
