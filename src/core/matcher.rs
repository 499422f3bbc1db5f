use crate::models::{MenteeProfile, MentorMatch, MentorRecord, ScoringWeights};
use crate::core::scoring::score_mentor;

/// Maximum number of mentors returned to a mentee.
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MentorMatch>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// Scores every candidate mentor against the mentee profile, ranks by score
/// and truncates to the shortlist size. Pure and synchronous: the candidate
/// collection is supplied by the caller, and nothing here performs I/O.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank candidate mentors for a mentee
    ///
    /// Every candidate is scored independently, so the per-mentor scores do
    /// not depend on enumeration order. The sort is stable: mentors with
    /// equal scores keep their relative order from the candidate collection.
    ///
    /// # Arguments
    /// * `mentee` - The mentee profile to match against
    /// * `candidates` - All approved mentors from the directory
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with the ranked shortlist and the candidate count
    pub fn match_mentors(
        &self,
        mentee: &MenteeProfile,
        candidates: Vec<MentorRecord>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<MentorMatch> = candidates
            .into_iter()
            .map(|mentor| {
                let score_breakdown = score_mentor(mentee, &mentor, &self.weights);

                MentorMatch {
                    mentor,
                    score: score_breakdown.total(),
                    score_breakdown,
                }
            })
            .collect();

        // Vec::sort_by is stable, which preserves input order among ties
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
