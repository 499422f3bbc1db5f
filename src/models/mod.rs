// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Industry, MenteeProfile, MentorFilters, MentorMatch, MentorProfile, MentorRecord, ScoreBreakdown, ScoringWeights};
pub use requests::{MatchMentorsRequest, MentorListQuery};
pub use responses::{ErrorResponse, HealthResponse};
