// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::matches_filters;
pub use matcher::{Matcher, MatchResult, DEFAULT_MATCH_LIMIT};
pub use scoring::{score_mentor, skills_overlap};
