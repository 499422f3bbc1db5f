use crate::models::{MenteeProfile, MentorRecord};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the directory backend
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("No profile found for user {0}")]
    ProfileMissing(String),

    #[error("Mentor not found: {0}")]
    MentorNotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the platform directory backend
///
/// The directory owns all persistent data. This client consumes exactly the
/// interface the matching service needs:
/// - Resolving a mentee profile by user id
/// - The bulk read of approved mentors (each optionally carrying a profile)
/// - Single-mentor lookup
pub struct DirectoryClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl DirectoryClient {
    /// Create a new directory client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch the mentee profile for a given user ID
    ///
    /// A 404 from the backend becomes `ProfileMissing`, which the match
    /// endpoint translates into its "complete your profile first" response.
    pub async fn get_profile(&self, user_id: &str) -> Result<MenteeProfile, DirectoryError> {
        let url = format!(
            "{}/profiles/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching mentee profile from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DirectoryError::ProfileMissing(user_id.to_string()));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectoryError::Unauthorized);
        }
        if !status.is_success() {
            return Err(DirectoryError::Api(format!(
                "Failed to fetch profile: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Fetch all approved mentors
    ///
    /// One unfiltered bulk read. The backend has already applied the admin
    /// approval gate, so every record returned is a valid candidate.
    pub async fn list_mentors(&self) -> Result<Vec<MentorRecord>, DirectoryError> {
        let url = format!("{}/mentors", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DirectoryError::Api(format!(
                "Failed to list mentors: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .as_array()
            .ok_or_else(|| DirectoryError::InvalidResponse("Expected mentor array".into()))?;

        let total = documents.len();

        // Skip malformed records instead of failing the whole read
        let mentors: Vec<MentorRecord> = documents
            .iter()
            .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
            .collect();

        tracing::debug!("Fetched {} mentors (total documents: {})", mentors.len(), total);

        Ok(mentors)
    }

    /// Get a single mentor by ID
    pub async fn get_mentor(&self, mentor_id: &str) -> Result<MentorRecord, DirectoryError> {
        let url = format!(
            "{}/mentors/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(mentor_id)
        );

        tracing::debug!("Fetching mentor: {}", mentor_id);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DirectoryError::MentorNotFound(mentor_id.to_string()));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectoryError::Unauthorized);
        }
        if !status.is_success() {
            return Err(DirectoryError::Api(format!(
                "Failed to fetch mentor: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse mentor: {}", e)))
    }

    /// Check that the directory backend is reachable
    pub async fn health_check(&self) -> Result<bool, DirectoryError> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }
}
