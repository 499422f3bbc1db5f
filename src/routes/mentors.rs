use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{MatchMentorsRequest, MentorListQuery, ErrorResponse, HealthResponse};
use crate::services::{DirectoryClient, DirectoryError};
use crate::core::{matches_filters, Matcher};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryClient>,
    pub matcher: Matcher,
    pub match_limit: usize,
}

/// Configure all mentor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors/match", web::post().to(match_mentors))
        .route("/mentors", web::get().to(list_mentors))
        .route("/mentors/{id}", web::get().to(get_mentor));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Degraded when the directory backend is unreachable
    let directory_healthy = state.directory.health_check().await.unwrap_or(false);

    let status = if directory_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match mentors endpoint
///
/// POST /api/v1/mentors/match
///
/// Request body:
/// ```json
/// {
///   "userId": "string"
/// }
/// ```
///
/// Responds with a JSON array of `{ mentor, score, scoreBreakdown }` objects,
/// ranked by score and capped at the configured shortlist size.
async fn match_mentors(
    state: web::Data<AppState>,
    req: web::Json<MatchMentorsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match_mentors request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;

    tracing::info!("Matching mentors for user: {}", user_id);

    // Resolve the mentee profile. Matching without one is a client error.
    let mentee = match state.directory.get_profile(user_id).await {
        Ok(profile) => profile,
        Err(DirectoryError::ProfileMissing(_)) => {
            tracing::info!("No profile on file for user {}", user_id);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: "Profile not found. Please complete your profile first.".to_string(),
                status_code: 400,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to match mentors".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // The single bulk read of approved mentors
    let candidates = match state.directory.list_mentors().await {
        Ok(mentors) => mentors,
        Err(e) => {
            tracing::error!("Failed to fetch mentor directory for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to match mentors".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Scoring {} candidates for {}", candidates.len(), user_id);

    // Run matching algorithm
    let result = state
        .matcher
        .match_mentors(&mentee, candidates, state.match_limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(result.matches)
}

/// Mentor directory listing endpoint
///
/// GET /api/v1/mentors?industries=TECHNOLOGY,FINANCE&skills=React&languages=English
///
/// Filters are optional; with none set the full approved directory is
/// returned.
async fn list_mentors(
    state: web::Data<AppState>,
    query: web::Query<MentorListQuery>,
) -> impl Responder {
    let filters = query.into_inner().into_filters();

    let mentors = match state.directory.list_mentors().await {
        Ok(mentors) => mentors,
        Err(e) => {
            tracing::error!("Failed to fetch mentors: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch mentors".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let filtered: Vec<_> = mentors
        .into_iter()
        .filter(|mentor| matches_filters(mentor, &filters))
        .collect();

    tracing::debug!("Listing {} mentors after filtering", filtered.len());

    HttpResponse::Ok().json(filtered)
}

/// Single mentor lookup
///
/// GET /api/v1/mentors/{id}
async fn get_mentor(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let mentor_id = path.into_inner();

    match state.directory.get_mentor(&mentor_id).await {
        Ok(mentor) => HttpResponse::Ok().json(mentor),
        Err(DirectoryError::MentorNotFound(_)) => {
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Mentor not found".to_string(),
                message: format!("No mentor with id {}", mentor_id),
                status_code: 404,
            })
        }
        Err(e) => {
            tracing::error!("Failed to fetch mentor {}: {}", mentor_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch mentor".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
