//! Recommendation orchestrator — composes the matching engine with the
//! narrative generator.
//!
//! Flow: profile → match_courses (top 5) → schools_by_region (top 5) →
//!       match_scholarships on the top-3 course names (top 5) →
//!       prompt → narrative → response.
//!
//! The deterministic lists are repeatable for an unchanged catalog; the
//! narrative is not, and nothing here is cached.

pub mod handlers;
pub mod narrator;
pub mod prompts;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::catalog;
use crate::errors::AppError;
use crate::matching::{match_courses, match_scholarships, ScoredCourse};
use crate::models::catalog::{ScholarshipRow, SchoolRow};
use crate::profile::get_profile;
use crate::recommend::narrator::NarrativeGenerator;
use crate::recommend::prompts::build_recommendation_prompt;

/// Entries kept per result list.
pub const RESULT_LIMIT: usize = 5;
/// Top course names used as scholarship candidates.
const CANDIDATE_COURSES: usize = 3;

/// Profile subset a chat client may attach for personalization.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatContext {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    pub courses: Vec<ScoredCourse>,
    pub schools: Vec<SchoolRow>,
    pub scholarships: Vec<ScholarshipRow>,
    pub narrative: String,
}

/// Generates the full recommendation payload for one user.
///
/// Requires an existing profile; a missing one is a NotFound, not a crash.
/// Generator failures propagate — the caller decides whether to retry.
pub async fn generate_recommendations(
    pool: &PgPool,
    narrator: &dyn NarrativeGenerator,
    user_id: Uuid,
) -> Result<RecommendationResult, AppError> {
    let profile = get_profile(pool, user_id).await?.ok_or_else(|| {
        AppError::NotFound(
            "No profile found for this user. Create a profile before requesting recommendations."
                .to_string(),
        )
    })?;

    let catalog_courses = catalog::list_courses(pool).await?;
    let mut courses = match_courses(
        &catalog_courses,
        &profile.skills,
        &profile.interests,
        Some(&profile.preferred_type),
    );
    courses.truncate(RESULT_LIMIT);

    let mut schools = catalog::schools_by_region(pool, &profile.location).await?;
    schools.truncate(RESULT_LIMIT);

    let candidates: Vec<String> = courses
        .iter()
        .take(CANDIDATE_COURSES)
        .map(|c| c.course.name.clone())
        .collect();
    let catalog_scholarships = catalog::list_scholarships(pool).await?;
    let mut scholarships = match_scholarships(&catalog_scholarships, &candidates);
    scholarships.truncate(RESULT_LIMIT);

    info!(
        "Matched {} courses, {} schools, {} scholarships for user {}",
        courses.len(),
        schools.len(),
        scholarships.len(),
        user_id
    );

    let prompt = build_recommendation_prompt(&profile, &courses, &schools, &scholarships);
    let narrative = narrator.advise(&prompt).await?;

    Ok(RecommendationResult {
        courses,
        schools,
        scholarships,
        narrative,
    })
}
