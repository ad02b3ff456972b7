use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog;
use crate::catalog::seed::{seed_catalogs, SeedReport};
use crate::errors::AppError;
use crate::matching::{match_courses, match_scholarships, schools_by_course, ScoredCourse};
use crate::models::catalog::{
    CourseRow, CourseType, ScholarshipRow, ScholarshipType, SchoolRow, SchoolType,
};
use crate::models::profile::PreferredType;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    #[serde(rename = "type")]
    pub course_type: Option<CourseType>,
}

/// GET /api/v1/courses[?type=college|tesda]
pub async fn handle_list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseListQuery>,
) -> Result<Json<Vec<CourseRow>>, AppError> {
    let courses = match params.course_type {
        Some(t) => catalog::courses_by_type(&state.db, t.as_str()).await?,
        None => catalog::list_courses(&state.db).await?,
    };
    Ok(Json(courses))
}

#[derive(Debug, Deserialize)]
pub struct CourseSearchRequest {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub preferred_type: Option<PreferredType>,
}

/// POST /api/v1/courses/search
///
/// Direct access to the course matcher; returns up to 10 scored courses.
pub async fn handle_search_courses(
    State(state): State<AppState>,
    Json(req): Json<CourseSearchRequest>,
) -> Result<Json<Vec<ScoredCourse>>, AppError> {
    let courses = catalog::list_courses(&state.db).await?;
    let matched = match_courses(
        &courses,
        &req.skills,
        &req.interests,
        req.preferred_type.map(|t| t.as_str()),
    );
    Ok(Json(matched))
}

#[derive(Debug, Deserialize)]
pub struct SchoolListQuery {
    pub region: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub school_type: Option<SchoolType>,
}

/// GET /api/v1/schools[?region=..|location=..|type=..]
///
/// All three filters are exact-match index lookups; region takes precedence
/// over location over type when several are supplied.
pub async fn handle_list_schools(
    State(state): State<AppState>,
    Query(params): Query<SchoolListQuery>,
) -> Result<Json<Vec<SchoolRow>>, AppError> {
    let schools = if let Some(region) = &params.region {
        catalog::schools_by_region(&state.db, region).await?
    } else if let Some(location) = &params.location {
        catalog::schools_by_location(&state.db, location).await?
    } else if let Some(school_type) = params.school_type {
        catalog::schools_by_type(&state.db, school_type.as_str()).await?
    } else {
        catalog::list_schools(&state.db).await?
    };
    Ok(Json(schools))
}

#[derive(Debug, Deserialize)]
pub struct SchoolSearchQuery {
    pub course: String,
    pub location: Option<String>,
}

/// GET /api/v1/schools/search?course=..[&location=..]
pub async fn handle_search_schools(
    State(state): State<AppState>,
    Query(params): Query<SchoolSearchQuery>,
) -> Result<Json<Vec<SchoolRow>>, AppError> {
    if params.course.trim().is_empty() {
        return Err(AppError::Validation("course must not be empty".to_string()));
    }
    let schools = catalog::list_schools(&state.db).await?;
    let matched = schools_by_course(&schools, &params.course, params.location.as_deref());
    Ok(Json(matched))
}

#[derive(Debug, Deserialize)]
pub struct ScholarshipListQuery {
    #[serde(rename = "type")]
    pub scholarship_type: Option<ScholarshipType>,
}

/// GET /api/v1/scholarships[?type=academic|need-based|sports|talent]
pub async fn handle_list_scholarships(
    State(state): State<AppState>,
    Query(params): Query<ScholarshipListQuery>,
) -> Result<Json<Vec<ScholarshipRow>>, AppError> {
    let scholarships = match params.scholarship_type {
        Some(t) => catalog::scholarships_by_type(&state.db, t.as_str()).await?,
        None => catalog::list_scholarships(&state.db).await?,
    };
    Ok(Json(scholarships))
}

#[derive(Debug, Deserialize)]
pub struct ScholarshipSearchRequest {
    pub courses: Vec<String>,
}

/// POST /api/v1/scholarships/search
pub async fn handle_search_scholarships(
    State(state): State<AppState>,
    Json(req): Json<ScholarshipSearchRequest>,
) -> Result<Json<Vec<ScholarshipRow>>, AppError> {
    let scholarships = catalog::list_scholarships(&state.db).await?;
    let matched = match_scholarships(&scholarships, &req.courses);
    Ok(Json(matched))
}

/// POST /api/v1/seed
///
/// Loads the sample catalogs; a no-op for collections that already have rows.
pub async fn handle_seed(State(state): State<AppState>) -> Result<Json<SeedReport>, AppError> {
    let report = seed_catalogs(&state.db).await?;
    Ok(Json(report))
}
