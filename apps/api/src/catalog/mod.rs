//! Catalog store — read-only queries over the seeded courses, schools, and
//! scholarships. Full scans and exact-match index lookups only; `ORDER BY id`
//! preserves catalog insertion order everywhere.

pub mod handlers;
pub mod seed;

use sqlx::PgPool;

use crate::models::catalog::{CourseRow, ScholarshipRow, SchoolRow};

pub async fn list_courses(pool: &PgPool) -> Result<Vec<CourseRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM courses ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn courses_by_type(pool: &PgPool, course_type: &str) -> Result<Vec<CourseRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM courses WHERE course_type = $1 ORDER BY id")
        .bind(course_type)
        .fetch_all(pool)
        .await
}

pub async fn list_schools(pool: &PgPool) -> Result<Vec<SchoolRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM schools ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Exact-match region index — no substring semantics here.
pub async fn schools_by_region(pool: &PgPool, region: &str) -> Result<Vec<SchoolRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM schools WHERE region = $1 ORDER BY id")
        .bind(region)
        .fetch_all(pool)
        .await
}

pub async fn schools_by_location(pool: &PgPool, location: &str) -> Result<Vec<SchoolRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM schools WHERE location = $1 ORDER BY id")
        .bind(location)
        .fetch_all(pool)
        .await
}

pub async fn schools_by_type(pool: &PgPool, school_type: &str) -> Result<Vec<SchoolRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM schools WHERE school_type = $1 ORDER BY id")
        .bind(school_type)
        .fetch_all(pool)
        .await
}

pub async fn list_scholarships(pool: &PgPool) -> Result<Vec<ScholarshipRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM scholarships ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn scholarships_by_type(
    pool: &PgPool,
    scholarship_type: &str,
) -> Result<Vec<ScholarshipRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM scholarships WHERE scholarship_type = $1 ORDER BY id")
        .bind(scholarship_type)
        .fetch_all(pool)
        .await
}
