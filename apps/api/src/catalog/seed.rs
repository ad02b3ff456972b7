//! Catalog seeding — loads the embedded sample catalogs on first run.
//!
//! Each collection seeds only when empty, so re-running is a no-op. The count
//! check and inserts run inside one transaction, and every catalog table carries
//! a UNIQUE constraint on `name` with ON CONFLICT DO NOTHING on insert, so two
//! first-run seeders racing cannot produce duplicate rows.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;

const COURSES_JSON: &str = include_str!("../../data/courses.json");
const SCHOOLS_JSON: &str = include_str!("../../data/schools.json");
const SCHOLARSHIPS_JSON: &str = include_str!("../../data/scholarships.json");

#[derive(Debug, Deserialize)]
pub struct SeedCourse {
    pub name: String,
    pub course_type: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub requirements: Vec<String>,
    pub career_paths: Vec<String>,
    pub skills: Vec<String>,
    pub average_salary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedSchool {
    pub name: String,
    pub school_type: String,
    pub location: String,
    pub region: String,
    pub courses: Vec<String>,
    pub website: Option<String>,
    pub contact_info: Option<String>,
    pub tuition_range: Option<String>,
    pub accreditation: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedScholarship {
    pub name: String,
    pub provider: String,
    pub scholarship_type: String,
    pub amount: String,
    pub requirements: Vec<String>,
    pub eligible_courses: Vec<String>,
    pub deadline: Option<String>,
    pub application_link: Option<String>,
    pub description: String,
}

/// Rows inserted per collection; 0 means the collection was already seeded.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub courses_inserted: u64,
    pub schools_inserted: u64,
    pub scholarships_inserted: u64,
}

pub fn sample_courses() -> anyhow::Result<Vec<SeedCourse>> {
    serde_json::from_str(COURSES_JSON).context("embedded courses.json is malformed")
}

pub fn sample_schools() -> anyhow::Result<Vec<SeedSchool>> {
    serde_json::from_str(SCHOOLS_JSON).context("embedded schools.json is malformed")
}

pub fn sample_scholarships() -> anyhow::Result<Vec<SeedScholarship>> {
    serde_json::from_str(SCHOLARSHIPS_JSON).context("embedded scholarships.json is malformed")
}

/// Seeds all three catalogs. Idempotent: non-empty collections are untouched.
pub async fn seed_catalogs(pool: &PgPool) -> Result<SeedReport, AppError> {
    let report = SeedReport {
        courses_inserted: seed_courses(pool).await?,
        schools_inserted: seed_schools(pool).await?,
        scholarships_inserted: seed_scholarships(pool).await?,
    };
    info!(
        "Catalog seed complete: {} courses, {} schools, {} scholarships inserted",
        report.courses_inserted, report.schools_inserted, report.scholarships_inserted
    );
    Ok(report)
}

async fn seed_courses(pool: &PgPool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM courses")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for course in sample_courses()? {
        let result = sqlx::query(
            r#"
            INSERT INTO courses
                (name, course_type, category, description, duration,
                 requirements, career_paths, skills, average_salary)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(&course.name)
        .bind(&course.course_type)
        .bind(&course.category)
        .bind(&course.description)
        .bind(&course.duration)
        .bind(&course.requirements)
        .bind(&course.career_paths)
        .bind(&course.skills)
        .bind(&course.average_salary)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn seed_schools(pool: &PgPool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM schools")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for school in sample_schools()? {
        let result = sqlx::query(
            r#"
            INSERT INTO schools
                (name, school_type, location, region, courses,
                 website, contact_info, tuition_range, accreditation)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(&school.name)
        .bind(&school.school_type)
        .bind(&school.location)
        .bind(&school.region)
        .bind(&school.courses)
        .bind(&school.website)
        .bind(&school.contact_info)
        .bind(&school.tuition_range)
        .bind(&school.accreditation)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn seed_scholarships(pool: &PgPool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scholarships")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for scholarship in sample_scholarships()? {
        let result = sqlx::query(
            r#"
            INSERT INTO scholarships
                (name, provider, scholarship_type, amount, requirements,
                 eligible_courses, deadline, application_link, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(&scholarship.name)
        .bind(&scholarship.provider)
        .bind(&scholarship.scholarship_type)
        .bind(&scholarship.amount)
        .bind(&scholarship.requirements)
        .bind(&scholarship.eligible_courses)
        .bind(&scholarship.deadline)
        .bind(&scholarship.application_link)
        .bind(&scholarship.description)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::ALL_COURSES_SENTINEL;
    use crate::models::profile::is_known_region;

    #[test]
    fn test_sample_courses_parse() {
        let courses = sample_courses().unwrap();
        assert_eq!(courses.len(), 8);
        assert!(courses
            .iter()
            .all(|c| c.course_type == "college" || c.course_type == "tesda"));
        assert!(courses.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn test_sample_course_names_unique() {
        let courses = sample_courses().unwrap();
        let mut names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), courses.len());
    }

    #[test]
    fn test_sample_schools_parse_with_known_regions() {
        let schools = sample_schools().unwrap();
        assert_eq!(schools.len(), 9);
        for school in &schools {
            assert!(is_known_region(&school.region), "unknown region: {}", school.region);
        }
    }

    #[test]
    fn test_sample_scholarships_parse() {
        let scholarships = sample_scholarships().unwrap();
        assert_eq!(scholarships.len(), 8);
        // CHED is the universal one.
        let ched = scholarships
            .iter()
            .find(|s| s.name == "CHED Scholarship Program")
            .unwrap();
        assert_eq!(ched.eligible_courses, vec![ALL_COURSES_SENTINEL]);
    }
}
