//! Profile store — one record per user, full-replace upsert.

pub mod handlers;

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{is_known_region, BudgetLevel, EducationLevel, PreferredType, ProfileRow};

/// Mutable profile fields. Enum fields are validated by serde; skills,
/// interests, and location are checked in `validate` before any write.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpsert {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub location: String,
    pub education_level: EducationLevel,
    pub preferred_type: PreferredType,
    pub budget: Option<BudgetLevel>,
}

impl ProfileUpsert {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.skills.iter().all(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "select at least one skill".to_string(),
            ));
        }
        if self.interests.iter().all(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "select at least one interest".to_string(),
            ));
        }
        if !is_known_region(&self.location) {
            return Err(AppError::Validation(format!(
                "'{}' is not a Philippine region",
                self.location
            )));
        }
        Ok(())
    }
}

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Creates or fully replaces the user's profile in one statement.
///
/// Last-writer-wins: all mutable fields come from this request, never a merge
/// with the stored row. Returns the profile id.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    fields: &ProfileUpsert,
) -> Result<i64, AppError> {
    fields.validate()?;

    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO user_profiles
            (user_id, skills, interests, location, education_level, preferred_type, budget)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE SET
            skills = EXCLUDED.skills,
            interests = EXCLUDED.interests,
            location = EXCLUDED.location,
            education_level = EXCLUDED.education_level,
            preferred_type = EXCLUDED.preferred_type,
            budget = EXCLUDED.budget,
            updated_at = NOW()
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(&fields.skills)
    .bind(&fields.interests)
    .bind(&fields.location)
    .bind(fields.education_level.as_str())
    .bind(fields.preferred_type.as_str())
    .bind(fields.budget.map(|b| b.as_str()))
    .fetch_one(pool)
    .await?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_upsert() -> ProfileUpsert {
        ProfileUpsert {
            skills: vec!["programming".to_string()],
            interests: vec!["Technology".to_string()],
            location: "Metro Manila".to_string(),
            education_level: EducationLevel::HighSchool,
            preferred_type: PreferredType::Both,
            budget: None,
        }
    }

    #[test]
    fn test_valid_upsert_passes() {
        assert!(valid_upsert().validate().is_ok());
    }

    #[test]
    fn test_empty_skills_rejected() {
        let mut req = valid_upsert();
        req.skills = vec![];
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_interests_rejected() {
        let mut req = valid_upsert();
        req.interests = vec!["   ".to_string()];
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_region_rejected() {
        let mut req = valid_upsert();
        req.location = "Quezon City".to_string(); // a city, not a region
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_upsert_deserializes_kebab_case_enums() {
        let req: ProfileUpsert = serde_json::from_str(
            r#"{
                "skills": ["cooking"],
                "interests": ["food"],
                "location": "Central Visayas",
                "education_level": "high-school",
                "preferred_type": "tesda",
                "budget": "low"
            }"#,
        )
        .unwrap();
        assert_eq!(req.education_level, EducationLevel::HighSchool);
        assert_eq!(req.preferred_type, PreferredType::Tesda);
        assert_eq!(req.budget, Some(BudgetLevel::Low));
    }
}
